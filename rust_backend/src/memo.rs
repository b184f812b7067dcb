//! Content-keyed memoization for derived view models.
//!
//! A [`Memo`] holds the most recent result together with the SHA-256 checksum
//! of the JSON serialization of the input it was computed from. A call with
//! equal input (by value) returns the cached result; any change to the input
//! values produces a different checksum and forces recomputation.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};

/// Calculate the SHA-256 checksum of a serializable input.
///
/// # Returns
/// Hexadecimal string representation of the hash of the input's JSON form.
pub fn calculate_checksum<T: Serialize + ?Sized>(input: &T) -> CoreResult<String> {
    let bytes =
        serde_json::to_vec(input).map_err(|e| CoreError::Serialization(e.to_string()))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Single-slot memo safe to share between threads.
#[derive(Debug)]
pub struct Memo<T> {
    enabled: bool,
    slot: Mutex<Option<(String, Arc<T>)>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> Memo<T> {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value for `input`, computing it with `derive` when
    /// the input changed since the last call.
    ///
    /// The lock is not held while `derive` runs, so concurrent callers with
    /// the same new input may both compute; the last writer wins.
    pub fn get_or_derive<I, F>(&self, input: &I, derive: F) -> CoreResult<Arc<T>>
    where
        I: Serialize + ?Sized,
        F: FnOnce(&I) -> T,
    {
        if !self.enabled {
            return Ok(Arc::new(derive(input)));
        }

        let key = calculate_checksum(input)?;
        if let Some((cached_key, value)) = self.slot.lock().as_ref() {
            if *cached_key == key {
                log::debug!("Memo hit for input {}", &key[..12]);
                return Ok(Arc::clone(value));
            }
        }

        let value = Arc::new(derive(input));
        *self.slot.lock() = Some((key, Arc::clone(&value)));
        Ok(value)
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }

    pub fn is_cached(&self) -> bool {
        self.slot.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lesson, SectionId};
    use crate::services::group_lessons;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_checksum_consistency() {
        let lessons = vec![Lesson::new(1, "A", 1, 1)];
        let checksum1 = calculate_checksum(&lessons).unwrap();
        let checksum2 = calculate_checksum(&lessons.clone()).unwrap();
        assert_eq!(checksum1, checksum2);
        assert_eq!(checksum1.len(), 64);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let a = vec![Lesson::new(1, "A", 1, 1)];
        let b = vec![Lesson::new(1, "A", 1, 2)];
        assert_ne!(calculate_checksum(&a).unwrap(), calculate_checksum(&b).unwrap());
    }

    #[test]
    fn test_memo_reuses_result_for_equal_input() {
        let memo = Memo::default();
        let calls = AtomicUsize::new(0);
        let lessons = vec![Lesson::new(1, "A", 1, 1), Lesson::new(2, "B", 2, 1)];

        let derive = |l: &Vec<Lesson>| {
            calls.fetch_add(1, Ordering::SeqCst);
            group_lessons(l)
        };

        let first = memo.get_or_derive(&lessons, derive).unwrap();
        let second = memo.get_or_derive(&lessons.clone(), derive).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_memo_recomputes_when_values_change() {
        let memo = Memo::default();
        let calls = AtomicUsize::new(0);
        let mut lessons = vec![Lesson::new(1, "A", 1, 1)];

        let derive = |l: &Vec<Lesson>| {
            calls.fetch_add(1, Ordering::SeqCst);
            group_lessons(l)
        };

        let first = memo.get_or_derive(&lessons, derive).unwrap();
        lessons[0].section = SectionId(2);
        let second = memo.get_or_derive(&lessons, derive).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(first[0].title, "Section 1");
        assert_eq!(second[0].title, "Section 2");
    }

    #[test]
    fn test_disabled_memo_always_derives() {
        let memo: Memo<usize> = Memo::new(false);
        let calls = AtomicUsize::new(0);
        let input = vec![1, 2, 3];
        for _ in 0..3 {
            memo.get_or_derive(&input, |v: &Vec<i32>| {
                calls.fetch_add(1, Ordering::SeqCst);
                v.len()
            })
            .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(!memo.is_cached());
    }

    #[test]
    fn test_invalidate() {
        let memo: Memo<usize> = Memo::default();
        memo.get_or_derive(&[1, 2], |v: &[i32; 2]| v.len()).unwrap();
        assert!(memo.is_cached());
        memo.invalidate();
        assert!(!memo.is_cached());
    }
}
