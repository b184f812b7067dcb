//! Decoders for the JSON payloads returned by the LMS REST API.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse lesson and enrollment lists
//! - [`loose`]: Tolerant scalar deserializers shared by the models
//!
//! # Example
//!
//! ```no_run
//! use lms_core::parsing::json_parser::parse_lessons_json_str;
//!
//! let lessons = parse_lessons_json_str(r#"[{"id": 1, "section": "2", "order": 1}]"#)
//!     .expect("Failed to parse lessons");
//! ```

pub mod json_parser;
pub mod loose;


pub use json_parser::{
    parse_enrollments_json, parse_enrollments_json_str, parse_lessons_json,
    parse_lessons_json_str,
};
