//! Dynamic JSON-shaped values.
//!
//! [`Value`] holds null, booleans, exact decimal numbers, strings, binary
//! blobs, arrays and insertion-ordered objects behind one type. It parses
//! from and prints to JSON text, merges structurally ([`Value::assign`]) and
//! reads as any primitive through total coercions that fall back to a zero
//! value instead of failing.
//!
//! ```
//! use jvalue::Value;
//!
//! let mut config = Value::parse(r#"{"server":{"port":"8080"}}"#).unwrap();
//! config["server"]["hosts"][1] = Value::from("b.example");
//! assert_eq!(config["server"]["port"].as_i32(), 8080);
//! assert_eq!(
//!     config.to_string(),
//!     r#"{"server":{"port":"8080","hosts":[null,"b.example"]}}"#
//! );
//! ```

mod array;
mod cli_args;
mod coerce;
mod construct;
mod index;
mod merge;
mod object;
mod ops;
mod raw;
mod value;
mod walk;

pub mod json;
pub mod number;

pub use cli_args::{from_command_line_arguments, probe_value};
pub use coerce::BoolCoercion;
pub use construct::{Argb, Bytes, ToValue};
pub use index::ValueIndex;
pub use json::{EncoderOptions, JsonDecoder, JsonEncoder, ParseError};
pub use merge::{ArrayMerge, MergeOptions};
pub use object::{ItemKey, Items};
pub use value::{Map, Value, ValueKind};
pub use walk::{walk, ScanControl};
