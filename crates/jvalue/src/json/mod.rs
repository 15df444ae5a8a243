//! JSON text codec.
//!
//! Decoding goes through an intermediate `serde_json` tree so the grammar is
//! handled by a mature parser; encoding is done directly from [`Value`] so
//! binary payloads, decimal scale and the indentation style stay under our
//! control.
//!
//! [`Value`]: crate::Value

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::{JsonDecoder, NodeKind};
pub use encoder::{EncoderOptions, JsonEncoder, BIN_URI_START};
pub use error::ParseError;
