//! ANSI serialization in both directions.
//!
//! - `encoder`: document to fenced escape text
//! - `import`: escape text back to a document
//! - `decoder`: rendered visual style back to style codes

pub mod decoder;
pub mod encoder;
pub mod import;

pub use decoder::{decode, decode_state, VisualStyle};
pub use encoder::{
    encode, encode_body, encode_scopes, encode_with, fence, open_sequence, EncodeOptions,
    LinePolicy, RESET,
};
pub use import::{import, strip_fence};
