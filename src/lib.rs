//! # Byte-Token LZW
//!
//! `lzw8` is a safe, pure-Rust implementation of a dictionary-based LZW
//! compressor whose tokens are single bytes. The dictionary starts from the
//! 128 seven-bit symbols, learns one entry per emitted token, and re-seeds
//! itself whenever it reaches 255 entries, so every index fits in one byte.
//! The serialized form is exactly the token sequence: no header, no length
//! prefix, no end marker.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use alloc::vec::Vec;
//! use lzw8::{compress, decompress};
//!
//! let mut tokens = Vec::new();
//! compress(b"ABABABA", &mut tokens).expect("input is 7-bit");
//!
//! // "A", "B", then the learned entries "AB" (128) and "ABA" (130)
//! assert_eq!(tokens, [65, 66, 128, 130]);
//!
//! let mut text = Vec::new();
//! decompress(&tokens, &mut text).expect("token stream is well-formed");
//! assert_eq!(text, b"ABABABA");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod compress;
pub mod decompress;
pub mod dictionary;
pub mod error;

pub use compress::compress;
pub use decompress::decompress;
pub use error::{CompressionError, DecompressionError};
