use alloc::vec::Vec;

use crate::dictionary::{BASE_ALPHABET_LEN, EncodeDictionary};
use crate::error::CompressionError;

type Result<T> = core::result::Result<T, CompressionError>;

/// Compresses `input` into `output` as a stream of one-byte dictionary
/// tokens.
///
/// Scanning is greedy: each step emits the index of the longest prefix of
/// the remaining input that the current dictionary generation knows, then
/// teaches the dictionary that prefix extended by the next symbol. When the
/// dictionary reaches capacity it is re-seeded with the base alphabet before
/// the next step, so emitted indices always fit in a single byte.
///
/// Empty input produces zero tokens.
///
/// # Parameters
/// * `input`: The source text to compress, restricted to 7-bit symbols.
/// * `output`: The destination vector (appended to), one byte per token.
///
/// # Errors
/// Returns [`CompressionError::SymbolOutOfRange`] for the first input byte
/// outside `0..=127`. Validation runs up front, so nothing is appended to
/// `output` on failure.
pub fn compress(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    if let Some(position) = input
        .iter()
        .position(|&byte| usize::from(byte) >= BASE_ALPHABET_LEN)
    {
        return Err(CompressionError::SymbolOutOfRange {
            position,
            byte: input[position],
        });
    }

    let mut dict = EncodeDictionary::new();
    let mut start = 0;

    while start < input.len() {
        // Capacity policy runs before every unit so the emitted indices stay
        // in lock step with the decoder's view of the same stream.
        dict.reset_if_full();

        // The single symbol at `start` is always a base-alphabet key whose
        // index equals its own value.
        let mut token = input[start];
        let mut end = start + 1;

        // Extend the candidate one symbol at a time while it stays a known
        // key; `token` tracks the index of the longest prefix found.
        while end < input.len() {
            match dict.index_of(&input[start..=end]) {
                Some(index) => {
                    token = index;
                    end += 1;
                }
                None => break,
            }
        }

        output.push(token);

        // The failed extension becomes the next dictionary entry. A match
        // that ran to the end of the input has no next symbol and adds
        // nothing.
        if end < input.len() {
            dict.insert(input[start..=end].to_vec());
        }

        start = end;
    }

    Ok(())
}
