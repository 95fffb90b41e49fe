use alloc::vec::Vec;

use crate::dictionary::DecodeDictionary;
use crate::error::DecompressionError;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Decompresses a stream of one-byte dictionary tokens back into text.
///
/// Each token selects an entry of the current dictionary generation; the
/// dictionary is rebuilt on the fly from the emitted text, mirroring the
/// compressor's growth and reset policy so both sides assign identical
/// indices.
///
/// # Parameters
/// * `input`: The token stream, one token per byte.
/// * `output`: The destination vector (appended to).
///
/// # Errors
/// Returns [`DecompressionError::UnresolvableToken`] when a token has no
/// dictionary entry and there is no previous emission to rebuild it from
/// (a malformed or truncated stream).
pub fn decompress(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    // Tokens expand back to at least one symbol each.
    let heuristic_cap = input.len();
    if output.capacity() < output.len() + heuristic_cap {
        output.reserve(heuristic_cap);
    }

    let mut dict = DecodeDictionary::new();

    // The previous emission, kept as an owned sequence so it stays valid
    // across a generation reset.
    let mut previous: Option<Vec<u8>> = None;

    for (position, &token) in input.iter().enumerate() {
        dict.reset_if_full();

        let current = match dict.lookup(token) {
            Some(entry) => entry.to_vec(),
            None => {
                // Read-ahead case: the compressor referenced the entry it
                // was about to create. Rebuild it from the previous emission
                // plus that emission's first symbol.
                let Some(prev) = previous.as_ref() else {
                    return Err(DecompressionError::UnresolvableToken { position, token });
                };
                let mut rebuilt = Vec::with_capacity(prev.len() + 1);
                rebuilt.extend_from_slice(prev);
                rebuilt.push(prev[0]);
                rebuilt
            }
        };

        output.extend_from_slice(&current);

        // Mirror the compressor's insertion, one token behind: the previous
        // emission extended by the first symbol of the current one.
        if let Some(mut entry) = previous.take() {
            entry.push(current[0]);
            dict.insert(entry);
        }

        previous = Some(current);
    }

    Ok(())
}
