use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    #[error("symbol {byte:#04x} at position {position} is outside the 7-bit alphabet")]
    SymbolOutOfRange { position: usize, byte: u8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("token {token} at position {position} has no dictionary entry and no previous emission to recover from")]
    UnresolvableToken { position: usize, token: u8 },
}
