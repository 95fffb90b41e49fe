use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

/// Number of single-symbol entries seeded at indices `0..=127` at the start
/// of every generation. Symbols are 7-bit; bytes at or above this value are
/// rejected by the compressor before any dictionary work happens.
pub const BASE_ALPHABET_LEN: usize = 128;

/// Hard cap on entries per dictionary generation.
///
/// Both codec directions check this before processing each unit, so every
/// index assigned is at most 254 and always serializes to a single byte.
pub const CAPACITY: usize = 255;

/// Seeds the compression-side base alphabet: each single symbol maps to the
/// index equal to its own code point.
fn seed_encode() -> BTreeMap<Vec<u8>, u8> {
    (0..BASE_ALPHABET_LEN)
        .map(|symbol| (vec![symbol as u8], symbol as u8))
        .collect()
}

/// Seeds the decompression-side base alphabet, the structural inverse of
/// [`seed_encode`].
fn seed_decode() -> Vec<Vec<u8>> {
    (0..BASE_ALPHABET_LEN)
        .map(|symbol| vec![symbol as u8])
        .collect()
}

/// Compression-side view of the current generation: symbol sequence -> index.
///
/// Indices are assigned densely from the next free slot, so a decoder-side
/// dictionary driven by the emitted token stream stays index-for-index
/// identical as long as both sides apply the reset policy at the same rate.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    map: BTreeMap<Vec<u8>, u8>,
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self { map: seed_encode() }
    }

    /// Starts a new generation if the current one has reached [`CAPACITY`],
    /// discarding all learned entries. Must run before each input unit.
    pub fn reset_if_full(&mut self) {
        if self.map.len() >= CAPACITY {
            self.map = seed_encode();
        }
    }

    #[must_use]
    pub fn contains(&self, sequence: &[u8]) -> bool {
        self.map.contains_key(sequence)
    }

    #[must_use]
    pub fn index_of(&self, sequence: &[u8]) -> Option<u8> {
        self.map.get(sequence).copied()
    }

    /// Adds `sequence` at the next free index.
    ///
    /// The caller has already applied the capacity check for this unit, so
    /// the assigned index never exceeds 254.
    pub fn insert(&mut self, sequence: Vec<u8>) {
        let index = self.map.len() as u8;
        self.map.insert(sequence, index);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Decompression-side view of the current generation: index -> symbol
/// sequence.
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: seed_decode(),
        }
    }

    /// Starts a new generation if the current one has reached [`CAPACITY`].
    /// Must run before each token.
    pub fn reset_if_full(&mut self) {
        if self.entries.len() >= CAPACITY {
            self.entries = seed_decode();
        }
    }

    #[must_use]
    pub fn lookup(&self, token: u8) -> Option<&[u8]> {
        self.entries.get(usize::from(token)).map(Vec::as_slice)
    }

    /// Adds `sequence` at the next free index.
    pub fn insert(&mut self, sequence: Vec<u8>) {
        self.entries.push(sequence);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
