/// An input line that survived tokenization but has not been compiled yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub source_line: usize,
    pub pattern: String,
    pub mnemonic: String,
}

/// One compiled row of the decode table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingRecord {
    /// 1-based line number in the input, for diagnostics.
    pub source_line: usize,
    pub mnemonic: String,
    /// The original bit-pattern token the mask and signature were built from.
    pub pattern: String,
    pub mask: u32,
    pub signature: u32,
    /// Count of fixed (non-wildcard) bits; higher means more specific.
    pub distinct_bits: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Instruction width in bits, [1, 32]. Every pattern must have exactly
    /// this many characters.
    pub width: u32,
    /// Restrict wildcard characters to the validated alphabet instead of
    /// accepting anything that is not '0' or '1'.
    pub strict: bool,
}

impl GeneratorConfig {
    pub const MAX_WIDTH: u32 = u32::BITS;

    pub fn new(width: u32) -> Self {
        Self {
            width,
            strict: false,
        }
    }
}

/// Order a table so that a greedy first-match decoder sees narrow patterns
/// before broad ones that would otherwise shadow them. The sort is stable,
/// so records of equal specificity keep their input order.
pub fn sort_by_specificity(records: &mut [EncodingRecord]) {
    records.sort_by(|a, b| b.distinct_bits.cmp(&a.distinct_bits));
}
