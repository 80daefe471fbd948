use crate::table::{EncodingRecord, RawRecord};

/// Integer form of one bit-pattern token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompiledPattern {
    pub mask: u32,
    pub signature: u32,
    pub distinct_bits: u32,
}

/// Compile a pattern string into its mask and signature integers.
///
/// The pattern is scanned left to right with the leftmost character as the
/// most significant bit. `'0'` and `'1'` are fixed bits; every other
/// character is a wildcard and contributes a zero bit to both integers.
pub fn compile(pattern: &str) -> CompiledPattern {
    let mut compiled = CompiledPattern::default();
    for ch in pattern.chars() {
        compiled.mask <<= 1;
        compiled.signature <<= 1;
        match ch {
            '0' => {
                compiled.mask |= 1;
                compiled.distinct_bits += 1;
            }
            '1' => {
                compiled.mask |= 1;
                compiled.signature |= 1;
                compiled.distinct_bits += 1;
            }
            _ => {}
        }
    }
    compiled
}

/// Compile every loaded record, preserving input order.
pub fn compile_table(raw: Vec<RawRecord>) -> Vec<EncodingRecord> {
    raw.into_iter()
        .map(|record| {
            let compiled = compile(&record.pattern);
            EncodingRecord {
                source_line: record.source_line,
                mnemonic: record.mnemonic,
                pattern: record.pattern,
                mask: compiled.mask,
                signature: compiled.signature,
                distinct_bits: compiled.distinct_bits,
            }
        })
        .collect()
}
