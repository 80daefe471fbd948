use thiserror::Error;

use crate::table::EncodingRecord;

/// Two records a greedy decoder cannot reliably tell apart: their
/// signatures collide while their specificities differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmbiguousPair {
    pub first: EncodingRecord,
    pub second: EncodingRecord,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{} ambiguous pattern pair(s) in encoding table", .pairs.len())]
pub struct AmbiguityError {
    pub pairs: Vec<AmbiguousPair>,
}

pub type Result<T> = std::result::Result<T, AmbiguityError>;

/// Scan every unordered pair of records for ambiguity.
///
/// The scan always completes so that every ambiguous pair is reported in a
/// single run; fatality is decided only at the end. Records with identical
/// signature and identical specificity are not flagged.
pub fn check(records: &[EncodingRecord]) -> Result<()> {
    let mut pairs = Vec::new();
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let (a, b) = (&records[i], &records[j]);
            if a.signature == b.signature && a.distinct_bits != b.distinct_bits {
                tracing::error!(
                    "line {} ({}, {}) is not distinguishable from line {} ({}, {})",
                    a.source_line,
                    a.pattern,
                    a.mnemonic,
                    b.source_line,
                    b.pattern,
                    b.mnemonic
                );
                pairs.push(AmbiguousPair {
                    first: a.clone(),
                    second: b.clone(),
                });
            }
        }
    }

    if pairs.is_empty() {
        Ok(())
    } else {
        Err(AmbiguityError { pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_table;
    use crate::table::RawRecord;

    fn records(rows: &[(&str, &str)]) -> Vec<EncodingRecord> {
        let raw = rows
            .iter()
            .enumerate()
            .map(|(idx, (pattern, mnemonic))| RawRecord {
                source_line: idx + 1,
                pattern: pattern.to_string(),
                mnemonic: mnemonic.to_string(),
            })
            .collect();
        compile_table(raw)
    }

    #[test]
    fn test_equal_specificity_is_distinguishable() {
        let table = records(&[("0000000x", "ADD"), ("0000001x", "SUB")]);
        assert_eq!(check(&table), Ok(()));
    }

    #[test]
    fn test_shadowed_pattern_is_flagged() {
        let table = records(&[("00000000", "FOO"), ("0000000x", "BAR")]);
        let err = check(&table).unwrap_err();
        assert_eq!(err.pairs.len(), 1);
        assert_eq!(err.pairs[0].first.mnemonic, "FOO");
        assert_eq!(err.pairs[0].second.mnemonic, "BAR");
    }

    #[test]
    fn test_detection_is_symmetric() {
        let forward = records(&[("00000000", "FOO"), ("0000000x", "BAR")]);
        let reverse = records(&[("0000000x", "BAR"), ("00000000", "FOO")]);
        let forward_err = check(&forward).unwrap_err();
        let reverse_err = check(&reverse).unwrap_err();
        assert_eq!(forward_err.pairs.len(), 1);
        assert_eq!(reverse_err.pairs.len(), 1);
        assert_eq!(
            forward_err.pairs[0].first.mnemonic,
            reverse_err.pairs[0].second.mnemonic
        );
    }

    #[test]
    fn test_identical_patterns_pass_silently() {
        // Known gap kept for compatibility: duplicates share both signature
        // and specificity, so the collision check never fires.
        let table = records(&[("0000000x", "FOO"), ("0000000x", "BAR")]);
        assert_eq!(check(&table), Ok(()));
    }

    #[test]
    fn test_all_pairs_reported_before_failing() {
        let table = records(&[
            ("00000000", "A"),
            ("0000000x", "B"),
            ("1000000x", "C"),
            ("100000xx", "D"),
        ]);
        let err = check(&table).unwrap_err();
        assert_eq!(err.pairs.len(), 2);
        assert_eq!(err.pairs[0].first.mnemonic, "A");
        assert_eq!(err.pairs[0].second.mnemonic, "B");
        assert_eq!(err.pairs[1].first.mnemonic, "C");
        assert_eq!(err.pairs[1].second.mnemonic, "D");
    }

    #[test]
    fn test_empty_and_singleton_tables() {
        assert_eq!(check(&[]), Ok(()));
        let table = records(&[("0000000x", "ADD")]);
        assert_eq!(check(&table), Ok(()));
    }
}
