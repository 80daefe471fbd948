use thiserror::Error;

use crate::table::{GeneratorConfig, RawRecord};

/// Wildcard characters accepted when strict mode is enabled.
pub const STRICT_WILDCARDS: [char; 4] = ['x', 'X', '.', '?'];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("expected 2 tokens, found {0}")]
    TokenCount(usize),
    #[error("pattern is {actual} bits wide, table width is {expected}")]
    WidthMismatch { expected: u32, actual: u32 },
    #[error("character {0:?} is not a valid strict-mode wildcard")]
    InvalidWildcard(char),
}

/// A line excluded from the table, with the reason it was excluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    pub source_line: usize,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<RawRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Split raw input into encoding records, one per line.
///
/// Malformed lines are logged, recorded in the report, and skipped; they
/// never abort the load. A final line without a terminating line feed is
/// still processed, and carriage returns are stripped wherever they appear.
pub fn load(content: &str, config: &GeneratorConfig) -> LoadReport {
    let mut report = LoadReport::default();

    let mut lines: Vec<&str> = content.split('\n').collect();
    // A trailing line feed terminates the last line rather than opening an
    // empty one.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    for (idx, raw_line) in lines.iter().enumerate() {
        let source_line = idx + 1;
        let line = raw_line.replace('\r', "");
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let [pattern, mnemonic] = tokens[..] else {
            report.skip(source_line, SkipReason::TokenCount(tokens.len()));
            continue;
        };

        let pattern_bits = pattern.chars().count() as u32;
        if pattern_bits != config.width {
            report.skip(
                source_line,
                SkipReason::WidthMismatch {
                    expected: config.width,
                    actual: pattern_bits,
                },
            );
            continue;
        }

        if config.strict {
            if let Some(bad) = pattern
                .chars()
                .find(|c| !matches!(c, '0' | '1') && !STRICT_WILDCARDS.contains(c))
            {
                report.skip(source_line, SkipReason::InvalidWildcard(bad));
                continue;
            }
        }

        report.records.push(RawRecord {
            source_line,
            pattern: pattern.to_string(),
            mnemonic: mnemonic.to_string(),
        });
    }

    report
}

impl LoadReport {
    fn skip(&mut self, source_line: usize, reason: SkipReason) {
        tracing::warn!("input line {}: {}", source_line, reason);
        self.skipped.push(SkippedLine {
            source_line,
            reason,
        });
    }
}
