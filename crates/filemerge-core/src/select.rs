//! Row selection expressions
//!
//! An expression is a comma-separated list of 1-based row numbers and
//! inclusive ranges, e.g. `1,3-5,7`. Reversed ranges (`5-3`) are accepted.
//! The result is always ascending and free of duplicates, regardless of
//! the order the tokens were written in.
//!
//! Ranges are kept as bounds and only clamped to the data length when
//! applied, so `1-18446744073709551615` costs no more than `1-3`.

use crate::error::{FilemergeError, Result};
use crate::record::{Record, RecordSet};
use std::str::FromStr;

/// Which records of a [`RecordSet`] take part in rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every record, in source order
    #[default]
    All,
    /// Inclusive zero-based `(first, last)` ranges, ascending, disjoint and
    /// never adjacent
    Rows(Vec<(usize, usize)>),
}

impl Selection {
    /// Parse a selection expression
    ///
    /// Row number `0` maps below the first record and is dropped, the same
    /// way indices past the end of the data are dropped when applied.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if a `A-B` token has a non-numeric endpoint
    /// - `InvalidIndex` if a plain token is not a number
    pub fn parse(expr: &str) -> Result<Self> {
        let mut ranges = Vec::new();

        for token in expr.split(',') {
            let (low, high) = match token.split_once('-') {
                Some((start, end)) => match (parse_number(start), parse_number(end)) {
                    (Some(start), Some(end)) => (start.min(end), start.max(end)),
                    _ => return Err(FilemergeError::InvalidRange(token.to_string())),
                },
                None => {
                    let number = parse_number(token)
                        .ok_or_else(|| FilemergeError::InvalidIndex(token.to_string()))?;
                    (number, number)
                }
            };

            if high == 0 {
                continue;
            }
            ranges.push((to_index(low.max(1)), to_index(high)));
        }

        Ok(Selection::Rows(merge_ranges(ranges)))
    }

    /// Selected zero-based indices for data with `len` records
    pub fn indices(&self, len: usize) -> Vec<usize> {
        match self {
            Selection::All => (0..len).collect(),
            Selection::Rows(ranges) => ranges
                .iter()
                .take_while(|(first, _)| *first < len)
                .flat_map(|&(first, last)| first..=last.min(len - 1))
                .collect(),
        }
    }

    /// Pick the selected records, dropping indices past the end
    pub fn apply<'a>(&self, records: &'a RecordSet) -> Vec<&'a Record> {
        self.indices(records.len())
            .into_iter()
            .filter_map(|i| records.get(i))
            .collect()
    }
}

impl FromStr for Selection {
    type Err = FilemergeError;

    fn from_str(s: &str) -> Result<Self> {
        Selection::parse(s)
    }
}

fn parse_number(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// 1-based row number (at least 1) to 0-based index, saturating
fn to_index(number: u64) -> usize {
    usize::try_from(number - 1).unwrap_or(usize::MAX)
}

/// Sort ranges and fold overlapping or touching ones together
fn merge_ranges(mut ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (first, last) in ranges {
        match merged.last_mut() {
            Some(prev) if first <= prev.1.saturating_add(1) => prev.1 = prev.1.max(last),
            _ => merged.push((first, last)),
        }
    }
    merged
}
