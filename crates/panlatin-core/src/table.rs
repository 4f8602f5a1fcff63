// Panlatin Transformation Tables
// Per-character rows of ten replacement codes, keyed by the base code

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::{CharCode, Digit};

/// Number of entries in every row, one per digit 0-9
pub const ROW_LEN: usize = 10;

/// Value standing for "no transformation" in the raw data format
pub const NOOP: u32 = 0;

/// Highest code point accepted from table data (surrogates are refused too)
const MAX_CODE: i64 = 0x10FFFF;

/// Errors raised while building a table from data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Row for {code} has {len} entries, expected 10")]
    InvalidRow { code: CharCode, len: usize },

    #[error("Invalid character code: {0}")]
    InvalidCode(i64),
}

/// The ten possible replacements for one base character.
///
/// Entry `d` is what pressing digit `d` turns the base into. `None` is the
/// NoOp sentinel: the digit is typed literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformRow([Option<CharCode>; ROW_LEN]);

impl TransformRow {
    pub fn new(entries: [Option<CharCode>; ROW_LEN]) -> Self {
        Self(entries)
    }

    /// Build a row from raw codes, treating [`NOOP`] as no transformation
    pub fn from_codes(codes: [u32; ROW_LEN]) -> Self {
        Self(codes.map(|c| (c != NOOP).then_some(CharCode(c))))
    }

    /// Build a row from untrusted data, rejecting wrong lengths and bad codes
    pub fn from_data(code: CharCode, data: &[i64]) -> Result<Self, TableError> {
        if data.len() != ROW_LEN {
            return Err(TableError::InvalidRow {
                code,
                len: data.len(),
            });
        }

        let mut entries = [None; ROW_LEN];
        for (slot, &value) in entries.iter_mut().zip(data) {
            *slot = match value {
                0 => None,
                1..=MAX_CODE if char::from_u32(value as u32).is_some() => {
                    Some(CharCode(value as u32))
                }
                _ => return Err(TableError::InvalidCode(value)),
            };
        }
        Ok(Self(entries))
    }

    /// Replacement for `digit`, or `None` when the digit has no effect
    pub fn get(&self, digit: Digit) -> Option<CharCode> {
        self.0[digit.index()]
    }

    /// The "clear mark" target (entry 0)
    pub fn clear_target(&self) -> Option<CharCode> {
        self.get(Digit::CLEAR)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Digit, Option<CharCode>)> + '_ {
        Digit::all().zip(self.0.iter().copied())
    }

    /// Digits that produce a replacement
    pub fn defined_digits(&self) -> SmallVec<[Digit; ROW_LEN]> {
        self.entries()
            .filter_map(|(digit, target)| target.map(|_| digit))
            .collect()
    }

    /// Raw data representation, [`NOOP`] for missing entries
    pub fn to_codes(&self) -> [u32; ROW_LEN] {
        self.0.map(|c| c.map_or(NOOP, CharCode::value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    fn retain_targets(&mut self, keep: &impl Fn(CharCode) -> bool) {
        for slot in &mut self.0 {
            if slot.is_some_and(|c| !keep(c)) {
                *slot = None;
            }
        }
    }
}

/// Mapping from base character code to its transform row.
///
/// A code without a row has no transformation under this table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationTable {
    rows: HashMap<CharCode, TransformRow>,
}

impl TransformationTable {
    /// Create an empty table (every lookup is NoOp)
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Build a table from fixed-size static rows
    pub fn from_static(rows: &[(u32, [u32; ROW_LEN])]) -> Self {
        rows.iter()
            .map(|&(code, codes)| (CharCode(code), TransformRow::from_codes(codes)))
            .collect()
    }

    /// Build a table from untrusted data rows of any length.
    ///
    /// Every row must hold exactly [`ROW_LEN`] entries. Later rows for the
    /// same code replace earlier ones.
    pub fn from_data<I, R>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (CharCode, R)>,
        R: AsRef<[i64]>,
    {
        let mut table = Self::new();
        for (code, data) in rows {
            let row = TransformRow::from_data(code, data.as_ref())?;
            table.insert(code, row);
        }
        Ok(table)
    }

    /// Insert or replace the row for `code`
    pub fn insert(&mut self, code: CharCode, row: TransformRow) -> Option<TransformRow> {
        self.rows.insert(code, row)
    }

    pub fn row(&self, code: CharCode) -> Option<&TransformRow> {
        self.rows.get(&code)
    }

    /// Replacement for `digit` typed after `code`
    pub fn lookup(&self, code: CharCode, digit: Digit) -> Option<CharCode> {
        self.rows.get(&code).and_then(|row| row.get(digit))
    }

    pub fn contains(&self, code: CharCode) -> bool {
        self.rows.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharCode, &TransformRow)> {
        self.rows.iter().map(|(&code, row)| (code, row))
    }

    /// Rows ordered by code, for stable output
    pub fn sorted_rows(&self) -> Vec<(CharCode, &TransformRow)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by_key(|&(code, _)| code);
        rows
    }

    /// Derive a narrower table.
    ///
    /// Rows survive only for codes accepted by `keep`, and within them only
    /// targets accepted by `keep`. Rows left without any target are dropped.
    pub fn restrict(&self, keep: impl Fn(CharCode) -> bool) -> Self {
        let mut rows = HashMap::new();
        for (&code, row) in &self.rows {
            if !keep(code) {
                continue;
            }
            let mut row = *row;
            row.retain_targets(&keep);
            if !row.is_empty() {
                rows.insert(code, row);
            }
        }
        Self { rows }
    }

    /// Overlay `other` on this table, replacing rows with the same code
    pub fn extend_from(&mut self, other: &TransformationTable) {
        for (code, row) in other.iter() {
            self.rows.insert(code, *row);
        }
    }
}

impl FromIterator<(CharCode, TransformRow)> for TransformationTable {
    fn from_iter<T: IntoIterator<Item = (CharCode, TransformRow)>>(rows: T) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: i64) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_row_from_codes_maps_zero_to_noop() {
        let row = TransformRow::from_codes([0, 0xE9, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(row.get(digit(1)), Some(CharCode::from('é')));
        assert_eq!(row.get(digit(0)), None);
        assert_eq!(row.defined_digits().as_slice(), &[digit(1)]);
    }

    #[test]
    fn test_row_from_data_rejects_wrong_length() {
        let code = CharCode::from('x');
        for len in [0usize, 9, 11] {
            let data = vec![0i64; len];
            assert_eq!(
                TransformRow::from_data(code, &data),
                Err(TableError::InvalidRow { code, len })
            );
        }
        assert!(TransformRow::from_data(code, &[0; ROW_LEN]).is_ok());
    }

    #[test]
    fn test_row_from_data_rejects_bad_codes() {
        let code = CharCode::from('x');
        let mut data = [0i64; ROW_LEN];
        data[3] = -5;
        assert_eq!(
            TransformRow::from_data(code, &data),
            Err(TableError::InvalidCode(-5))
        );
        data[3] = 0x110000;
        assert_eq!(
            TransformRow::from_data(code, &data),
            Err(TableError::InvalidCode(0x110000))
        );
        for surrogate in [0xD800, 0xDBFF, 0xDFFF] {
            data[3] = surrogate;
            assert_eq!(
                TransformRow::from_data(code, &data),
                Err(TableError::InvalidCode(surrogate))
            );
        }
    }

    #[test]
    fn test_table_from_data_fails_on_any_bad_row() {
        let rows = vec![
            (CharCode::from('a'), vec![0i64, 0xE1, 0, 0, 0, 0, 0, 0, 0, 0]),
            (CharCode::from('e'), vec![0i64, 0xE9]),
        ];
        let err = TransformationTable::from_data(rows).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidRow {
                code: CharCode::from('e'),
                len: 2
            }
        );
    }

    #[test]
    fn test_table_lookup() {
        let table = TransformationTable::from_static(&[(0x61, [0, 0xE1, 0xE0, 0, 0, 0, 0, 0, 0, 0])]);
        assert_eq!(table.lookup(CharCode::from('a'), digit(2)), Some(CharCode::from('à')));
        assert_eq!(table.lookup(CharCode::from('a'), digit(3)), None);
        assert_eq!(table.lookup(CharCode::from('b'), digit(1)), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_restrict_drops_targets_and_empty_rows() {
        let table = TransformationTable::from_static(&[
            (0x61, [0, 0xE1, 0xE0, 0, 0, 0, 0, 0, 0, 0]),
            (0xE1, [0x61, 0, 0xE0, 0, 0, 0, 0, 0, 0, 0]),
            (0xE0, [0x61, 0xE1, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let acute_only = table.restrict(|c| c.is_ascii() || c == CharCode::from('á'));

        assert_eq!(acute_only.len(), 2);
        assert_eq!(acute_only.lookup(CharCode::from('a'), digit(1)), Some(CharCode::from('á')));
        assert_eq!(acute_only.lookup(CharCode::from('a'), digit(2)), None);
        assert_eq!(acute_only.lookup(CharCode::from('á'), digit(2)), None);
        assert!(!acute_only.contains(CharCode::from('à')));
    }

    #[test]
    fn test_extend_from_replaces_rows() {
        let mut table = TransformationTable::from_static(&[(0x61, [0, 0xE1, 0, 0, 0, 0, 0, 0, 0, 0])]);
        let overlay = TransformationTable::from_static(&[
            (0x61, [0, 0xE0, 0, 0, 0, 0, 0, 0, 0, 0]),
            (0x71, [0, 0x01EB, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        table.extend_from(&overlay);
        assert_eq!(table.lookup(CharCode::from('a'), digit(1)), Some(CharCode::from('à')));
        assert_eq!(table.lookup(CharCode::from('q'), digit(1)), Some(CharCode(0x01EB)));
    }

    #[test]
    fn test_sorted_rows_is_ordered() {
        let table = TransformationTable::from_static(&[
            (0xE1, [0x61, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            (0x61, [0, 0xE1, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let codes: Vec<u32> = table.sorted_rows().iter().map(|(c, _)| c.value()).collect();
        assert_eq!(codes, vec![0x61, 0xE1]);
    }
}
