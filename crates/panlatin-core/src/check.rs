// Panlatin Table Checks
// Cross-reference consistency of hand-authored tables

use std::fmt;

use crate::{CharCode, Digit, TransformationTable};

/// One broken cross-reference in a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Clearing `marked` (reached from `base` by `digit`) does not return to
    /// `base` or to whatever `base` itself clears to
    ClearMismatch {
        base: CharCode,
        digit: Digit,
        marked: CharCode,
        cleared: Option<CharCode>,
    },
    /// A non-ASCII replacement has no row, so it can neither be cleared nor
    /// escalated
    MissingRow {
        base: CharCode,
        digit: Digit,
        marked: CharCode,
    },
    /// The backslash row does not turn every digit into that literal digit
    EscapeRow {
        digit: Digit,
        found: Option<CharCode>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ClearMismatch {
                base,
                digit,
                marked,
                cleared,
            } => match cleared {
                Some(cleared) => write!(
                    f,
                    "{} + {} -> {}, but {} + 0 -> {} (expected {})",
                    base, digit, marked, marked, cleared, base
                ),
                None => write!(
                    f,
                    "{} + {} -> {}, but {} + 0 does nothing (expected {})",
                    base, digit, marked, marked, base
                ),
            },
            Violation::MissingRow {
                base,
                digit,
                marked,
            } => write!(f, "{} + {} -> {}, which has no row", base, digit, marked),
            Violation::EscapeRow { digit, found } => match found {
                Some(found) => write!(f, "\\ + {} -> {} (expected {})", digit, found, digit),
                None => write!(f, "\\ + {} does nothing (expected {})", digit, digit),
            },
        }
    }
}

/// Outcome of checking one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableReport {
    pub rows: usize,
    pub transitions: usize,
    pub violations: Vec<Violation>,
}

impl TableReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check the cross-reference invariants of `table`.
///
/// For every transition `X + d -> Y` with `d != 0`:
/// - a non-ASCII `Y` must have its own row;
/// - `Y + 0` must return to `X`, or to `X + 0` when `X` is itself a marked
///   form (switching or escalating a mark keeps the same base).
///
/// When the table has a backslash row, digit `d` must map to the literal
/// character `d`.
pub fn check_table(table: &TransformationTable) -> TableReport {
    let mut report = TableReport {
        rows: table.len(),
        ..TableReport::default()
    };

    for (base, row) in table.sorted_rows() {
        if base == CharCode::BACKSLASH {
            continue;
        }
        for digit in row.defined_digits() {
            report.transitions += 1;
            if digit.is_clear() {
                continue;
            }
            let Some(marked) = row.get(digit) else {
                continue;
            };

            let Some(marked_row) = table.row(marked) else {
                if !marked.is_ascii() {
                    report.violations.push(Violation::MissingRow {
                        base,
                        digit,
                        marked,
                    });
                }
                continue;
            };

            let cleared = marked_row.clear_target();
            let restores = cleared == Some(base) || (cleared.is_some() && cleared == row.clear_target());
            if !restores {
                report.violations.push(Violation::ClearMismatch {
                    base,
                    digit,
                    marked,
                    cleared,
                });
            }
        }
    }

    if let Some(escape) = table.row(CharCode::BACKSLASH) {
        for digit in Digit::all() {
            report.transitions += usize::from(escape.get(digit).is_some());
            let expected = CharCode::from(digit.to_char());
            if escape.get(digit) != Some(expected) {
                report.violations.push(Violation::EscapeRow {
                    digit,
                    found: escape.get(digit),
                });
            }
        }
    }

    report
}
