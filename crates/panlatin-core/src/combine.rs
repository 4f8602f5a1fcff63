// Panlatin Combine Function
// The single decision point: base character + digit -> replacement

use crate::registry::{ProfileNotFound, ProfileRegistry};
use crate::{CharCode, Digit, TransformationTable};

/// Errors the caller degrades from by treating the keystroke as plain input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombineError {
    /// The keystroke was not a digit 0-9; leave it unconsumed
    #[error("Invalid combination digit: {0}")]
    InvalidDigit(i64),

    /// The profile is unknown; behave as if it were "off"
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

impl From<ProfileNotFound> for CombineError {
    fn from(err: ProfileNotFound) -> Self {
        CombineError::ProfileNotFound(err.0)
    }
}

/// Decide what `digit`, typed right after `last`, turns `last` into.
///
/// Uses the process-wide [`ProfileRegistry`]. Returns `Ok(None)` when the
/// profile has no row for `last` or the row has no entry for `digit`; the
/// digit is then typed literally. `Ok(Some(code))` means the caller replaces
/// the character before the caret with `code` and swallows the keystroke.
///
/// There is no hidden state. Multi-step marks come from the caller passing
/// the previous replacement back in as `last`:
///
/// ```
/// use panlatin_core::{combine, CharCode};
///
/// let acute = combine("all", CharCode::from('o'), 1).unwrap();
/// assert_eq!(acute, Some(CharCode::from('ó')));
/// let double = combine("all", CharCode::from('ó'), 1).unwrap();
/// assert_eq!(double, Some(CharCode::from('ő')));
/// ```
pub fn combine(profile: &str, last: CharCode, digit: i64) -> Result<Option<CharCode>, CombineError> {
    ProfileRegistry::global().combine(profile, last, digit)
}

/// Same as [`combine`], against an explicit registry
pub fn combine_in(
    registry: &ProfileRegistry,
    profile: &str,
    last: CharCode,
    digit: i64,
) -> Result<Option<CharCode>, CombineError> {
    registry.combine(profile, last, digit)
}

/// Table-level lookup once the digit and profile are resolved
pub fn combine_table(table: &TransformationTable, last: CharCode, digit: Digit) -> Option<CharCode> {
    table.lookup(last, digit)
}
