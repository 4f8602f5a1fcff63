// Panlatin Character Codes
// Opaque code point keys and validated combination digits

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Represents one character code preceding the caret.
///
/// This is a newtype wrapper around u32 for type safety. The value is
/// treated as an opaque table key; no arithmetic is ever done on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CharCode(pub u32);

impl CharCode {
    /// The escape marker (`\`)
    pub const BACKSLASH: CharCode = CharCode(0x5C);

    /// Get the raw numeric code value
    pub fn value(self) -> u32 {
        self.0
    }

    /// Convert to a `char`, if the code is a Unicode scalar value
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub fn is_ascii(self) -> bool {
        self.0 < 0x80
    }
}

impl From<char> for CharCode {
    fn from(ch: char) -> Self {
        CharCode(ch as u32)
    }
}

impl From<u32> for CharCode {
    fn from(code: u32) -> Self {
        CharCode(code)
    }
}

impl From<CharCode> for u32 {
    fn from(code: CharCode) -> Self {
        code.0
    }
}

impl fmt::Display for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) if !ch.is_control() && !ch.is_whitespace() => write!(f, "{}", ch),
            _ => write!(f, "U+{:04X}", self.0),
        }
    }
}

fn codepoint_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i:U\+)([0-9A-Fa-f]{1,6})$").expect("static code point pattern is valid")
    })
}

impl FromStr for CharCode {
    type Err = String;

    /// Parse a single character, a `U+XXXX` code point or a decimal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(CharCode::from(ch));
        }

        if let Some(caps) = codepoint_pattern().captures(s) {
            return u32::from_str_radix(&caps[1], 16)
                .map(CharCode)
                .map_err(|e| format!("Invalid code point '{}': {}", s, e));
        }

        s.parse::<u32>()
            .map(CharCode)
            .map_err(|_| format!("Unknown character code: {}", s))
    }
}

/// A combination keystroke in the range 0..=9.
///
/// 0 is the conventional "clear" digit; 1-9 select a mark family whose
/// meaning depends on the base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const CLEAR: Digit = Digit(0);
    pub const MAX: u8 = 9;

    /// Validate a raw keystroke value
    pub fn new(value: i64) -> Option<Self> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Some(Digit(value as u8))
        } else {
            None
        }
    }

    /// Digit at row position `index`, for callers that already hold 0-9
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index <= Self::MAX);
        Digit(index)
    }

    /// Map an ASCII digit character to its digit
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position of this digit within a transform row
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The literal character a user typed for this digit
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    pub fn is_clear(self) -> bool {
        self.0 == 0
    }

    /// All digits in row order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=Self::MAX).map(Digit)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
