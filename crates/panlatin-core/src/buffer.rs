// Panlatin Typing Buffer
// In-memory text field that applies combine results at the caret

use crate::profile::OFF;
use crate::registry::ProfileRegistry;
use crate::{CharCode, CombineError, Digit};

/// What one keystroke did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// The character was inserted at the caret
    Inserted(char),
    /// The character before the caret was replaced; the keystroke was consumed
    Replaced { from: char, to: char },
}

/// A single-line text buffer with a caret, bound to one profile.
///
/// This plays the part of the editor widget: on a digit keystroke it asks
/// the registry what the character before the caret becomes and either
/// substitutes it in place or lets the digit through.
#[derive(Debug, Clone)]
pub struct TypingBuffer<'r> {
    registry: &'r ProfileRegistry,
    profile: String,
    text: Vec<char>,
    caret: usize,
}

impl<'r> TypingBuffer<'r> {
    pub fn new(registry: &'r ProfileRegistry, profile: impl Into<String>) -> Self {
        Self {
            registry,
            profile: profile.into(),
            text: Vec::new(),
            caret: 0,
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Switch profiles without touching the text
    pub fn set_profile(&mut self, profile: impl Into<String>) {
        self.profile = profile.into();
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Caret position in characters from the start
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.text.len());
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }

    /// Delete the character before the caret
    pub fn backspace(&mut self) -> Option<char> {
        if self.caret == 0 {
            return None;
        }
        self.caret -= 1;
        Some(self.text.remove(self.caret))
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Process one typed character
    pub fn type_char(&mut self, ch: char) -> Keystroke {
        if let Some(to) = self.replacement_for(ch) {
            let from = std::mem::replace(&mut self.text[self.caret - 1], to);
            return Keystroke::Replaced { from, to };
        }

        self.text.insert(self.caret, ch);
        self.caret += 1;
        Keystroke::Inserted(ch)
    }

    /// Process a sequence of typed characters
    pub fn type_str(&mut self, keys: &str) -> Vec<Keystroke> {
        keys.chars().map(|ch| self.type_char(ch)).collect()
    }

    fn replacement_for(&self, ch: char) -> Option<char> {
        let digit = Digit::from_char(ch)?;
        if self.caret == 0 || self.profile == OFF {
            return None;
        }

        let last = CharCode::from(self.text[self.caret - 1]);
        match self.registry.combine(&self.profile, last, i64::from(digit.value())) {
            Ok(Some(code)) => {
                let replacement = code.to_char();
                if replacement.is_none() {
                    log::warn!(
                        "Profile '{}' maps {} to non-character {}",
                        self.profile,
                        last,
                        code
                    );
                }
                replacement
            }
            Ok(None) => None,
            Err(CombineError::ProfileNotFound(name)) => {
                log::warn!("Unknown profile '{}', treating as '{}'", name, OFF);
                None
            }
            Err(err) => {
                log::debug!("Keystroke {:?} not combined: {}", ch, err);
                None
            }
        }
    }
}

/// Type `keys` into a fresh buffer and return the resulting text
pub fn transliterate(registry: &ProfileRegistry, profile: &str, keys: &str) -> String {
    let mut buffer = TypingBuffer::new(registry, profile);
    buffer.type_str(keys);
    buffer.text()
}
