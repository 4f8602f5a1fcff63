// Panlatin Core Library
// Diacritic-combination engine: base letter + digit -> marked letter

pub mod buffer;
pub mod check;
pub mod code;
pub mod combine;
pub mod config;
pub mod mark;
pub mod profile;
pub mod registry;
pub mod table;

pub use buffer::{transliterate, Keystroke, TypingBuffer};
pub use check::{check_table, TableReport, Violation};
pub use code::{CharCode, Digit};
pub use combine::{combine, combine_in, combine_table, CombineError};
pub use config::{Config, ConfigError};
pub use mark::MarkFamily;
pub use profile::Profile;
pub use registry::{ProfileNotFound, ProfileRegistry};
pub use table::{TableError, TransformRow, TransformationTable, NOOP, ROW_LEN};
