// Panlatin Config API
// General settings and user-defined profile files

pub mod parser;

pub use parser::{Config, ConfigError, ConfigToml, GeneralConfig, ProfileDefinition, ProfileToml};
