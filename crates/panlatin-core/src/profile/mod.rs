// Panlatin Profiles
// Named transformation tables, including the built-in full table and
// per-language subsets derived from it

mod all_rows;

use crate::{CharCode, TransformationTable};

use all_rows::ALL_ROWS;

/// Name of the full-coverage default profile
pub const ALL: &str = "all";

/// Name of the empty profile that disables every transformation
pub const OFF: &str = "off";

/// Letters each built-in language profile can produce.
///
/// ASCII targets (clearing back to a base letter, the backslash escape)
/// are always kept in addition to these.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("cs", "áčďéěíňóřšťúůýžÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ"),
    ("de", "äöüßÄÖÜẞ"),
    ("eo", "ĉĝĥĵŝŭĈĜĤĴŜŬ"),
    ("es", "áéíñóúüÁÉÍÑÓÚÜ¿¡"),
    ("fr", "àâæçéèêëîïôœùûüÿÀÂÆÇÉÈÊËÎÏÔŒÙÛÜŸ«»"),
    ("hu", "áéíóöőúüűÁÉÍÓÖŐÚÜŰ"),
    ("is", "áðéíóúýþæöÁÐÉÍÓÚÝÞÆÖ"),
    ("pl", "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ"),
    ("pt", "áâãàçéêíóôõúÁÂÃÀÇÉÊÍÓÔÕÚ"),
    ("ro", "ăâîșțĂÂÎȘȚ"),
    ("tr", "çğıİöşüÇĞÖŞÜ"),
];

/// A named, validated transformation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    table: TransformationTable,
}

impl Profile {
    pub fn new(name: impl Into<String>, table: TransformationTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// The full table
    pub fn all() -> Self {
        Self::new(ALL, all_table())
    }

    /// The empty table
    pub fn off() -> Self {
        Self::new(OFF, TransformationTable::new())
    }

    /// A subset of `base` that only produces ASCII and the given letters
    pub fn restricted(name: impl Into<String>, base: &TransformationTable, letters: &str) -> Self {
        let allowed: Vec<CharCode> = letters.chars().map(CharCode::from).collect();
        let table = base.restrict(|code| code.is_ascii() || allowed.contains(&code));
        Self::new(name, table)
    }

    /// Built-in language profiles, each derived from the full table
    pub fn languages() -> Vec<Self> {
        let all = all_table();
        LANGUAGES
            .iter()
            .map(|&(name, letters)| Self::restricted(name, &all, letters))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &TransformationTable {
        &self.table
    }

    pub fn is_off(&self) -> bool {
        self.table.is_empty()
    }
}

/// Build the full table from its static rows
pub fn all_table() -> TransformationTable {
    TransformationTable::from_static(&ALL_ROWS)
}
