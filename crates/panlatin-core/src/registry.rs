// Panlatin Profile Registry
// Process-wide mapping from profile name to transformation table

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::combine::{combine_table, CombineError};
use crate::profile::{self, Profile};
use crate::{CharCode, Digit, TableError, TransformationTable};

/// Global profile registry, built with the default profiles on first access
static GLOBAL_REGISTRY: LazyLock<ProfileRegistry> = LazyLock::new(ProfileRegistry::with_defaults);

/// Error returned when a profile name has no registered table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Profile not found: {0}")]
pub struct ProfileNotFound(pub String);

/// Named transformation tables.
///
/// Lookups hand out `Arc<Profile>` snapshots and release the read lock
/// at once, so combining never holds a lock. Registration takes the write
/// lock and swaps in a whole new profile; tables are never edited in place.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: RwLock<IndexMap<String, Arc<Profile>>>,
}

impl ProfileRegistry {
    /// Create a registry with no profiles at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `all`, `off` and the language subsets
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_profile(Profile::all());
        registry.register_profile(Profile::off());
        for language in Profile::languages() {
            registry.register_profile(language);
        }
        registry
    }

    /// Whether `name` is one of the profiles every default registry carries
    pub fn is_reserved(name: &str) -> bool {
        name == profile::ALL || name == profile::OFF
    }

    /// The process-wide registry
    pub fn global() -> &'static ProfileRegistry {
        &GLOBAL_REGISTRY
    }

    /// Insert or replace the table for `name`, returning the previous profile
    pub fn register(&self, name: &str, table: TransformationTable) -> Option<Arc<Profile>> {
        self.register_profile(Profile::new(name, table))
    }

    /// Insert or replace a complete profile
    pub fn register_profile(&self, profile: Profile) -> Option<Arc<Profile>> {
        log::debug!(
            "Registering profile '{}' with {} rows",
            profile.name(),
            profile.table().len()
        );
        let name = profile.name().to_string();
        self.profiles.write().insert(name, Arc::new(profile))
    }

    /// Register a table supplied as raw data rows.
    ///
    /// Fails without touching the registry if any row does not have exactly
    /// ten entries.
    pub fn register_data<I, R>(&self, name: &str, rows: I) -> Result<Option<Arc<Profile>>, TableError>
    where
        I: IntoIterator<Item = (CharCode, R)>,
        R: AsRef<[i64]>,
    {
        let table = TransformationTable::from_data(rows)?;
        Ok(self.register(name, table))
    }

    /// Get the profile registered under exactly `name`
    pub fn lookup(&self, name: &str) -> Result<Arc<Profile>, ProfileNotFound> {
        self.profiles
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.read().contains_key(name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.profiles.read().keys().cloned().collect()
    }

    /// Snapshot of every registered profile, in registration order
    pub fn profiles(&self) -> Vec<Arc<Profile>> {
        self.profiles.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }

    /// Decide the replacement for `digit` typed after `last` under `profile`.
    ///
    /// See [`crate::combine()`] for the full contract.
    pub fn combine(
        &self,
        profile: &str,
        last: CharCode,
        digit: i64,
    ) -> Result<Option<CharCode>, CombineError> {
        let digit = Digit::new(digit).ok_or(CombineError::InvalidDigit(digit))?;
        let profile = self.lookup(profile)?;
        let result = combine_table(profile.table(), last, digit);
        log::trace!(
            "combine({}, {}, {}) -> {:?}",
            profile.name(),
            last,
            digit,
            result
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_reserved_profiles() {
        let registry = ProfileRegistry::with_defaults();
        assert!(registry.contains("all"));
        assert!(registry.contains("off"));
        assert!(registry.lookup("off").unwrap().table().is_empty());
        assert_eq!(&registry.names()[..2], &["all".to_string(), "off".to_string()]);
    }

    #[test]
    fn test_lookup_unknown_profile() {
        let registry = ProfileRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.lookup("klingon").unwrap_err(),
            ProfileNotFound("klingon".to_string())
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let registry = ProfileRegistry::with_defaults();
        let count = registry.len();
        let previous = registry.register("all", TransformationTable::new());
        assert!(previous.is_some_and(|p| !p.table().is_empty()));
        assert!(registry.lookup("all").unwrap().table().is_empty());
        assert_eq!(registry.len(), count);
    }

    #[test]
    fn test_register_data_rejects_short_rows() {
        let registry = ProfileRegistry::new();
        let rows = vec![(CharCode::from('q'), vec![0i64, 0x01EB, 0])];
        let err = registry.register_data("custom", rows).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidRow {
                code: CharCode::from('q'),
                len: 3
            }
        );
        assert!(!registry.contains("custom"));
    }

    #[test]
    fn test_register_data_accepts_full_rows() {
        let registry = ProfileRegistry::new();
        let rows = vec![(CharCode::from('q'), vec![0i64, 0x01EB, 0, 0, 0, 0, 0, 0, 0, 0])];
        assert!(registry.register_data("custom", rows).unwrap().is_none());
        assert_eq!(
            registry.combine("custom", CharCode::from('q'), 1),
            Ok(Some(CharCode(0x01EB)))
        );
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let registry = ProfileRegistry::with_defaults();
        let snapshot = registry.lookup("all").unwrap();
        registry.register("all", TransformationTable::new());
        assert!(!snapshot.table().is_empty());
    }

    #[test]
    fn test_reserved_names() {
        assert!(ProfileRegistry::is_reserved("all"));
        assert!(ProfileRegistry::is_reserved("off"));
        assert!(!ProfileRegistry::is_reserved("hu"));
    }
}
