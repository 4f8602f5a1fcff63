use std::fs;
use std::path::PathBuf;

use panlatin_core::config::Config;
use panlatin_core::{check_table, transliterate, CharCode, ProfileRegistry};

fn load_template() -> Config {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../profiles/panlatin-template.toml");
    let content = fs::read_to_string(config_path).expect("failed to read template config");
    Config::from_toml(&content).expect("failed to parse template config")
}

#[test]
fn profile_template_parses_and_registers() {
    let config = load_template();
    assert_eq!(config.default_profile, "all");

    let names: Vec<&str> = config.profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["es-strict", "all-plus", "escape-only"]);

    let registry = ProfileRegistry::with_defaults();
    assert_eq!(config.register_into(&registry).unwrap(), 3);
    for name in names {
        let profile = registry.lookup(name).unwrap();
        let report = check_table(profile.table());
        assert!(report.is_clean(), "{}: {:?}", name, report.violations);
    }
}

#[test]
fn profile_template_rows_take_effect() {
    let registry = ProfileRegistry::with_defaults();
    load_template().register_into(&registry).unwrap();

    assert_eq!(transliterate(&registry, "all-plus", "o8 o88 o880"), "ǫ ǭ o");
    assert_eq!(transliterate(&registry, "all-plus", "e1"), "é");
    assert_eq!(transliterate(&registry, "es-strict", "?9Que1 n6 a2"), "¿Qué ñ a2");
    assert_eq!(transliterate(&registry, "escape-only", "e1 \\1"), "e1 1");
    assert_eq!(
        registry.combine("escape-only", CharCode::from('a'), 6),
        Ok(None)
    );
}
