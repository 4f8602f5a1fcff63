// Panlatin Combine Properties
//
// Table-wide properties of the combine function: determinism, row
// completeness, clear round-trips, escalation, escape and boundary handling.
//
// Run with: cargo test -p panlatin-core --test combine_properties

use panlatin_core::profile::{self, all_table};
use panlatin_core::{
    check_table, combine, combine_in, CharCode, CombineError, Digit, ProfileRegistry, TableError,
    TransformationTable, ROW_LEN,
};

fn ch(c: char) -> CharCode {
    CharCode::from(c)
}

#[test]
fn test_combine_is_deterministic() {
    let all = all_table();
    for (code, _) in all.sorted_rows() {
        for digit in 0..=9 {
            let first = combine("all", code, digit);
            for _ in 0..3 {
                assert_eq!(combine("all", code, digit), first);
            }
        }
    }
}

#[test]
fn test_rows_have_exactly_ten_entries() {
    let registry = ProfileRegistry::with_defaults();
    for profile in registry.profiles() {
        for (code, row) in profile.table().iter() {
            assert_eq!(row.to_codes().len(), ROW_LEN, "{} in {}", code, profile.name());
        }
    }

    for len in [1usize, 9, 11] {
        let rows = vec![(ch('x'), vec![0i64; len])];
        assert_eq!(
            registry.register_data("bad", rows).unwrap_err(),
            TableError::InvalidRow { code: ch('x'), len }
        );
    }
    assert!(!registry.contains("bad"));
}

#[test]
fn test_clear_restores_unmarked_letter() {
    let all = all_table();
    let bases = all
        .sorted_rows()
        .into_iter()
        .filter(|(code, _)| code.is_ascii() && *code != CharCode::BACKSLASH);

    for (base, row) in bases {
        for digit in Digit::all().filter(|d| !d.is_clear()) {
            let Some(marked) = row.get(digit) else {
                continue;
            };
            let cleared = combine("all", marked, 0).unwrap();
            assert_eq!(cleared, Some(base), "{} + {} -> {}, cleared", base, digit, marked);
        }
    }
}

#[test]
fn test_dotted_and_dotless_i_are_independent_letters() {
    assert_eq!(combine("all", ch('i'), 0), Ok(Some(ch('ı'))));
    assert_eq!(combine("all", ch('ı'), 7), Ok(Some(ch('i'))));
    assert_eq!(combine("all", ch('ı'), 0), Ok(Some(ch('i'))));
    assert_eq!(combine("all", ch('I'), 7), Ok(Some(ch('İ'))));
    assert_eq!(combine("all", ch('İ'), 0), Ok(Some(ch('I'))));
    assert_eq!(combine("all", ch('I'), 0), Ok(None));
}

#[test]
fn test_escalation() {
    assert_eq!(combine("all", ch('o'), 1), Ok(Some(ch('ó'))));
    assert_eq!(combine("all", ch('ó'), 1), Ok(Some(ch('ő'))));
    assert_eq!(combine("all", ch('U'), 1), Ok(Some(ch('Ú'))));
    assert_eq!(combine("all", ch('Ú'), 1), Ok(Some(ch('Ű'))));
    assert_eq!(combine("all", ch('e'), 2), Ok(Some(ch('è'))));
    assert_eq!(combine("all", ch('è'), 2), Ok(Some(ch('ē'))));
    assert_eq!(combine("all", ch('ē'), 0), Ok(Some(ch('e'))));
    assert_eq!(combine("all", ch('ő'), 0), Ok(Some(ch('o'))));
    // no third stage
    assert_eq!(combine("all", ch('ő'), 1), Ok(None));
    // letters without a second stage stay put
    assert_eq!(combine("all", ch('é'), 1), Ok(None));
}

#[test]
fn test_marks_switch_without_clearing() {
    assert_eq!(combine("all", ch('á'), 2), Ok(Some(ch('à'))));
    assert_eq!(combine("all", ch('ü'), 4), Ok(Some(ch('û'))));
    assert_eq!(combine("all", ch('ő'), 3), Ok(Some(ch('ö'))));
}

#[test]
fn test_escape_yields_literal_digits() {
    assert_eq!(combine("all", CharCode::BACKSLASH, 6), Ok(Some(ch('6'))));
    for digit in 0..=9i64 {
        let literal = char::from_digit(digit as u32, 10).unwrap();
        assert_eq!(combine("all", CharCode::BACKSLASH, digit), Ok(Some(ch(literal))));
    }
}

#[test]
fn test_off_never_transforms() {
    let all = all_table();
    let codes = all.sorted_rows().into_iter().map(|(code, _)| code);
    for code in codes.chain([ch('b'), ch(' '), CharCode(0)]) {
        for digit in 0..=9 {
            assert_eq!(combine("off", code, digit), Ok(None));
        }
    }
}

#[test]
fn test_unmapped_base() {
    for c in ['b', 'f', 'm', 'p', 'q', 'v', 'x', 'B', 'Q', '1', ' '] {
        for digit in 0..=9 {
            assert_eq!(combine("all", ch(c), digit), Ok(None), "{} + {}", c, digit);
        }
    }
}

#[test]
fn test_digit_boundaries() {
    let registry = ProfileRegistry::with_defaults();
    for name in registry.names() {
        for digit in [-1, 10, 48, i64::MIN, i64::MAX] {
            assert_eq!(
                combine_in(&registry, &name, ch('a'), digit),
                Err(CombineError::InvalidDigit(digit))
            );
        }
    }
}

#[test]
fn test_unknown_profile() {
    assert_eq!(
        combine("xx", ch('a'), 1),
        Err(CombineError::ProfileNotFound("xx".to_string()))
    );
}

#[test]
fn test_builtin_profiles_are_consistent() {
    let registry = ProfileRegistry::with_defaults();
    for profile in registry.profiles() {
        let report = check_table(profile.table());
        assert!(
            report.is_clean(),
            "{}: {:?}",
            profile.name(),
            report.violations
        );
    }
}

#[test]
fn test_language_subsets_keep_escape() {
    let registry = ProfileRegistry::with_defaults();
    for (name, _) in profile::LANGUAGES {
        assert_eq!(
            combine_in(&registry, name, CharCode::BACKSLASH, 6),
            Ok(Some(ch('6'))),
            "{}",
            name
        );
    }
}

#[test]
fn test_concurrent_lookups_during_registration() {
    let registry = ProfileRegistry::with_defaults();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    assert_eq!(
                        registry.combine("all", ch('o'), 1),
                        Ok(Some(ch('ó')))
                    );
                }
            });
        }
        scope.spawn(|| {
            for i in 0..50 {
                registry.register(&format!("scratch-{}", i), TransformationTable::new());
            }
        });
    });
    assert!(registry.contains("scratch-49"));
}
