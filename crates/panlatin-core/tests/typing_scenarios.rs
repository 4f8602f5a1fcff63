// Panlatin Typing Scenarios
//
// End-to-end keystroke sequences through a TypingBuffer, covering the
// documented user-facing examples (marks, escalation, clear, escape).
//
// Run with: cargo test -p panlatin-core --test typing_scenarios

use panlatin_core::{transliterate, Keystroke, ProfileRegistry, TypingBuffer};

fn type_all(keys: &str) -> String {
    let registry = ProfileRegistry::with_defaults();
    transliterate(&registry, "all", keys)
}

#[test]
fn test_single_marks() {
    assert_eq!(type_all("e1"), "é");
    assert_eq!(type_all("o2"), "ò");
    assert_eq!(type_all("u3 h3"), "ü ħ");
    assert_eq!(type_all("a4 j4"), "â ĵ");
    assert_eq!(type_all("u5 e5 o5"), "ŭ ě ø");
    assert_eq!(type_all("a6 n6 s6"), "ã ñ ș");
    assert_eq!(type_all("a7 z7 I7"), "å ż İ");
    assert_eq!(type_all("u8 c8"), "ų ç");
    assert_eq!(type_all("a9 d9 s9 ?9"), "æ ð ß ¿");
}

#[test]
fn test_words() {
    assert_eq!(type_all("?9Que1 pasa?"), "¿Qué pasa?");
    assert_eq!(type_all("Grus9e u3ber Mu3nchen"), "Gruße über München");
    assert_eq!(
        type_all("a1rvi1ztu11ro11 tu3ko3rfu1ro1ge1p"),
        "árvíztűrő tükörfúrógép"
    );
    assert_eq!(type_all("z7o1l3w"), "żółw");
    assert_eq!(type_all("Dvor5a1k"), "Dvořák");
    assert_eq!(type_all("Tu3rkc8e I7stanbul"), "Türkçe İstanbul");
    assert_eq!(type_all("Bra5s6ov"), "Brășov");
    assert_eq!(type_all("<9oui>9"), "«oui»");
}

#[test]
fn test_escalation_sequences() {
    assert_eq!(type_all("o11"), "ő");
    assert_eq!(type_all("e22"), "ē");
    // a third press finds no stage and is typed literally
    assert_eq!(type_all("o111"), "ő1");
}

#[test]
fn test_clear() {
    assert_eq!(type_all("e30"), "e");
    assert_eq!(type_all("i0"), "ı");
    assert_eq!(type_all("o110"), "o");
    // clearing an unmarked letter types the zero
    assert_eq!(type_all("a0"), "a0");
}

#[test]
fn test_backslash_escape() {
    assert_eq!(type_all("a6"), "ã");
    assert_eq!(type_all("a\\6"), "a6");
    assert_eq!(type_all("a\\\\6"), "a\\6");
    // the escaped digit is an ordinary character afterwards
    assert_eq!(type_all("a\\66"), "a66");
}

#[test]
fn test_escape_keystrokes() {
    let registry = ProfileRegistry::with_defaults();
    let mut buffer = TypingBuffer::new(&registry, "all");
    let strokes = buffer.type_str("a\\\\6");
    assert_eq!(
        strokes,
        vec![
            Keystroke::Inserted('a'),
            Keystroke::Inserted('\\'),
            Keystroke::Inserted('\\'),
            Keystroke::Replaced { from: '\\', to: '6' },
        ]
    );
    assert_eq!(buffer.text(), "a\\6");
    assert_eq!(buffer.caret(), 3);
}

#[test]
fn test_language_profile_limits_output() {
    let registry = ProfileRegistry::with_defaults();
    assert_eq!(transliterate(&registry, "de", "Grus9e u3ber"), "Gruße über");
    assert_eq!(transliterate(&registry, "de", "e1"), "e1");
    assert_eq!(transliterate(&registry, "eo", "c4iuj s4ipoj"), "ĉiuj ŝipoj");
    assert_eq!(transliterate(&registry, "eo", "a6"), "a6");
    assert_eq!(transliterate(&registry, "tr", "i0sik"), "ısik");
}

#[test]
fn test_off_types_digits() {
    let registry = ProfileRegistry::with_defaults();
    assert_eq!(transliterate(&registry, "off", "e1o11\\6"), "e1o11\\6");
}
