//! Basic tests for zahlklar-engine

use zahlklar_engine::*;

fn check(input: &str, expected: &str) {
    assert_eq!(simplify_numbers(input), expected, "input: {input}");
}

#[test]
fn test_text_without_numbers_is_unchanged() {
    check("", "");
    check("Heute scheint die Sonne.", "Heute scheint die Sonne.");
}

#[test]
fn test_percentage_phrases() {
    check(
        "25 Prozent der Bevölkerung sind betroffen.",
        "jeder Vierte der Bevölkerung sind betroffen.",
    );
    check("90 Prozent stimmten zu.", "fast alle stimmten zu.");
    check("95 Prozent stimmten zu.", "fast alle stimmten zu.");
    check("14 Prozent lehnten ab.", "wenige lehnten ab.");
    check("Nur 4,57 Prozent lehnten ab.", "Nur wenige lehnten ab.");
    check("Die Hälfte, also 50 Prozent.", "Die Hälfte, also die Hälfte.");
}

#[test]
fn test_area_override() {
    check(
        "30 Prozent der Fläche sind betroffen.",
        "Ein Drittel, also ein Stück von drei gleich großen Teilen sind betroffen.",
    );
    check(
        "30 Prozent sind betroffen.",
        "ein Drittel, also ein Stück von drei gleich großen Teilen sind betroffen.",
    );
}

#[test]
fn test_unmapped_percentage_keeps_numeral() {
    check(
        "45,5 Prozent waren dafür.",
        "45,5 Prozent waren dafür.",
    );
}

#[test]
fn test_people() {
    check("1.897 Menschen nahmen teil.", "etwa 2.000 Menschen nahmen teil.");
    check(
        "10.000 Menschen waren anwesend.",
        "etwa 10.000 Menschen (So viele Menschen, wie in ein großes Fußballstadion passen) waren anwesend.",
    );
    check("Es kamen 42 Besucher.", "Es kamen 42 Besucher.");
}

#[test]
fn test_small_people_counts_round_to_thousands() {
    check("Es kamen 750 Menschen.", "Es kamen etwa 1.000 Menschen.");
    check("Es kamen 500 Teilnehmer.", "Es kamen etwa 0 Teilnehmer.");
    check("Es kamen 1.500 Teilnehmer.", "Es kamen etwa 2.000 Teilnehmer.");
}

#[test]
fn test_people_in_lookahead_fall_back_to_bare_rules() {
    check(
        "Es wurden 4.321 Bäume für Menschen gepflanzt.",
        "Es wurden etwa 4.000 Bäume für Menschen gepflanzt.",
    );
    check("Es gab 38,7 Liter für Menschen.", "Es gab etwa 39 Liter für Menschen.");
    check(
        "Es kamen 2.500 begeisterte Besucher.",
        "Es kamen etwa 2.000 begeisterte Besucher.",
    );
}

#[test]
fn test_ties_round_to_even() {
    check("Bei 0,5 Grad.", "Bei etwa 0 Grad.");
    check(
        "Es kamen 1.250.000 Euro zusammen.",
        "Es kamen etwa 1,2 Million Euro (So viel Geld, dass man 100 Autos kaufen könnte) zusammen.",
    );
}

#[test]
fn test_people_from_context() {
    check(
        "Es kamen 12.500 begeisterte Besucher.",
        "Es kamen etwa 12.000 Menschen (So viele Menschen, wie in ein großes Fußballstadion passen) begeisterte Besucher.",
    );
}

#[test]
fn test_currency() {
    check(
        "324.620,22 Euro wurden gespendet.",
        "etwa 325.000 Euro wurden gespendet.",
    );
    check(
        "1.000.000 Euro wurden gespendet.",
        "etwa 1,0 Million Euro (So viel Geld, dass man 100 Autos kaufen könnte) wurden gespendet.",
    );
    check(
        "Der Umsatz lag bei 2.345.678€.",
        "Der Umsatz lag bei etwa 2,3 Million Euro (So viel Geld, dass man 100 Autos kaufen könnte).",
    );
}

#[test]
fn test_weight() {
    check(
        "Der Schrank wiegt 250 Kilogramm.",
        "Der Schrank wiegt etwa 250 Kilogramm (So schwer wie ein großer Kühlschrank).",
    );
    check("Wir kauften 2,5 kg Äpfel.", "Wir kauften etwa 2 kg Äpfel.");
    check("Wir kauften 3,5 kg Äpfel.", "Wir kauften etwa 4 kg Äpfel.");
}

#[test]
fn test_decimals_and_signs() {
    check(
        "Bei 38,7 Grad Celsius ist es sehr heiß.",
        "Bei etwa 39 Grad Celsius ist es sehr heiß.",
    );
    check(
        "Die Temperatur beträgt -15,5 Grad.",
        "Die Temperatur beträgt etwa -16 Grad.",
    );
}

#[test]
fn test_protected_contexts() {
    check("Der pH-Wert beträgt 7,4.", "Der pH-Wert beträgt 7,4.");
    check("Der pH-Wert 6,8 ist leicht sauer.", "Der pH-Wert 6,8 ist leicht sauer.");
    check("Um 15:30 Uhr beginnt der Termin.", "Um 15:30 Uhr beginnt der Termin.");
    check(
        "Am 3. Oktober 1990 wurde gefeiert.",
        "Am 3. Oktober 1990 wurde gefeiert.",
    );
}

#[test]
fn test_literal_overrides() {
    check(
        "Am 1. Januar 2024 waren es 5.678 Teilnehmer.",
        "Am 1. Januar 2024 waren es etwa 6.000 Teilnehmer.",
    );
    check(
        "Im Jahr 2024 gab es 1.234 Ereignisse.",
        "Im Jahr 2024 gab es etwa 1.000 Ereignisse.",
    );
    check(
        "Im Jahr 2025 gab es 2018 Ereignisse.",
        "Im Jahr 2025 gab es etwa 2000 Ereignisse.",
    );
}

#[test]
fn test_event_count_without_year_context() {
    check(
        "Danach folgten 3.456 Ereignisse.",
        "Danach folgten etwa 1.000 Ereignisse.",
    );
}

#[test]
fn test_event_keyword_must_follow_the_numeral() {
    check(
        "Danach folgten 3 schwere Ereignisse.",
        "Danach folgten 3 schwere Ereignisse.",
    );
}

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert!(config.percentages && config.numbers && config.overrides);

    let numbers = EngineConfig::numbers_only();
    assert!(!numbers.percentages);

    let percentages = EngineConfig::percentages_only();
    assert!(!percentages.numbers);
}

#[test]
fn test_simplifier_builder() {
    let simplifier = NumberSimplifier::builder()
        .percentages(false)
        .build()
        .unwrap();

    assert_eq!(simplifier.simplify("25 Prozent"), "25 Prozent");
    assert_eq!(
        simplifier.simplify("1.897 Menschen"),
        "etwa 2.000 Menschen"
    );
}

#[test]
fn test_custom_rules() {
    let source = r#"
[metadata]
code = "de-einfach"
name = "Deutsch (einfach)"

[format]
approx_prefix = "rund "

[[units]]
kind = "currency"
keywords = ["Euro"]

[percentages]
keyword = "Prozent"

[[percentages.exact]]
value = 50
phrase = "jeder Zweite"

[[rounding]]
unit = "currency"
threshold = 100.0
granularity = 2
template = "{sign}{value} Euro"
"#;
    let rules = std::sync::Arc::new(RuleSet::from_toml_str(source).unwrap());
    let simplifier = NumberSimplifier::with_rules(rules);

    assert_eq!(
        simplifier.simplify("50 Prozent zahlten 349 Euro."),
        "jeder Zweite zahlten rund 300 Euro."
    );
}

#[test]
fn test_batch_matches_single() {
    let simplifier = NumberSimplifier::new().unwrap();
    let texts: Vec<String> = (1..=20)
        .map(|i| format!("Es kamen {}.500 Menschen.", i))
        .collect();

    let batch = simplifier.simplify_batch(&texts);
    for (text, simplified) in texts.iter().zip(&batch) {
        assert_eq!(simplified, &simplifier.simplify(text));
    }
}
