//! Tests for the embedded German rule set and custom rule files

use std::io::Write;
use tempfile::NamedTempFile;
use zahlklar_core::{number, rules, NumericToken, RuleError, RuleSet, UnitKind, UnitSource};

/// Scan `text` and render the first numeral the way the general stage would
fn render_first(rules: &RuleSet, text: &str) -> Option<String> {
    let m = rules.scanner().find_iter(text).next()?;
    let unit = rules.classifier().classify_unit(text, m.start, m.unit_keyword);
    let token = NumericToken {
        raw: m.text,
        numeral: m.numeral,
        start: m.start,
        end: m.end,
        number: number::parse(m.numeral).ok()?,
        unit,
    };
    rules.rounding().render(&token, text)
}

#[test]
fn test_german_currency_rows() {
    let rules = rules::german().unwrap();
    assert_eq!(
        render_first(&rules, "324.620,22 Euro wurden ausgegeben.").as_deref(),
        Some("etwa 325.000 Euro")
    );
    assert_eq!(
        render_first(&rules, "1.000.000 Euro wurden gespendet.").as_deref(),
        Some("etwa 1,0 Million Euro (So viel Geld, dass man 100 Autos kaufen könnte)")
    );
    assert_eq!(render_first(&rules, "Das kostet 12,50 Euro."), None);
}

#[test]
fn test_german_people_rows() {
    let rules = rules::german().unwrap();
    assert_eq!(
        render_first(&rules, "10.000 Menschen waren anwesend.").as_deref(),
        Some("etwa 10.000 Menschen (So viele Menschen, wie in ein großes Fußballstadion passen)")
    );
    assert_eq!(
        render_first(&rules, "1.897 Menschen nahmen teil.").as_deref(),
        Some("etwa 2.000 Menschen")
    );
    assert_eq!(
        render_first(&rules, "Es kamen 750 Menschen.").as_deref(),
        Some("etwa 1.000 Menschen")
    );
    assert_eq!(render_first(&rules, "Es kamen 42 Besucher."), None);
    assert_eq!(
        render_first(&rules, "Es kamen 12.500 begeisterte Besucher.").as_deref(),
        Some("etwa 12.000 Menschen (So viele Menschen, wie in ein großes Fußballstadion passen)")
    );
}

#[test]
fn test_german_weight_rows() {
    let rules = rules::german().unwrap();
    let rendered = render_first(&rules, "Das Paket wiegt 250 Kilogramm.").unwrap();
    assert!(rendered.starts_with("etwa 250 Kilogramm ("));
    assert!(rendered.contains("Kühlschrank"));

    assert_eq!(
        render_first(&rules, "Es waren 2,7 kg Mehl.").as_deref(),
        Some("etwa 3 kg")
    );
}

#[test]
fn test_german_bare_numbers() {
    let rules = rules::german().unwrap();
    assert_eq!(
        render_first(&rules, "Die Temperatur beträgt -15,5 Grad.").as_deref(),
        Some("etwa -16")
    );
    assert_eq!(render_first(&rules, "Wir haben 42 Stühle."), None);
}

#[test]
fn test_german_context_classification() {
    let rules = rules::german().unwrap();
    let classifier = rules.classifier();

    let text = "Treffen um 14:30 Uhr";
    assert!(classifier.should_ignore(text, text.find("14").unwrap()));

    let text = "Der pH-Wert beträgt 7,4.";
    assert!(classifier.should_ignore(text, text.find("7,4").unwrap()));

    let text = "Im Jahr 2024 gab es viele.";
    assert!(classifier.is_year_reference(text, text.find("2024").unwrap()));

    let text = "Es kamen 5.000 begeisterte Besucher";
    let hint = classifier.classify_unit(text, text.find("5.000").unwrap(), None);
    assert_eq!(hint.kind, UnitKind::People);
    assert_eq!(hint.source, UnitSource::Context);
}

#[test]
fn test_german_percentages() {
    let rules = rules::german().unwrap();
    let table = rules.percentages();
    assert_eq!(table.describe("25"), "jeder Vierte");
    assert_eq!(table.describe("90"), "fast alle");
    assert_eq!(table.describe("14"), "wenige");
    assert_eq!(table.describe("4,57"), "wenige");
    assert_eq!(table.describe("45,5"), "45,5 Prozent");

    let text = "30 Prozent der Fläche sind bewaldet.";
    let m = table.find_iter(text).next().unwrap();
    assert_eq!(
        table.replacement(&m),
        "Ein Drittel, also ein Stück von drei gleich großen Teilen"
    );
}

#[test]
fn test_german_overrides() {
    let rules = rules::german().unwrap();
    let apply_all = |text: &str| {
        rules
            .overrides()
            .iter()
            .fold(text.to_string(), |acc, o| o.apply(&acc).into_owned())
    };

    assert_eq!(
        apply_all("Im Jahr 2024 gab es 1.234 Ereignisse."),
        "Im Jahr 2024 gab es etwa 1.000 Ereignisse."
    );
    assert_eq!(
        apply_all("Am 1. Januar 2024 waren es 5.678 Teilnehmer."),
        "Am 1. Januar 2024 waren es etwa 6.000 Teilnehmer."
    );
}

#[test]
fn test_custom_rule_file() {
    let source = r#"
[metadata]
code = "de-kurz"
name = "Deutsch (kurz)"

[format]
approx_prefix = "ca. "

[[units]]
kind = "currency"
keywords = ["Euro"]

[percentages]
keyword = "Prozent"

[[rounding]]
unit = "currency"
threshold = 100.0
granularity = 2
template = "{sign}{value} Euro"
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    let rules = RuleSet::from_file(file.path()).unwrap();
    assert_eq!(rules.code(), "de-kurz");
    assert_eq!(
        render_first(&rules, "Das kostet 349 Euro.").as_deref(),
        Some("ca. 300 Euro")
    );
}

#[test]
fn test_invalid_rule_file() {
    let source = r#"
[metadata]
code = "x"
name = "X"

[[units]]
kind = "none"
keywords = ["Stück"]

[percentages]
keyword = "Prozent"
"#;
    let err = RuleSet::from_toml_str(source).unwrap_err();
    assert!(matches!(err, RuleError::Validation(_)));
}
