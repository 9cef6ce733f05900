mod common;

use common::RecordingSurface;
use vetform_pdf::layout::wrap_text;
use vetform_pdf::surface::{Surface, TextStyle};

// With RecordingSurface metrics and 10pt text, every char is 5pt wide.
const STYLE: TextStyle = TextStyle {
    variant: vetform_pdf::surface::FontVariant::Regular,
    size: 10.0,
    color: None,
};

#[test]
fn short_text_stays_on_one_line() {
    let surface = RecordingSurface::a4();
    let lines = wrap_text(&surface, "uma linha curta", &STYLE, 200.0);
    assert_eq!(lines, vec!["uma linha curta"]);
}

#[test]
fn lines_fit_the_width_bound() {
    let surface = RecordingSurface::a4();
    let text = "o paciente apresenta apatia e perda de apetite desde ontem pela manhã";
    let lines = wrap_text(&surface, text, &STYLE, 100.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(
            surface.measure_text(line, &STYLE) <= 100.0,
            "line too wide: {line:?}"
        );
    }
}

#[test]
fn no_words_are_lost_or_reordered() {
    let surface = RecordingSurface::a4();
    let text = "hemograma completo ultrassonografia abdominal e dosagem de ureia e creatinina";
    let lines = wrap_text(&surface, text, &STYLE, 120.0);
    let rejoined = lines.join(" ");
    let original: Vec<&str> = text.split_whitespace().collect();
    let recovered: Vec<&str> = rejoined.split_whitespace().collect();
    assert_eq!(original, recovered);
}

#[test]
fn over_wide_single_word_gets_its_own_line() {
    let surface = RecordingSurface::a4();
    // 40 chars at 5pt each is 200pt, twice the allowed width.
    let word = "a".repeat(40);
    let text = format!("inicio {word} fim");
    let lines = wrap_text(&surface, &text, &STYLE, 100.0);
    assert!(lines.contains(&word));
    assert_eq!(lines.first().map(String::as_str), Some("inicio"));
    assert_eq!(lines.last().map(String::as_str), Some("fim"));
}

#[test]
fn caller_newlines_are_preserved() {
    let surface = RecordingSurface::a4();
    let lines = wrap_text(&surface, "primeira\nsegunda", &STYLE, 300.0);
    assert_eq!(lines, vec!["primeira", "segunda"]);
}

#[test]
fn blank_paragraph_becomes_empty_line() {
    let surface = RecordingSurface::a4();
    let lines = wrap_text(&surface, "antes\n\ndepois", &STYLE, 300.0);
    assert_eq!(lines, vec!["antes", "", "depois"]);
}

#[test]
fn runs_of_spaces_collapse() {
    let surface = RecordingSurface::a4();
    let lines = wrap_text(&surface, "um   dois     três", &STYLE, 300.0);
    assert_eq!(lines, vec!["um dois três"]);
}
