mod common;

use common::{document, empty_record, sample_documents};
use vetform_pdf::model::DocumentType;
use vetform_pdf::{Error, document_file_name, record_file_name, report_file_name};

#[test]
fn document_name_slugs_the_title_and_stamps_the_timestamp() {
    let doc = document(DocumentType::Prescription, "Receituário", "conteúdo");
    assert_eq!(
        document_file_name(&doc),
        "receitu-rio-2025-03-12-14-30-00.pdf"
    );
}

// The time part is hyphen-separated HH-MM-SS, not a compact HHMM stamp.
#[test]
fn document_name_time_is_hyphenated_to_seconds() {
    let doc = document(DocumentType::Other, "Atestado", "conteúdo");
    let name = document_file_name(&doc);
    assert!(name.ends_with("-2025-03-12-14-30-00.pdf"), "got {name:?}");
}

#[test]
fn slug_collapses_punctuation_runs() {
    let doc = document(
        DocumentType::Other,
        "Atestado -- Sanidade (2ª via)",
        "conteúdo",
    );
    assert_eq!(
        document_file_name(&doc),
        "atestado-sanidade-2-via-2025-03-12-14-30-00.pdf"
    );
}

#[test]
fn slug_is_capped_at_thirty_chars() {
    let doc = document(
        DocumentType::Other,
        "encaminhamento para especialista em cardiologia veterinaria",
        "conteúdo",
    );
    let name = document_file_name(&doc);
    let stem = name.strip_suffix("-2025-03-12-14-30-00.pdf").unwrap();
    assert!(stem.chars().count() <= 30, "stem too long: {stem:?}");
    assert!(!stem.ends_with('-'));
}

#[test]
fn all_symbol_title_falls_back_to_a_generic_stem() {
    let doc = document(DocumentType::Other, "!!!", "conteúdo");
    assert_eq!(
        document_file_name(&doc),
        "documento-2025-03-12-14-30-00.pdf"
    );
}

#[test]
fn report_name_uses_the_first_document_date() {
    let name = report_file_name(&sample_documents()).unwrap();
    assert_eq!(name, "relatorio-consulta-2025-03-12.pdf");
}

#[test]
fn report_name_requires_documents() {
    assert!(matches!(report_file_name(&[]), Err(Error::EmptyReport)));
}

#[test]
fn record_name_uses_the_animal_name_when_present() {
    let mut record = empty_record();
    record.animal.name = Some("Thor".to_string());
    let name = record_file_name(&record);
    assert!(name.starts_with("ficha-clinica-thor-"));
    assert!(name.ends_with(".pdf"));
}

#[test]
fn record_name_defaults_when_the_animal_is_unnamed() {
    let name = record_file_name(&empty_record());
    assert!(name.starts_with("ficha-clinica-animal-"));
}
