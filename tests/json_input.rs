mod common;

use common::RecordingSurface;
use vetform_pdf::document_file_name;
use vetform_pdf::ficha::render_record_into;
use vetform_pdf::layout::{Margins, RenderContext};
use vetform_pdf::model::{ClinicalRecord, DocumentType, GeneratedDocument, RenderOptions};

// Inputs arrive as JSON from external collaborators; these fixtures mirror
// their payload shape.

#[test]
fn generated_document_deserializes_from_collaborator_json() {
    let raw = r#"{
        "id": "doc-77",
        "document_type": "exam_requests",
        "title": "Solicitação de Exames",
        "content": "EXAMES\n- Hemograma completo",
        "generated_at": "2025-03-12T14:30:00Z"
    }"#;
    let doc: GeneratedDocument = serde_json::from_str(raw).unwrap();
    assert_eq!(doc.doc_type, DocumentType::ExamRequests);
    assert_eq!(doc.title, "Solicitação de Exames");
    assert_eq!(
        document_file_name(&doc),
        "solicita-o-de-exames-2025-03-12-14-30-00.pdf"
    );
}

#[test]
fn partial_record_json_fills_defaults_and_renders() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = r#"{
        "id": "rec-9",
        "animal": { "name": "Mia", "species": "Felina" },
        "chief_complaint": "Prurido intenso há uma semana."
    }"#;
    let record: ClinicalRecord = serde_json::from_str(raw).unwrap();
    assert!(record.owner.name.is_none());

    let mut ctx = RenderContext::new(RecordingSurface::a4(), Margins::default(), None);
    render_record_into(&mut ctx, &record, &RenderOptions::default()).unwrap();
    assert!(ctx.surface.contains_text("Nome: Mia"));
    assert!(ctx.surface.contains_text("Espécie: Felina"));
    assert!(ctx.surface.contains_text("Prurido intenso"));
    // Absent groups still render as placeholder lines.
    assert!(ctx
        .surface
        .contains_text(&format!("Proprietário: {}", "_".repeat(60))));
}

#[test]
fn unknown_document_type_is_rejected() {
    let raw = r#"{
        "id": "doc-1",
        "document_type": "invoice",
        "title": "Fatura",
        "content": "x",
        "generated_at": "2025-03-12T14:30:00Z"
    }"#;
    assert!(serde_json::from_str::<GeneratedDocument>(raw).is_err());
}
