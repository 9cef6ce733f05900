#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use vetform_pdf::Error;
use vetform_pdf::model::{
    AnimalData, ClinicBranding, ClinicalRecord, ConsultationInfo, DocumentType, GeneratedDocument,
    OwnerData, RenderOptions, VeterinarianIdentity,
};
use vetform_pdf::surface::{FontVariant, Surface, TextStyle};

/// One recorded draw operation, tagged with the page it landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Text {
        page: usize,
        x: f32,
        y: f32,
        text: String,
        size: f32,
        bold: bool,
    },
    Rule {
        page: usize,
        y: f32,
    },
    Logo {
        page: usize,
    },
}

/// Fake surface with deterministic metrics: every char is `size / 2` points
/// wide. Records every draw so tests can assert on placement and paging.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub page: usize,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn a4() -> Self {
        Self::with_size(595.28, 841.89)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            page: 1,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn texts_on_page(&self, page: usize) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, page: p, .. } if *p == page => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Surface for RecordingSurface {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn page_height(&self) -> f32 {
        self.height
    }

    fn page_count(&self) -> usize {
        self.page
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size / 2.0
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<(), Error> {
        assert!(
            y <= self.height,
            "draw_text below page bounds: y={y} height={}",
            self.height
        );
        self.ops.push(Op::Text {
            page: self.page,
            x,
            y,
            text: text.to_string(),
            size: style.size,
            bold: matches!(style.variant, FontVariant::Bold | FontVariant::BoldOblique),
        });
        Ok(())
    }

    fn draw_rule(
        &mut self,
        _x1: f32,
        _x2: f32,
        y: f32,
        _thickness: f32,
        _color: Option<[u8; 3]>,
    ) -> Result<(), Error> {
        self.ops.push(Op::Rule { page: self.page, y });
        Ok(())
    }

    fn draw_logo(
        &mut self,
        _logo: &vetform_pdf::model::Logo,
        _x: f32,
        _y: f32,
    ) -> Result<(), Error> {
        self.ops.push(Op::Logo { page: self.page });
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), Error> {
        self.page += 1;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, Error> {
        Ok(Vec::new())
    }
}

pub fn empty_record() -> ClinicalRecord {
    ClinicalRecord {
        id: "rec-0001".to_string(),
        ..ClinicalRecord::default()
    }
}

pub fn filled_record() -> ClinicalRecord {
    let mut record = empty_record();
    record.consultation = ConsultationInfo {
        date: Some("12/03/2025".to_string()),
        time: Some("14:30".to_string()),
        attendance: Some("Consulta de retorno".to_string()),
        registry: Some("RG-4821".to_string()),
    };
    record.animal = AnimalData {
        name: Some("Thor".to_string()),
        coat: Some("Dourada".to_string()),
        species: Some("Canina".to_string()),
        breed: Some("Golden Retriever".to_string()),
        sex: Some("Macho".to_string()),
        age: Some("6 anos".to_string()),
        weight: Some("32 kg".to_string()),
    };
    record.owner = OwnerData {
        name: Some("Maria da Silva".to_string()),
        phone: Some("(11) 98765-4321".to_string()),
        ..OwnerData::default()
    };
    record.chief_complaint =
        Some("Apatia e perda de apetite há três dias, com episódios de emese.".to_string());
    record.physical_exam.temperature = Some("39,2".to_string());
    record.treatment.prescription =
        Some("Fluidoterapia IV por 24h.\nMaropitant 1 mg/kg SC uma vez ao dia.".to_string());
    record
}

pub fn options_with_branding() -> RenderOptions {
    RenderOptions {
        branding: Some(ClinicBranding {
            name: "Clínica Veterinária Aurora".to_string(),
            legal_name: Some("Aurora Serviços Veterinários Ltda".to_string()),
            address: Some("Rua das Acácias, 120 - São Paulo/SP".to_string()),
            phone: Some("(11) 3333-4444".to_string()),
            email: Some("contato@auroravet.com.br".to_string()),
            logo: None,
        }),
        veterinarian: Some(VeterinarianIdentity {
            name: Some("Dra. Ana Souza".to_string()),
            registration: Some("CRMV-SP 12345".to_string()),
            signature: None,
        }),
    }
}

pub fn document(doc_type: DocumentType, title: &str, content: &str) -> GeneratedDocument {
    GeneratedDocument {
        id: format!("doc-{}", title.len()),
        doc_type,
        title: title.to_string(),
        content: content.to_string(),
        generated_at: Utc.with_ymd_and_hms(2025, 3, 12, 14, 30, 0).unwrap(),
    }
}

pub fn sample_documents() -> Vec<GeneratedDocument> {
    vec![
        document(
            DocumentType::ClinicalSummary,
            "Resumo Clínico",
            "RESUMO DA CONSULTA\nPaciente apresenta:\n- Apatia\n- Perda de apetite\nQuadro compatível com gastrite aguda.",
        ),
        document(
            DocumentType::Prescription,
            "Receituário",
            "MEDICAÇÕES\n1. Maropitant 1 mg/kg SC, uma vez ao dia, por 3 dias.\n2. Omeprazol 1 mg/kg VO, uma vez ao dia, por 7 dias.",
        ),
        document(
            DocumentType::ExamRequests,
            "Solicitação de Exames",
            "EXAMES SOLICITADOS\n- Hemograma completo\n- Ultrassonografia abdominal",
        ),
    ]
}
