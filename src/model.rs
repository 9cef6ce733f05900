//! Input data model: the clinical record form schema, generated documents,
//! and optional header identity. All of it arrives fully materialized from
//! external collaborators; the engine never mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checkbox-style field: a mark plus an optional date annotation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckField {
    pub checked: bool,
    pub date: Option<String>,
}

/// Date and time of death, both optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathRecord {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultationInfo {
    pub date: Option<String>,
    pub time: Option<String>,
    pub attendance: Option<String>,
    /// Hospital registry number (RGHV).
    pub registry: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalData {
    pub name: Option<String>,
    pub coat: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerData {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub id_document: Option<String>,
    pub exam_site: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisProcedure {
    pub diagnosis: Option<String>,
    pub affected_system: Option<String>,
    pub hospitalized: CheckField,
    pub home_treatment: CheckField,
    pub euthanasia: CheckField,
    pub discharge: Option<String>,
    pub death: DeathRecord,
    pub responsible: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VeterinarianIdentity {
    pub name: Option<String>,
    /// Professional registration number (CRMV).
    pub registration: Option<String>,
    pub signature: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Anamnesis {
    pub morbid_history: Option<String>,
    pub vaccinations: Option<String>,
    pub dewormings: Option<String>,
    pub ectoparasites: Option<String>,
    pub behavior: Option<String>,
    pub feeding: Option<String>,
    pub herd_family_history: Option<String>,
    pub street_access: Option<String>,
    pub habitat: Option<String>,
    pub animal_contacts: Option<String>,
    pub rodent_contact: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestiveSystem {
    pub feeding: Option<String>,
    pub emesis: Option<String>,
    pub regurgitation: Option<String>,
    pub diarrhea: Option<String>,
    pub dyschezia: Option<String>,
    pub tenesmus: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RespiratoryCardiovascularSystem {
    pub cough: Option<String>,
    pub sneezing: Option<String>,
    pub secretions: Option<String>,
    pub dyspnea: Option<String>,
    pub tachypnea: Option<String>,
    pub cyanosis: Option<String>,
    pub easy_fatigue: Option<String>,
    pub syncope: Option<String>,
    pub weight_loss: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenitourinarySystem {
    pub water_intake: Option<String>,
    pub urine: Option<String>,
    pub last_heat: Option<String>,
    pub last_birth: Option<String>,
    pub genital_discharge: Option<String>,
    pub neutered: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegumentarySystem {
    pub lesion_onset: Option<String>,
    pub lesion_progression: Option<String>,
    pub history: Option<String>,
    pub pruritus: Option<String>,
    pub location: Option<String>,
    pub characteristics: Option<String>,
    pub skin_and_coat: Option<String>,
    pub ear_discharge: Option<String>,
    pub head_shaking: Option<String>,
    pub bathing: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NervousSystem {
    pub mental_state: Option<String>,
    pub behavior: Option<String>,
    pub ataxia: Option<String>,
    pub paresis: Option<String>,
    pub paralysis: Option<String>,
    pub seizures: Option<String>,
    pub hearing: Option<String>,
    pub vision: Option<String>,
    pub progression: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OphthalmicSystem {
    pub ocular_discharge: Option<String>,
    pub blepharospasm: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MusculoskeletalSystem {
    pub lameness: Option<String>,
    pub posture: Option<String>,
    pub fractures: Option<String>,
    pub muscle_atrophy: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalExam {
    /// Heart rate.
    pub hr: Option<String>,
    /// Respiratory rate.
    pub rr: Option<String>,
    /// Intestinal motility.
    pub im: Option<String>,
    pub temperature: Option<String>,
    pub hydration: Option<String>,
    pub lymph_nodes: Option<String>,
    pub mucosae: Option<String>,
    /// Capillary refill time.
    pub crt: Option<String>,
    pub pulse: Option<String>,
    pub general_inspection: Option<String>,
    pub skin_and_coat: Option<String>,
    pub nutritional_state: Option<String>,
    pub palpation: Option<String>,
    pub cardiopulmonary_auscultation: Option<String>,
    pub percussion: Option<String>,
    pub complementary_observations: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagingExam {
    pub xray: bool,
    pub ultrasound: bool,
    pub tomography: bool,
    pub examined_region: Option<String>,
    pub radiograph_number: Option<String>,
    pub quantity: Option<String>,
    pub date: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Treatment {
    pub prescription: Option<String>,
    pub follow_up: Option<String>,
}

/// The complete veterinary clinical record ("ficha clínica"). A fixed tree of
/// named groups with explicit optional leaves; an absent leaf always renders
/// as a fixed-length underscore placeholder so the printed form keeps its
/// writing space.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    pub id: String,
    pub consultation: ConsultationInfo,
    pub animal: AnimalData,
    pub owner: OwnerData,
    pub diagnosis_procedure: DiagnosisProcedure,
    pub veterinarian: VeterinarianIdentity,
    pub chief_complaint: Option<String>,
    pub anamnesis: Anamnesis,
    pub digestive: DigestiveSystem,
    pub respiratory_cardiovascular: RespiratoryCardiovascularSystem,
    pub genitourinary: GenitourinarySystem,
    pub integumentary: IntegumentarySystem,
    pub nervous: NervousSystem,
    pub ophthalmic: OphthalmicSystem,
    pub musculoskeletal: MusculoskeletalSystem,
    pub physical_exam: PhysicalExam,
    pub differential_diagnoses: Option<String>,
    pub imaging: ImagingExam,
    pub treatment: Treatment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ClinicalSummary,
    Prescription,
    ExamRequests,
    SpecialistReferral,
    Other,
}

impl DocumentType {
    /// Per-type typography preset: body font size and line spacing multiplier.
    pub fn typography(self) -> (f32, f32) {
        match self {
            DocumentType::ClinicalSummary => (11.0, 1.4),
            DocumentType::Prescription => (12.0, 1.6),
            DocumentType::ExamRequests => (11.0, 1.5),
            DocumentType::SpecialistReferral => (11.0, 1.4),
            DocumentType::Other => (12.0, 1.5),
        }
    }
}

/// A document produced upstream (e.g. by a text-generation service). The
/// `content` is unstructured text; the engine only classifies it line by line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: String,
    #[serde(rename = "document_type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

/// Branding logo: PNG bytes plus a display size in points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Logo {
    pub png_data: Vec<u8>,
    pub display_width: f32,
    pub display_height: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicBranding {
    pub name: String,
    pub legal_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<Logo>,
}

/// Caller-supplied header metadata. Absence of either part falls back to
/// blank-line letterhead placeholders rather than omitting the section.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub branding: Option<ClinicBranding>,
    pub veterinarian: Option<VeterinarianIdentity>,
}

/// Treats `None`, empty, and whitespace-only values as absent.
pub(crate) fn leaf<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
