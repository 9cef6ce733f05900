//! Clinical record form renderer.
//!
//! Lays the full "ficha clínica" out as a printable form: every group in the
//! fixed order of the paper original, with underscore placeholders reserving
//! writing space wherever a value is absent. Group styles vary — two-column
//! grids for the identification blocks, full-width labeled lines for owner
//! and diagnosis data, checkbox glyphs with date suffixes, and multi-line
//! text areas with a guaranteed minimum of blank lines.

use crate::error::Error;
use crate::layout::{RenderContext, wrap_text};
use crate::model::{
    CheckField, ClinicBranding, ClinicalRecord, RenderOptions, VeterinarianIdentity, leaf,
};
use crate::surface::{Surface, TextStyle};

const LINE_H: f32 = 17.0;
const SECTION_GAP: f32 = 23.0;

const BODY: f32 = 10.0;
const HINT: f32 = 8.0;
const SECTION_TITLE: f32 = 12.0;
const MAIN_TITLE: f32 = 18.0;

/// A value, or a placeholder run of `len` underscores. The placeholder is
/// never empty: the printed form must keep its visual structure for later
/// handwriting.
fn ph(value: &Option<String>, len: usize) -> String {
    match leaf(value) {
        Some(v) => v.to_string(),
        None => "_".repeat(len),
    }
}

fn date_ph(value: &Option<String>) -> String {
    match leaf(value) {
        Some(v) => v.to_string(),
        None => "___/___/___".to_string(),
    }
}

fn check_glyph(field: &CheckField) -> &'static str {
    if field.checked { "(X)" } else { "( )" }
}

pub fn render_record_into<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
    options: &RenderOptions,
) -> Result<(), Error> {
    clinic_header(ctx, options.branding.as_ref())?;
    ctx.write_centered(
        "FICHA CLÍNICA VETERINÁRIA",
        &TextStyle::bold(MAIN_TITLE),
        LINE_H + SECTION_GAP,
    )?;

    basic_data(ctx, record)?;
    animal_data(ctx, record)?;
    owner_data(ctx, record)?;
    diagnosis_data(ctx, record)?;
    veterinarian_data(ctx, record, options.veterinarian.as_ref())?;

    section_title(ctx, "QUEIXA PRINCIPAL/EVOLUÇÃO")?;
    text_area(ctx, &record.chief_complaint, 3)?;

    anamnesis(ctx, record)?;
    body_systems(ctx, record)?;
    physical_exam(ctx, record)?;

    section_title(ctx, "DIAGNÓSTICOS DIFERENCIAIS")?;
    text_area(ctx, &record.differential_diagnoses, 2)?;

    imaging_exam(ctx, record)?;
    treatment(ctx, record)?;
    Ok(())
}

/// Clinic branding block, or the blank-line letterhead template when no
/// branding was supplied. Either way the page starts with the same skeleton.
fn clinic_header<S: Surface>(
    ctx: &mut RenderContext<S>,
    branding: Option<&ClinicBranding>,
) -> Result<(), Error> {
    let body = TextStyle::regular(BODY);
    match branding {
        Some(clinic) => {
            if let Some(logo) = &clinic.logo {
                let x = ctx.surface.page_width() - ctx.margins().right - logo.display_width;
                let y = ctx.cursor() - 12.0;
                ctx.surface.draw_logo(logo, x, y)?;
            }

            ctx.write_line(&clinic.name, &TextStyle::bold(MAIN_TITLE), LINE_H + 9.0)?;
            if let Some(legal) = leaf(&clinic.legal_name)
                && legal != clinic.name
            {
                ctx.write_line(legal, &TextStyle::regular(12.0), LINE_H + 3.0)?;
            }
            if let Some(address) = leaf(&clinic.address) {
                ctx.write_line(&format!("Endereço: {address}"), &body, LINE_H)?;
            }
            if let Some(phone) = leaf(&clinic.phone) {
                ctx.write_line(&format!("Telefone: {phone}"), &body, LINE_H)?;
            }
            if let Some(email) = leaf(&clinic.email) {
                ctx.write_line(&format!("E-mail: {email}"), &body, LINE_H)?;
            }
        }
        None => {
            ctx.write_line(
                "CLÍNICA VETERINÁRIA",
                &TextStyle::bold(16.0),
                LINE_H + 6.0,
            )?;
            ctx.write_line(
                &format!("Nome da Clínica: {}", "_".repeat(55)),
                &body,
                LINE_H,
            )?;
            ctx.write_line(&format!("Endereço: {}", "_".repeat(55)), &body, LINE_H)?;
            ctx.write_line(
                &format!("Telefone: {} E-mail: {}", "_".repeat(17), "_".repeat(21)),
                &body,
                LINE_H,
            )?;
        }
    }
    ctx.advance(6.0);
    ctx.rule(0.5)?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn section_title<S: Surface>(ctx: &mut RenderContext<S>, title: &str) -> Result<(), Error> {
    // Keep the heading attached to at least one content line.
    ctx.ensure_room(LINE_H * 2.0 + 6.0)?;
    ctx.write_line(title, &TextStyle::bold(SECTION_TITLE), LINE_H + 6.0)
}

/// Italic reminder of what belongs in the section, as printed on the paper
/// form.
fn hint_line<S: Surface>(ctx: &mut RenderContext<S>, hint: &str) -> Result<(), Error> {
    let style = TextStyle::italic(HINT);
    let lines = wrap_text(&ctx.surface, hint, &style, ctx.content_width());
    for line in &lines {
        ctx.write_line(line, &style, LINE_H - 4.0)?;
    }
    ctx.advance(4.0);
    Ok(())
}

/// Fixed-column grid of `label: value` lines, filled row-major.
fn fields_in_columns<S: Surface>(
    ctx: &mut RenderContext<S>,
    fields: &[String],
    columns: usize,
) -> Result<(), Error> {
    let rows = fields.len().div_ceil(columns);
    ctx.ensure_room(rows as f32 * LINE_H)?;

    let style = TextStyle::regular(BODY);
    let column_width = ctx.content_width() / columns as f32;
    let top = ctx.cursor();
    for (index, field) in fields.iter().enumerate() {
        let column = index % columns;
        let row = index / columns;
        let x = ctx.left() + column as f32 * column_width;
        let y = top + row as f32 * LINE_H;
        ctx.surface.draw_text(field, x, y, &style)?;
    }
    ctx.advance(rows as f32 * LINE_H + SECTION_GAP);
    Ok(())
}

/// `label: value` on its own line, placeholder sized so every field ends at
/// roughly the same column.
fn labeled_field<S: Surface>(
    ctx: &mut RenderContext<S>,
    label: &str,
    value: &Option<String>,
) -> Result<(), Error> {
    let pad = 60usize.saturating_sub(label.chars().count() + 2).max(10);
    let text = format!("{label}: {}", ph(value, pad));
    ctx.write_line(&text, &TextStyle::regular(BODY), LINE_H)
}

/// Multi-line narrative area: wrapped content plus enough placeholder lines
/// to always reserve `min_lines` of writing space.
fn text_area<S: Surface>(
    ctx: &mut RenderContext<S>,
    value: &Option<String>,
    min_lines: usize,
) -> Result<(), Error> {
    let style = TextStyle::regular(BODY);
    let mut written = 0usize;
    if let Some(text) = leaf(value) {
        let lines = wrap_text(&ctx.surface, text, &style, ctx.content_width());
        for line in &lines {
            ctx.write_line(line, &style, LINE_H)?;
        }
        written = lines.len();
    }
    for _ in written..min_lines {
        ctx.write_line(&"_".repeat(80), &style, LINE_H)?;
    }
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn basic_data<S: Surface>(ctx: &mut RenderContext<S>, record: &ClinicalRecord) -> Result<(), Error> {
    section_title(ctx, "DADOS BÁSICOS")?;
    let c = &record.consultation;
    let fields = [
        format!("Data: {}", ph(&c.date, 20)),
        format!("Hora: {}", ph(&c.time, 15)),
        format!("Atendimento: {}", ph(&c.attendance, 30)),
        format!("RGHV: {}", ph(&c.registry, 20)),
    ];
    fields_in_columns(ctx, &fields, 2)
}

fn animal_data<S: Surface>(ctx: &mut RenderContext<S>, record: &ClinicalRecord) -> Result<(), Error> {
    section_title(ctx, "DADOS DO ANIMAL")?;
    let a = &record.animal;
    let fields = [
        format!("Nome: {}", ph(&a.name, 40)),
        format!("Pelagem: {}", ph(&a.coat, 30)),
        format!("Espécie: {}", ph(&a.species, 20)),
        format!("Raça: {}", ph(&a.breed, 30)),
        format!("Sexo: {}", ph(&a.sex, 15)),
        format!("Idade: {}", ph(&a.age, 15)),
        format!("Peso: {}", ph(&a.weight, 15)),
    ];
    fields_in_columns(ctx, &fields, 2)
}

fn owner_data<S: Surface>(ctx: &mut RenderContext<S>, record: &ClinicalRecord) -> Result<(), Error> {
    section_title(ctx, "DADOS DO PROPRIETÁRIO")?;
    let style = TextStyle::regular(BODY);
    let o = &record.owner;

    ctx.write_line(
        &format!("Proprietário: {}", ph(&o.name, 60)),
        &style,
        LINE_H,
    )?;
    ctx.write_line(&format!("Endereço: {}", ph(&o.address, 70)), &style, LINE_H)?;
    ctx.write_line(
        &format!(
            "Cidade: {}  Estado: {}  CEP: {}",
            ph(&o.city, 20),
            ph(&o.state, 10),
            ph(&o.postal_code, 15),
        ),
        &style,
        LINE_H,
    )?;
    ctx.write_line(
        &format!(
            "Fone: {}  Doc. Identidade: {}",
            ph(&o.phone, 20),
            ph(&o.id_document, 20),
        ),
        &style,
        LINE_H,
    )?;
    ctx.write_line(
        &format!("Local do Exame: {}", ph(&o.exam_site, 30)),
        &style,
        LINE_H,
    )?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn diagnosis_data<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
) -> Result<(), Error> {
    section_title(ctx, "DIAGNÓSTICO/PROCEDIMENTO")?;
    let style = TextStyle::regular(BODY);
    let d = &record.diagnosis_procedure;

    ctx.write_line(
        &format!("DIAGNÓSTICO: {}", ph(&d.diagnosis, 60)),
        &style,
        LINE_H,
    )?;
    ctx.write_line(
        &format!("SISTEMA AFETADO: {}", ph(&d.affected_system, 50)),
        &style,
        LINE_H,
    )?;

    let checkboxes = format!(
        "Internado {} {}   Tratamento domiciliar {} {}   Eutanásia {} {}",
        check_glyph(&d.hospitalized),
        date_ph(&d.hospitalized.date),
        check_glyph(&d.home_treatment),
        date_ph(&d.home_treatment.date),
        check_glyph(&d.euthanasia),
        date_ph(&d.euthanasia.date),
    );
    ctx.write_line(&checkboxes, &style, LINE_H)?;

    let death_time = match leaf(&d.death.time) {
        Some(t) => t.to_string(),
        None => "___:___".to_string(),
    };
    ctx.write_line(
        &format!(
            "Alta {}   Óbito {} {} Horas   Responsável {}",
            date_ph(&d.discharge),
            date_ph(&d.death.date),
            death_time,
            ph(&d.responsible, 20),
        ),
        &style,
        LINE_H,
    )?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

/// Veterinarian identity: the caller-supplied identity wins over whatever is
/// stored on the record.
fn veterinarian_data<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
    supplied: Option<&VeterinarianIdentity>,
) -> Result<(), Error> {
    let style = TextStyle::regular(BODY);
    let stored = &record.veterinarian;
    let name = supplied
        .and_then(|v| leaf(&v.name))
        .or_else(|| leaf(&stored.name))
        .map_or_else(|| "_".repeat(40), str::to_string);
    let registration = supplied
        .and_then(|v| leaf(&v.registration))
        .or_else(|| leaf(&stored.registration));
    let signature = supplied
        .and_then(|v| leaf(&v.signature))
        .or_else(|| leaf(&stored.signature))
        .map_or_else(|| "_".repeat(30), str::to_string);

    let vet_line = match registration {
        Some(crmv) => format!("Médico Veterinário: {name}  CRMV: {crmv}"),
        None => format!("Médico Veterinário: {name}"),
    };
    ctx.write_line(&vet_line, &style, LINE_H)?;
    ctx.write_line(&format!("Assinatura: {signature}"), &style, LINE_H)?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn anamnesis<S: Surface>(ctx: &mut RenderContext<S>, record: &ClinicalRecord) -> Result<(), Error> {
    section_title(ctx, "ANAMNESE")?;
    hint_line(
        ctx,
        "(antecedentes mórbidos, vacinações, vermifugações, ectoparasitas, comportamento, \
         alimentação, histórico do rebanho/familiar, acesso à rua, habitat, contactantes, \
         contato com roedores)",
    )?;

    let a = &record.anamnesis;
    labeled_field(ctx, "Antecedentes Mórbidos", &a.morbid_history)?;
    labeled_field(ctx, "Vacinações", &a.vaccinations)?;
    labeled_field(ctx, "Vermifugações", &a.dewormings)?;
    labeled_field(ctx, "Ectoparasitas", &a.ectoparasites)?;
    labeled_field(ctx, "Comportamento", &a.behavior)?;
    labeled_field(ctx, "Alimentação", &a.feeding)?;
    labeled_field(ctx, "Histórico do Rebanho/Familiar", &a.herd_family_history)?;
    labeled_field(ctx, "Acesso à Rua", &a.street_access)?;
    labeled_field(ctx, "Habitat", &a.habitat)?;
    labeled_field(ctx, "Contactantes", &a.animal_contacts)?;
    labeled_field(ctx, "Contato com Roedores", &a.rodent_contact)?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn body_systems<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
) -> Result<(), Error> {
    section_title(ctx, "SISTEMA DIGESTÓRIO E GLÂNDULAS ANEXAS")?;
    hint_line(
        ctx,
        "(alimentação, emese, regurgitação, diarréia, disquesia, tenesmo)",
    )?;
    let d = &record.digestive;
    labeled_field(ctx, "Alimentação", &d.feeding)?;
    labeled_field(ctx, "Emese", &d.emesis)?;
    labeled_field(ctx, "Regurgitação", &d.regurgitation)?;
    labeled_field(ctx, "Diarréia", &d.diarrhea)?;
    labeled_field(ctx, "Disquesia", &d.dyschezia)?;
    labeled_field(ctx, "Tenesmo", &d.tenesmus)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA RESPIRATÓRIO E CARDIOVASCULAR")?;
    hint_line(
        ctx,
        "(tosse, espirro, secreções, dispnéia, taquipnéia, cianose, cansaço fácil, síncope, \
         emagrecimento)",
    )?;
    let r = &record.respiratory_cardiovascular;
    labeled_field(ctx, "Tosse", &r.cough)?;
    labeled_field(ctx, "Espirro", &r.sneezing)?;
    labeled_field(ctx, "Secreções", &r.secretions)?;
    labeled_field(ctx, "Dispnéia", &r.dyspnea)?;
    labeled_field(ctx, "Taquipnéia", &r.tachypnea)?;
    labeled_field(ctx, "Cianose", &r.cyanosis)?;
    labeled_field(ctx, "Cansaço Fácil", &r.easy_fatigue)?;
    labeled_field(ctx, "Síncope", &r.syncope)?;
    labeled_field(ctx, "Emagrecimento", &r.weight_loss)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA GÊNITO URINÁRIO E GLÂNDULAS MAMÁRIAS")?;
    hint_line(
        ctx,
        "(ingestão hídrica, urina, último cio, último parto, secreção vaginal ou peniana, \
         castração)",
    )?;
    let g = &record.genitourinary;
    labeled_field(ctx, "Ingestão Hídrica", &g.water_intake)?;
    labeled_field(ctx, "Urina", &g.urine)?;
    labeled_field(ctx, "Último Cio", &g.last_heat)?;
    labeled_field(ctx, "Último Parto", &g.last_birth)?;
    labeled_field(ctx, "Secreção Vaginal ou Peniana", &g.genital_discharge)?;
    labeled_field(ctx, "Castração", &g.neutered)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA TEGUMENTAR")?;
    hint_line(
        ctx,
        "(início da lesão e evolução, histórico, prurido, localização, características, pele e \
         pêlos, secreção otológica, meneios cefálicos, banhos)",
    )?;
    let t = &record.integumentary;
    labeled_field(ctx, "Início da Lesão", &t.lesion_onset)?;
    labeled_field(ctx, "Evolução da Lesão", &t.lesion_progression)?;
    labeled_field(ctx, "Histórico", &t.history)?;
    labeled_field(ctx, "Prurido", &t.pruritus)?;
    labeled_field(ctx, "Localização", &t.location)?;
    labeled_field(ctx, "Características", &t.characteristics)?;
    labeled_field(ctx, "Pele e Pêlos", &t.skin_and_coat)?;
    labeled_field(ctx, "Secreção Otológica", &t.ear_discharge)?;
    labeled_field(ctx, "Meneios Cefálicos", &t.head_shaking)?;
    labeled_field(ctx, "Banhos", &t.bathing)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA NERVOSO")?;
    hint_line(
        ctx,
        "(estado mental, comportamento, ataxia, paresia, paralisia, convulsão, audição, visão, \
         evolução)",
    )?;
    let n = &record.nervous;
    labeled_field(ctx, "Estado Mental", &n.mental_state)?;
    labeled_field(ctx, "Comportamento", &n.behavior)?;
    labeled_field(ctx, "Ataxia", &n.ataxia)?;
    labeled_field(ctx, "Paresia", &n.paresis)?;
    labeled_field(ctx, "Paralisia", &n.paralysis)?;
    labeled_field(ctx, "Convulsão", &n.seizures)?;
    labeled_field(ctx, "Audição", &n.hearing)?;
    labeled_field(ctx, "Visão", &n.vision)?;
    labeled_field(ctx, "Evolução", &n.progression)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA OFTÁLMICO")?;
    hint_line(ctx, "(secreção ocular, blefaroespasmo)")?;
    let o = &record.ophthalmic;
    labeled_field(ctx, "Secreção Ocular", &o.ocular_discharge)?;
    labeled_field(ctx, "Blefaroespasmo", &o.blepharospasm)?;
    ctx.advance(SECTION_GAP);

    section_title(ctx, "SISTEMA MÚSCULO-ESQUELÉTICO")?;
    hint_line(ctx, "(claudicação, postura, fraturas, atrofia muscular)")?;
    let m = &record.musculoskeletal;
    labeled_field(ctx, "Claudicação", &m.lameness)?;
    labeled_field(ctx, "Postura", &m.posture)?;
    labeled_field(ctx, "Fraturas", &m.fractures)?;
    labeled_field(ctx, "Atrofia Muscular", &m.muscle_atrophy)?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn physical_exam<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
) -> Result<(), Error> {
    section_title(ctx, "EXAME FÍSICO")?;
    let style = TextStyle::regular(BODY);
    let e = &record.physical_exam;

    ctx.write_line(
        &format!(
            "FC {}   FR {}   MI {}",
            ph(&e.hr, 6),
            ph(&e.rr, 6),
            ph(&e.im, 6),
        ),
        &style,
        LINE_H + 6.0,
    )?;

    let rows = [
        format!(
            "T° C {}   Hidratação {}   Linfonodos {}",
            ph(&e.temperature, 12),
            ph(&e.hydration, 12),
            ph(&e.lymph_nodes, 12),
        ),
        format!("Mucosas {}   TPC {}", ph(&e.mucosae, 12), ph(&e.crt, 12)),
        format!(
            "Pulso {}   Inspeção geral {}",
            ph(&e.pulse, 12),
            ph(&e.general_inspection, 12),
        ),
        format!(
            "Pêlos e pele {}   Estado Nutricional {}",
            ph(&e.skin_and_coat, 12),
            ph(&e.nutritional_state, 12),
        ),
        format!("Palpação {}", ph(&e.palpation, 12)),
        format!(
            "Auscultação cardio-pulmonar {}",
            ph(&e.cardiopulmonary_auscultation, 40),
        ),
        format!("Percussão {}", ph(&e.percussion, 40)),
    ];
    for row in &rows {
        ctx.write_line(row, &style, LINE_H)?;
    }
    ctx.advance(6.0);

    ctx.write_line("Observações complementares:", &style, LINE_H)?;
    text_area(ctx, &e.complementary_observations, 6)
}

fn imaging_exam<S: Surface>(
    ctx: &mut RenderContext<S>,
    record: &ClinicalRecord,
) -> Result<(), Error> {
    section_title(ctx, "EXAME POR IMAGEM")?;
    let style = TextStyle::regular(BODY);
    let i = &record.imaging;

    // (X)/( ) instead of ballot-box glyphs: every mark must survive WinAnsi
    // encoding.
    let mark = |checked: bool| if checked { "(X)" } else { "( )" };
    ctx.write_line(
        &format!(
            "RX {}    US {}    Tomografia {}",
            mark(i.xray),
            mark(i.ultrasound),
            mark(i.tomography),
        ),
        &style,
        LINE_H,
    )?;
    ctx.write_line(
        &format!("Região a ser examinada: {}", ph(&i.examined_region, 40)),
        &style,
        LINE_H,
    )?;

    let date = match leaf(&i.date) {
        Some(d) => d.to_string(),
        None => "___/___/____".to_string(),
    };
    ctx.write_line(
        &format!(
            "Nº da radiografia {}   Quantidade {}   Data {}",
            ph(&i.radiograph_number, 12),
            ph(&i.quantity, 12),
            date,
        ),
        &style,
        LINE_H,
    )?;
    ctx.advance(SECTION_GAP);
    Ok(())
}

fn treatment<S: Surface>(ctx: &mut RenderContext<S>, record: &ClinicalRecord) -> Result<(), Error> {
    section_title(ctx, "TRATAMENTO")?;
    text_area(ctx, &record.treatment.prescription, 6)?;
    ctx.write_line(
        &format!("RETORNO: {}", ph(&record.treatment.follow_up, 30)),
        &TextStyle::regular(BODY),
        LINE_H,
    )?;
    Ok(())
}
