//! Generated-document and consultation-report rendering.
//!
//! A single document renders with a branded header and its content laid out
//! by structural role. A report stitches several documents into one file: a
//! cover page, then each document starting on a fresh page under a numbered
//! heading.

use crate::classify::{Role, classify_content};
use crate::error::Error;
use crate::layout::RenderContext;
use crate::model::{ClinicBranding, GeneratedDocument};
use crate::surface::{Surface, TextStyle};

const ACCENT: [u8; 3] = [25, 25, 112];
const META_GRAY: [u8; 3] = [100, 100, 100];

pub fn render_document_into<S: Surface>(
    ctx: &mut RenderContext<S>,
    document: &GeneratedDocument,
    branding: Option<&ClinicBranding>,
) -> Result<(), Error> {
    document_header(ctx, document, branding)?;
    let (size, line_spacing) = document.doc_type.typography();
    render_sections_into(ctx, &document.content, size, line_spacing)
}

/// Branded page header plus the document title block.
fn document_header<S: Surface>(
    ctx: &mut RenderContext<S>,
    document: &GeneratedDocument,
    branding: Option<&ClinicBranding>,
) -> Result<(), Error> {
    let clinic_name = branding.map_or("CLÍNICA VETERINÁRIA", |b| b.name.as_str());
    let subtitle = branding
        .and_then(|b| b.legal_name.as_deref())
        .unwrap_or("Medicina Veterinária Especializada");

    if let Some(logo) = branding.and_then(|b| b.logo.as_ref()) {
        let x = ctx.surface.page_width() - ctx.margins().right - logo.display_width;
        let y = ctx.cursor() - 12.0;
        ctx.surface.draw_logo(logo, x, y)?;
    }

    ctx.write_line(
        clinic_name,
        &TextStyle::bold(18.0).with_color(ACCENT),
        22.0,
    )?;
    ctx.write_line(
        subtitle,
        &TextStyle::regular(10.0).with_color(META_GRAY),
        14.0,
    )?;

    // Double rule separating letterhead from body.
    ctx.rule(1.0)?;
    ctx.advance(3.0);
    ctx.rule(0.3)?;
    ctx.advance(24.0);

    ctx.write_line(
        &document.title.to_uppercase(),
        &TextStyle::bold(16.0).with_color(ACCENT),
        22.0,
    )?;
    ctx.write_line(
        &format!(
            "Gerado em: {}",
            document.generated_at.format("%d/%m/%Y %H:%M")
        ),
        &TextStyle::regular(9.0).with_color(META_GRAY),
        14.0,
    )?;
    ctx.advance(10.0);
    Ok(())
}

/// Lay classified content out with the role styles of the document type's
/// typography preset.
pub fn render_sections_into<S: Surface>(
    ctx: &mut RenderContext<S>,
    content: &str,
    size: f32,
    line_spacing: f32,
) -> Result<(), Error> {
    let line_h = size * line_spacing;

    for section in classify_content(content) {
        match section.role {
            Role::Title => {
                let style = TextStyle::bold(size + 2.0).with_color(ACCENT);
                ctx.ensure_room((size + 2.0) * line_spacing + line_h)?;
                ctx.write_line(&section.text, &style, (size + 2.0) * line_spacing + 3.0)?;
            }
            Role::Subtitle => {
                let style = TextStyle::bold(size);
                ctx.ensure_room(line_h * 2.0)?;
                ctx.write_line(&section.text, &style, line_h + 2.0)?;
            }
            Role::ListItem => {
                let style = TextStyle::regular(size);
                let bullet = format!("• {}", section.text);
                let width = ctx.content_width() - 10.0;
                let lines = crate::layout::wrap_text(&ctx.surface, &bullet, &style, width);
                for (i, line) in lines.iter().enumerate() {
                    ctx.ensure_room(line_h)?;
                    // Continuation lines align under the item text.
                    let indent = if i == 0 { 0.0 } else { 10.0 };
                    ctx.surface
                        .draw_text(line, ctx.left() + indent, ctx.cursor(), &style)?;
                    ctx.advance(line_h);
                }
                ctx.advance(1.0);
            }
            Role::Content => {
                let style = TextStyle::regular(size);
                ctx.write_paragraph(&section.text, &style, line_h)?;
                ctx.advance(3.0);
            }
        }
    }
    Ok(())
}

/// Assemble a full consultation report: cover page, then every document on
/// its own page under a sequential numbered heading.
pub fn render_report_into<S: Surface>(
    ctx: &mut RenderContext<S>,
    documents: &[GeneratedDocument],
    branding: Option<&ClinicBranding>,
) -> Result<(), Error> {
    if documents.is_empty() {
        return Err(Error::EmptyReport);
    }

    cover_page(ctx, documents, branding)?;

    for (index, document) in documents.iter().enumerate() {
        ctx.break_page()?;

        let heading = format!("{}. {}", index + 1, document.title);
        ctx.write_line(&heading, &TextStyle::bold(14.0).with_color(ACCENT), 22.0)?;
        ctx.advance(4.0);

        let (size, line_spacing) = document.doc_type.typography();
        render_sections_into(ctx, &document.content, size, line_spacing)?;
    }

    Ok(())
}

fn cover_page<S: Surface>(
    ctx: &mut RenderContext<S>,
    documents: &[GeneratedDocument],
    branding: Option<&ClinicBranding>,
) -> Result<(), Error> {
    let clinic_name = branding.map_or("CLÍNICA VETERINÁRIA", |b| b.name.as_str());

    ctx.advance(80.0);
    ctx.write_centered(clinic_name, &TextStyle::bold(20.0).with_color(ACCENT), 30.0)?;
    ctx.advance(40.0);
    ctx.write_centered(
        "RELATÓRIO COMPLETO DA CONSULTA",
        &TextStyle::bold(18.0),
        26.0,
    )?;
    ctx.advance(30.0);

    let consultation_date = documents[0].generated_at.format("%d/%m/%Y");
    ctx.write_centered(
        &format!("Data da Consulta: {consultation_date}"),
        &TextStyle::regular(12.0),
        18.0,
    )?;
    ctx.write_centered(
        &format!("Total de Documentos: {}", documents.len()),
        &TextStyle::regular(12.0),
        18.0,
    )?;
    Ok(())
}
