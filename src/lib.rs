//! Paginated PDF rendering for a veterinary clinic portal.
//!
//! Three entry points, all producing complete PDF byte vectors:
//!
//! - [`render_clinical_record`]: the full "ficha clínica" form, with
//!   underscore placeholders reserving writing space for absent values.
//! - [`render_document`]: one generated document (summary, prescription,
//!   exam requests, referral) with a branded header and classified layout.
//! - [`render_report`]: a consultation report bundling several generated
//!   documents behind a cover page, one document per page start.
//!
//! Rendering is pure: inputs arrive fully materialized, output is a byte
//! vector, and nothing touches the filesystem or network.

pub mod classify;
mod error;
pub mod ficha;
mod fonts;
pub mod layout;
pub mod model;
pub mod report;
pub mod surface;

pub use error::Error;

use std::time::Instant;

use chrono::Utc;

use layout::{FooterInfo, Margins, RenderContext};
use model::{ClinicalRecord, GeneratedDocument, RenderOptions};
use surface::{PdfSurface, Surface};

/// Render the complete clinical record form to PDF bytes.
pub fn render_clinical_record(
    record: &ClinicalRecord,
    options: &RenderOptions,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let footer = FooterInfo {
        generated_at: Utc::now(),
        document_id: record.id.clone(),
        clinic: clinic_line(options),
    };
    let mut ctx = RenderContext::new(PdfSurface::a4(), Margins::default(), Some(footer));
    ficha::render_record_into(&mut ctx, record, options)?;
    let pages = ctx.surface.page_count();
    let bytes = ctx.finish()?;

    log::info!(
        "Timing: record render={:.1}ms ({} pages, {} bytes)",
        t0.elapsed().as_secs_f64() * 1000.0,
        pages,
        bytes.len(),
    );
    Ok(bytes)
}

/// Render a single generated document to PDF bytes.
pub fn render_document(
    document: &GeneratedDocument,
    options: &RenderOptions,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let footer = FooterInfo {
        generated_at: document.generated_at,
        document_id: document.id.clone(),
        clinic: clinic_line(options),
    };
    let mut ctx = RenderContext::new(PdfSurface::a4(), Margins::default(), Some(footer));
    report::render_document_into(&mut ctx, document, options.branding.as_ref())?;
    let pages = ctx.surface.page_count();
    let bytes = ctx.finish()?;

    log::info!(
        "Timing: document render={:.1}ms ({} pages, {} bytes)",
        t0.elapsed().as_secs_f64() * 1000.0,
        pages,
        bytes.len(),
    );
    Ok(bytes)
}

/// Render a full consultation report to PDF bytes. Fails on an empty
/// document list.
pub fn render_report(
    documents: &[GeneratedDocument],
    options: &RenderOptions,
) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let footer = documents.first().map(|first| FooterInfo {
        generated_at: first.generated_at,
        document_id: first.id.clone(),
        clinic: clinic_line(options),
    });
    let mut ctx = RenderContext::new(PdfSurface::a4(), Margins::default(), footer);
    report::render_report_into(&mut ctx, documents, options.branding.as_ref())?;
    let pages = ctx.surface.page_count();
    let bytes = ctx.finish()?;

    log::info!(
        "Timing: report render={:.1}ms ({} documents, {} pages, {} bytes)",
        t0.elapsed().as_secs_f64() * 1000.0,
        documents.len(),
        pages,
        bytes.len(),
    );
    Ok(bytes)
}

/// Footer clinic line: name plus phone when branding was supplied.
fn clinic_line(options: &RenderOptions) -> Option<String> {
    options.branding.as_ref().map(|b| match &b.phone {
        Some(phone) => format!("{} - {}", b.name, phone),
        None => b.name.clone(),
    })
}

/// Download file name for a single generated document:
/// `<title-slug>-<date>-<time>.pdf` from its generation timestamp.
pub fn document_file_name(document: &GeneratedDocument) -> String {
    format!(
        "{}-{}.pdf",
        slug(&document.title),
        document.generated_at.format("%Y-%m-%d-%H-%M-%S")
    )
}

/// Download file name for a consultation report, dated from its first
/// document.
pub fn report_file_name(documents: &[GeneratedDocument]) -> Result<String, Error> {
    let first = documents.first().ok_or(Error::EmptyReport)?;
    Ok(format!(
        "relatorio-consulta-{}.pdf",
        first.generated_at.format("%Y-%m-%d")
    ))
}

/// Download file name for a clinical record form, using the animal's name
/// when present and today's date.
pub fn record_file_name(record: &ClinicalRecord) -> String {
    let animal = record
        .animal
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| "animal".to_string(), slug);
    format!("ficha-clinica-{}-{}.pdf", animal, Utc::now().format("%Y-%m-%d"))
}

/// Lowercase slug: alphanumeric runs kept, everything else collapsed to a
/// single hyphen, trimmed, capped at 30 chars.
fn slug(text: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
        if out.len() >= 30 {
            break;
        }
    }
    out.truncate(30);
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("documento");
    }
    out
}
