//! Rendering surface abstraction.
//!
//! Layout code talks to a narrow capability interface — measure, draw,
//! new page, finish — so the algorithms stay independent of the PDF backend
//! and are unit-testable with a fake surface. The shipped backend is
//! [`PdfSurface`] on top of `pdf-writer`.
//!
//! All Y coordinates in this interface are measured from the TOP of the page
//! (cursor semantics); `PdfSurface` converts to PDF's bottom-left origin
//! internally.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts;
use crate::model::Logo;

pub use crate::fonts::FontVariant;

/// Typography for a single draw call.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub variant: FontVariant,
    pub size: f32,
    /// RGB fill color; `None` means black.
    pub color: Option<[u8; 3]>,
}

impl TextStyle {
    pub fn new(variant: FontVariant, size: f32) -> Self {
        Self {
            variant,
            size,
            color: None,
        }
    }

    pub fn regular(size: f32) -> Self {
        Self::new(FontVariant::Regular, size)
    }

    pub fn bold(size: f32) -> Self {
        Self::new(FontVariant::Bold, size)
    }

    pub fn italic(size: f32) -> Self {
        Self::new(FontVariant::Oblique, size)
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }
}

/// Drawing backend for one render invocation. Exclusively owned by that
/// invocation; concurrent renders must each construct their own surface.
pub trait Surface {
    fn page_width(&self) -> f32;
    fn page_height(&self) -> f32;

    /// Pages produced so far (new_page calls + 1).
    fn page_count(&self) -> usize;

    /// Width of `text` in points when drawn with `style`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;

    /// Draw `text` with its baseline at `y` points from the top edge.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<(), Error>;

    /// Horizontal rule from `x1` to `x2` at `y` points from the top edge.
    fn draw_rule(
        &mut self,
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Option<[u8; 3]>,
    ) -> Result<(), Error>;

    /// Draw a branding logo with its top-left corner at (`x`, `y` from top).
    fn draw_logo(&mut self, logo: &Logo, x: f32, y: f32) -> Result<(), Error>;

    fn new_page(&mut self) -> Result<(), Error>;

    /// Serialize the finished document. Consumes the surface: no partial
    /// output exists before this call and none survives a failure.
    fn finish(self) -> Result<Vec<u8>, Error>
    where
        Self: Sized;
}

// A4 in PostScript points.
const A4_WIDTH: f32 = 595.28;
const A4_HEIGHT: f32 = 841.89;

/// `pdf-writer` backed surface. One content stream per page; streams are
/// Flate-compressed and the page tree is assembled at finish time.
pub struct PdfSurface {
    pdf: Pdf,
    next_id: i32,
    page_width: f32,
    page_height: f32,
    done_pages: Vec<Content>,
    current: Content,
    logo_xobjects: Vec<(String, Ref)>,
}

impl PdfSurface {
    pub fn a4() -> Self {
        Self::with_page_size(A4_WIDTH, A4_HEIGHT)
    }

    pub fn with_page_size(width: f32, height: f32) -> Self {
        Self {
            pdf: Pdf::new(),
            next_id: 1,
            page_width: width,
            page_height: height,
            done_pages: Vec::new(),
            current: Content::new(),
            logo_xobjects: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    /// Embed a PNG logo as an image XObject, with an alpha SMask when the
    /// image carries transparency.
    fn embed_logo(&mut self, logo: &Logo) -> Result<String, Error> {
        let cursor = std::io::Cursor::new(&logo.png_data);
        let reader =
            image::ImageReader::with_format(std::io::BufReader::new(cursor), image::ImageFormat::Png);
        let decoded = reader
            .decode()
            .map_err(|e| Error::Surface(format!("logo PNG decode failed: {e}")))?;
        let rgba: image::RgbaImage = decoded.to_rgba8();
        let (w, h) = (rgba.width(), rgba.height());
        let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

        let rgb_data: Vec<u8> = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
        let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

        let smask_ref = if has_alpha {
            let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
            let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
            let mask_ref = self.alloc();
            let mut mask = self.pdf.image_xobject(mask_ref, &compressed_alpha);
            mask.filter(Filter::FlateDecode);
            mask.width(w as i32);
            mask.height(h as i32);
            mask.color_space().device_gray();
            mask.bits_per_component(8);
            Some(mask_ref)
        } else {
            None
        };

        let xobj_ref = self.alloc();
        let mut xobj = self.pdf.image_xobject(xobj_ref, &compressed_rgb);
        xobj.filter(Filter::FlateDecode);
        xobj.width(w as i32);
        xobj.height(h as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        if let Some(mask_ref) = smask_ref {
            xobj.s_mask(mask_ref);
        }
        drop(xobj);

        let pdf_name = format!("Im{}", self.logo_xobjects.len() + 1);
        self.logo_xobjects.push((pdf_name.clone(), xobj_ref));
        Ok(pdf_name)
    }
}

impl Surface for PdfSurface {
    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn page_height(&self) -> f32 {
        self.page_height
    }

    fn page_count(&self) -> usize {
        self.done_pages.len() + 1
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        fonts::text_width(text, style.variant, style.size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<(), Error> {
        let bytes = fonts::to_winansi_bytes(text);
        if bytes.is_empty() {
            return Ok(());
        }
        let baseline = self.page_height - y;
        self.current.begin_text();
        if let Some([r, g, b]) = style.color {
            self.current
                .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        }
        self.current
            .set_font(Name(style.variant.resource_name().as_bytes()), style.size)
            .next_line(x, baseline)
            .show(Str(&bytes))
            .end_text();
        if style.color.is_some() {
            self.current.set_fill_gray(0.0);
        }
        Ok(())
    }

    fn draw_rule(
        &mut self,
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Option<[u8; 3]>,
    ) -> Result<(), Error> {
        let pdf_y = self.page_height - y;
        self.current.save_state();
        self.current.set_line_width(thickness);
        if let Some([r, g, b]) = color {
            self.current
                .set_stroke_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        }
        self.current.move_to(x1, pdf_y);
        self.current.line_to(x2, pdf_y);
        self.current.stroke();
        self.current.restore_state();
        Ok(())
    }

    fn draw_logo(&mut self, logo: &Logo, x: f32, y: f32) -> Result<(), Error> {
        let pdf_name = self.embed_logo(logo)?;
        let y_bottom = self.page_height - y - logo.display_height;
        self.current.save_state();
        self.current.transform([
            logo.display_width,
            0.0,
            0.0,
            logo.display_height,
            x,
            y_bottom,
        ]);
        self.current.x_object(Name(pdf_name.as_bytes()));
        self.current.restore_state();
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), Error> {
        self.done_pages
            .push(std::mem::replace(&mut self.current, Content::new()));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, Error> {
        self.done_pages.push(self.current);
        let all_contents = std::mem::take(&mut self.done_pages);

        let mut next_id = self.next_id;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let font_pairs = fonts::register_fonts(&mut self.pdf, &mut alloc);

        let n = all_contents.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, c) in all_contents.into_iter().enumerate() {
            let raw = c.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            self.pdf
                .stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        self.pdf.catalog(catalog_id).pages(pages_id);
        self.pdf
            .pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for i in 0..n {
            let mut page = self.pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            {
                let mut f = resources.fonts();
                for (name, font_ref) in &font_pairs {
                    f.pair(Name(name.as_bytes()), *font_ref);
                }
            }
            if !self.logo_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &self.logo_xobjects {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
        }

        Ok(self.pdf.finish())
    }
}
