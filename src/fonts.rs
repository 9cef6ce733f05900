//! Base-14 Helvetica metrics and WinAnsi encoding.
//!
//! The engine renders with the four standard Helvetica variants only, so no
//! font files are parsed or embedded: widths come from the Adobe AFM tables
//! compiled in below, and text is encoded as WinAnsi bytes for Type1 fonts.

use pdf_writer::{Name, Pdf, Ref};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl FontVariant {
    pub(crate) fn base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Oblique => "Helvetica-Oblique",
            FontVariant::BoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// PDF resource name used in content streams.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
            FontVariant::Oblique => "F3",
            FontVariant::BoldOblique => "F4",
        }
    }

    pub(crate) const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Oblique,
        FontVariant::BoldOblique,
    ];
}

/// Helvetica AFM widths (1000 units/em) for chars 32..=126.
/// The oblique variants share these tables.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    278.0, 278.0, 355.0, 556.0, 556.0, 889.0, 667.0, 191.0, // ' '!"#$%&'
    333.0, 333.0, 389.0, 584.0, 278.0, 333.0, 278.0, 278.0, // ()*+,-./
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, // 0-7
    556.0, 556.0, 278.0, 278.0, 584.0, 584.0, 584.0, 556.0, // 89:;<=>?
    1015.0, 667.0, 667.0, 722.0, 722.0, 667.0, 611.0, 778.0, // @A-G
    722.0, 278.0, 500.0, 667.0, 556.0, 833.0, 722.0, 778.0, // H-O
    667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, // P-W
    667.0, 667.0, 611.0, 278.0, 278.0, 278.0, 469.0, 556.0, // XYZ[\]^_
    333.0, 556.0, 556.0, 500.0, 556.0, 556.0, 278.0, 556.0, // `a-g
    556.0, 222.0, 222.0, 500.0, 222.0, 833.0, 556.0, 556.0, // h-o
    556.0, 556.0, 333.0, 500.0, 278.0, 556.0, 500.0, 722.0, // p-w
    500.0, 500.0, 500.0, 334.0, 260.0, 334.0, 584.0,        // xyz{|}~
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [f32; 95] = [
    278.0, 333.0, 474.0, 556.0, 556.0, 889.0, 722.0, 238.0, // ' '!"#$%&'
    333.0, 333.0, 389.0, 584.0, 278.0, 333.0, 278.0, 278.0, // ()*+,-./
    556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, 556.0, // 0-7
    556.0, 556.0, 333.0, 333.0, 584.0, 584.0, 584.0, 611.0, // 89:;<=>?
    975.0, 722.0, 722.0, 722.0, 722.0, 667.0, 611.0, 778.0, // @A-G
    722.0, 278.0, 556.0, 722.0, 611.0, 833.0, 722.0, 778.0, // H-O
    667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, // P-W
    667.0, 667.0, 611.0, 333.0, 278.0, 333.0, 584.0, 556.0, // XYZ[\]^_
    333.0, 556.0, 611.0, 556.0, 611.0, 556.0, 333.0, 611.0, // `a-g
    611.0, 278.0, 278.0, 556.0, 278.0, 889.0, 611.0, 611.0, // h-o
    611.0, 611.0, 389.0, 556.0, 333.0, 611.0, 556.0, 778.0, // p-w
    556.0, 556.0, 500.0, 389.0, 280.0, 389.0, 584.0,        // xyz{|}~
];

/// Fold a Latin-1 letter to its unaccented base so accented Portuguese text
/// measures with the base letter's advance (true for the Helvetica AFMs).
fn fold_accent(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Advance width of one char at 1000 units/em.
pub(crate) fn char_width_1000(c: char, variant: FontVariant) -> f32 {
    let table: &[f32; 95] = match variant {
        FontVariant::Regular | FontVariant::Oblique => &HELVETICA_WIDTHS,
        FontVariant::Bold | FontVariant::BoldOblique => &HELVETICA_BOLD_WIDTHS,
    };
    let c = fold_accent(c);
    match c {
        ' '..='~' => table[c as usize - 32],
        'Æ' => 1000.0,
        'æ' => 889.0,
        '°' => 400.0,
        '•' => 350.0,
        '–' => 556.0,
        '—' => 1000.0,
        // Unmappable chars are dropped by the WinAnsi encoder, so they
        // contribute no advance either.
        _ if to_winansi_byte(c).is_none() => 0.0,
        _ => table['o' as usize - 32],
    }
}

/// Measured width of a string in points.
pub(crate) fn text_width(text: &str, variant: FontVariant, size: f32) -> f32 {
    text.chars()
        .map(|c| char_width_1000(c, variant) * size / 1000.0)
        .sum()
}

/// Map a single Unicode char to its WinAnsi (Windows-1252) byte.
fn to_winansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x0020..=0x007F => Some(c as u8),
        0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95), // bullet
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

/// Convert a UTF-8 string to WinAnsi bytes for PDF Str encoding.
/// Unmappable chars are dropped (they also measure as zero width).
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars().filter_map(to_winansi_byte).collect()
}

/// Register the four Helvetica variants as Type1 fonts with WinAnsiEncoding.
/// Returns (resource name, object ref) pairs for the page resource dicts.
pub(crate) fn register_fonts(
    pdf: &mut Pdf,
    alloc: &mut impl FnMut() -> Ref,
) -> Vec<(&'static str, Ref)> {
    FontVariant::ALL
        .iter()
        .map(|&variant| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(variant.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (variant.resource_name(), font_ref)
        })
        .collect()
}
