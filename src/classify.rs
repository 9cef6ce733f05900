//! Structural classification of generated free text.
//!
//! Upstream document generation produces plain text with title-like lines,
//! subtitles, bullets, and paragraphs mixed together. Each logical line is
//! tagged with a role by an ordered rule list; first match wins. The rules
//! are deliberately simple pattern heuristics, not NLP: a short line of
//! legitimate uppercase clinical abbreviations will classify as a title, and
//! that behavior is kept as-is.

use std::sync::LazyLock;

use regex::Regex;

/// Uppercase letters (incl. Portuguese accented forms) and spaces, optional
/// trailing colon.
static UPPER_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-ZÁÂÃÀÉÊÍÓÔÕÚÜÇ\s]+:?$").unwrap());
static BOLD_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*.*\*\*$").unwrap());
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+").unwrap());
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").unwrap());

const SUBTITLE_MAX_CHARS: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Title,
    Subtitle,
    ListItem,
    Content,
}

/// One classified line: its structural role and the text with any role
/// markers (bold pair, bullet prefix, title colon) stripped.
#[derive(Clone, Debug, PartialEq)]
pub struct Classified {
    pub role: Role,
    pub text: String,
}

/// Classify a single logical line. Pure: the same line always yields the
/// same role.
pub fn classify_line(line: &str) -> Classified {
    let line = line.trim();

    if UPPER_TITLE.is_match(line) || BOLD_TITLE.is_match(line) {
        let text = line
            .replace("**", "")
            .trim_end_matches(':')
            .trim()
            .to_string();
        return Classified {
            role: Role::Title,
            text,
        };
    }

    if line.ends_with(':') && line.chars().count() < SUBTITLE_MAX_CHARS {
        return Classified {
            role: Role::Subtitle,
            text: line.to_string(),
        };
    }

    if let Some(m) = BULLET_ITEM.find(line).or_else(|| NUMBERED_ITEM.find(line)) {
        return Classified {
            role: Role::ListItem,
            text: line[m.end()..].to_string(),
        };
    }

    Classified {
        role: Role::Content,
        text: line.to_string(),
    }
}

/// Classify a whole content block, skipping blank lines.
pub fn classify_content(content: &str) -> Vec<Classified> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}
