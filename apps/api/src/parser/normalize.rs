//! Two views of the extracted text.
//!
//! Section detection depends on line boundaries, contact regexes do not, so
//! the pipeline carries both renditions side by side instead of a single
//! normalized string.

/// Collapses every whitespace run (newlines included) into one space and
/// trims both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Line-preserving raw text, used for segmentation and section parsing.
    pub lines: String,
    /// Whitespace-collapsed text, used for contact regexes.
    pub flat: String,
}

impl ExtractedText {
    pub fn new(raw: impl Into<String>) -> Self {
        let lines = raw.into();
        let flat = normalize(&lines);
        Self { lines, flat }
    }
}

/// Glyphs resumes use to start list items.
const BULLETS: &[char] = &['•', '◦', '▪', '●', '‣', '-', '*', '–'];

/// Trims a line and drops one leading bullet glyph.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(BULLETS)
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest: `node.js` → `Node.Js`, `soft skills` → `Soft Skills`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
