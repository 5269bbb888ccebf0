//! Education entries from the education section.
//!
//! Parsing is a two-state machine driven one line at a time. An institution
//! line ("XYZ University, City") opens an entry; following lines fill in
//! degree, grades and years until the next institution line or the end of
//! the section closes it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::EducationEntry;
use crate::parser::cascade::compile;
use crate::parser::normalize::strip_bullet;

static INSTITUTION: Lazy<Regex> = Lazy::new(|| compile(r"(?i)university|institute|college|school"));
static DEGREE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)bachelor|master|ph\.?d|b\.tech|m\.tech|class|cbse"));
static GPA: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b[cs]?gpa\b\s*[:\-]?\s*(\d{1,2}(?:\.\d{1,2})?(?:\s*/\s*\d{1,2}(?:\.\d{1,2})?)?)")
});
static PERCENTAGE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{1,3}(?:\.\d{1,2})?)\s*%"));
static YEAR: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:19|20)\d{2}\b"));

/// Entry under construction plus every year seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationAccumulator {
    entry: EducationEntry,
    years: Vec<u16>,
}

impl EducationAccumulator {
    fn open(institution: &str, location: &str) -> Self {
        Self {
            entry: EducationEntry {
                institution: institution.trim().to_string(),
                location: location.trim().to_string(),
                ..Default::default()
            },
            years: Vec::new(),
        }
    }

    fn absorb(mut self, line: &str) -> Self {
        if DEGREE.is_match(line) {
            self.entry.degree = line.to_string();
        }
        if let Some(gpa) = GPA.captures(line).and_then(|c| c.get(1)) {
            self.entry.gpa = gpa.as_str().split_whitespace().collect();
        }
        if let Some(pct) = PERCENTAGE.captures(line).and_then(|c| c.get(1)) {
            self.entry.percentage = format!("{}%", pct.as_str());
        }
        self.years
            .extend(YEAR.find_iter(line).filter_map(|m| m.as_str().parse::<u16>().ok()));
        self.apply_years();
        self
    }

    /// Two or more years: earliest → start, latest → end.
    /// A single year only fills the start.
    fn apply_years(&mut self) {
        let (Some(min), Some(max)) = (self.years.iter().min(), self.years.iter().max()) else {
            return;
        };
        self.entry.start_year = min.to_string();
        if self.years.len() >= 2 {
            self.entry.end_year = max.to_string();
        }
    }

    fn finish(self) -> EducationEntry {
        self.entry
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EducationState {
    #[default]
    NoOpenEntry,
    OpenEntry(EducationAccumulator),
}

/// Result of feeding one line: the next state and, when an entry was closed
/// by this line, that entry.
pub fn transition(
    state: EducationState,
    line: &str,
) -> (EducationState, Option<EducationEntry>) {
    if let Some((institution, location)) = institution_line(line) {
        let closed = match state {
            EducationState::OpenEntry(acc) => Some(acc.finish()),
            EducationState::NoOpenEntry => None,
        };
        let opened = EducationAccumulator::open(institution, location);
        return (EducationState::OpenEntry(opened), closed);
    }

    match state {
        EducationState::OpenEntry(acc) => (EducationState::OpenEntry(acc.absorb(line)), None),
        // Lines before the first institution have nowhere to go.
        EducationState::NoOpenEntry => (EducationState::NoOpenEntry, None),
    }
}

/// Closes whatever is still open at the end of the section.
pub fn finish(state: EducationState) -> Option<EducationEntry> {
    match state {
        EducationState::OpenEntry(acc) => Some(acc.finish()),
        EducationState::NoOpenEntry => None,
    }
}

fn institution_line(line: &str) -> Option<(&str, &str)> {
    if !INSTITUTION.is_match(line) {
        return None;
    }
    line.split_once(',')
}

pub fn parse_education(section: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut state = EducationState::NoOpenEntry;

    for line in section.lines().map(strip_bullet).filter(|l| !l.is_empty()) {
        let (next, closed) = transition(state, line);
        entries.extend(closed);
        state = next;
    }
    entries.extend(finish(state));

    debug!(entries = entries.len(), "Parsed education");
    entries
}
