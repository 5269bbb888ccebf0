//! Section segmentation by header detection on the line-preserving text.

/// Lines at least this long are body text, not headers, even when they
/// mention a section keyword ("Built three projects using ...").
pub const HEADER_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
    Certifications,
    Awards,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Certifications,
        Section::Awards,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Certifications => "certifications",
            Section::Awards => "awards",
        }
    }
}

fn is_header_for(line: &str, keyword: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() < HEADER_MAX_LEN && trimmed.to_lowercase().contains(keyword)
}

/// Body of the named section: the non-empty lines after its header, up to
/// (not including) the next header of a different section. Empty when the
/// header is never found.
pub fn extract_section(text: &str, section_name: &str) -> String {
    let name = section_name.to_lowercase();
    let mut captured: Vec<&str> = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        if !capturing {
            capturing = is_header_for(line, &name);
            continue;
        }
        let starts_other_section = Section::ALL
            .iter()
            .map(|s| s.keyword())
            .filter(|kw| *kw != name)
            .any(|kw| is_header_for(line, kw));
        if starts_other_section {
            break;
        }
        if !line.trim().is_empty() {
            captured.push(line);
        }
    }

    captured.join("\n").trim().to_string()
}

pub fn section(text: &str, section: Section) -> String {
    extract_section(text, section.keyword())
}
