use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::errors::ParseError;

/// Upload as received from the caller: raw bytes plus the original filename,
/// which is only used for extension sniffing.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Lower-cased suffix after the last `.`; empty when there is none.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    pub fn format(&self) -> Result<DocumentFormat, ParseError> {
        match self.extension().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Contact fields. An empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub codechef: String,
    pub codeforces: String,
    pub leetcode: String,
}

/// Category name → skills, kept in category-iteration order.
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedSkills(Vec<(String, Vec<String>)>);

impl CategorizedSkills {
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = skills,
            None => self.0.push((category, skills)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategorizedSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsInfo {
    pub categorized: CategorizedSkills,
    /// Concatenation of every category list, in category order.
    pub all_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub gpa: String,
    pub percentage: String,
    pub start_year: String,
    pub end_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub url: String,
    /// Title-cased, case-insensitively unique, sorted.
    pub technologies: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AchievementEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodingStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems_solved: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodingProfiles {
    pub codechef: String,
    pub codeforces: String,
    pub leetcode: String,
}

/// Terminal aggregate of one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub coding_profiles: CodingProfiles,
    pub skills: CategorizedSkills,
    pub all_skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub coding_stats: CodingStats,
    pub raw_text: String,
}
