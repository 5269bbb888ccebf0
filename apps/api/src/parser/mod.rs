//! Resume parsing pipeline.
//!
//! extract → normalize → {identity, sections → section parsers} → assemble.
//! Every stage after extraction is best-effort: heuristic misses leave fields
//! empty and never fail the parse.

pub mod achievements;
pub mod cascade;
pub mod coding_stats;
pub mod education;
pub mod identity;
pub mod ner;
pub mod normalize;
pub mod projects;
pub mod sections;
pub mod skills;

use tracing::info;

use crate::errors::ParseError;
use crate::extract::extract;
use crate::models::{CodingProfiles, ParsedResume, RawDocument};
use crate::parser::ner::EntityRecognizer;
use crate::parser::normalize::ExtractedText;
use crate::parser::sections::{section, Section};

/// Parses a document with the process-wide entity recognizer.
pub fn parse(document: &RawDocument) -> Result<ParsedResume, ParseError> {
    parse_with(document, ner::recognizer())
}

pub fn parse_with(
    document: &RawDocument,
    ner: &dyn EntityRecognizer,
) -> Result<ParsedResume, ParseError> {
    let raw = extract(document)?;
    let resume = parse_text(raw, ner);
    info!(
        filename = %document.filename,
        name_found = !resume.first_name.is_empty(),
        skills = resume.all_skills.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        "Parsed resume"
    );
    Ok(resume)
}

/// Structured record from already-extracted text.
pub fn parse_text(raw: impl Into<String>, ner: &dyn EntityRecognizer) -> ParsedResume {
    let text = ExtractedText::new(raw);

    let identity = identity::extract_identity(&text, ner);
    let (first_name, last_name) = identity::split_name(identity.name.as_deref());

    let skills = skills::parse_skills(&section(&text.lines, Section::Skills), &text.lines);
    let education = education::parse_education(&section(&text.lines, Section::Education));
    let projects = projects::parse_projects(&section(&text.lines, Section::Projects));
    let achievements =
        achievements::parse_achievements(&section(&text.lines, Section::Achievements));
    let coding_stats = coding_stats::parse_coding_stats(&text.flat);

    let contact = identity.contact;
    ParsedResume {
        first_name,
        last_name,
        email: contact.email,
        phone: contact.phone,
        github: contact.github,
        linkedin: contact.linkedin,
        coding_profiles: CodingProfiles {
            codechef: contact.codechef,
            codeforces: contact.codeforces,
            leetcode: contact.leetcode,
        },
        skills: skills.categorized,
        all_skills: skills.all_skills,
        education,
        projects,
        achievements,
        coding_stats,
        raw_text: text.lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::docx::tests::build_docx;
    use crate::parser::ner::{Entity, RuleBasedRecognizer};

    struct NoEntities;

    impl EntityRecognizer for NoEntities {
        fn entities(&self, _text: &str) -> Vec<Entity> {
            Vec::new()
        }
    }

    const RESUME: &[&str] = &[
        "Priya Sharma",
        "Email: priya.sharma@example.com | Mobile: +91 98765 43210",
        "github.com/priyasharma | linkedin.com/in/priya-sharma",
        "leetcode.com/u/priya_lc",
        "Education",
        "• Delhi Technological University, New Delhi",
        "B.Tech in Computer Engineering",
        "CGPA: 9.1/10",
        "2019 - 2023",
        "Skills",
        "Languages: Rust, Python, TypeScript",
        "Frameworks: Axum, React",
        "Projects",
        "• ledger sync",
        "◦ Implemented a CRDT sync engine in Rust with Redis and react, React dashboard",
        "◦ https://github.com/priyasharma/ledger-sync",
        "Achievements",
        "ICPC Regionalist: Ranked 42nd in Amritapuri",
        "Solved 650+ problems on LeetCode, Max Rating: 2105",
    ];

    #[test]
    fn test_full_docx_resume() {
        let doc = RawDocument::new("priya.docx", build_docx(RESUME));
        let resume = parse_with(&doc, &NoEntities).unwrap();

        assert_eq!(resume.first_name, "Priya");
        assert_eq!(resume.last_name, "Sharma");
        assert_eq!(resume.email, "priya.sharma@example.com");
        assert_eq!(resume.phone, "+91 98765 43210");
        assert_eq!(resume.github, "github.com/priyasharma");
        assert_eq!(resume.linkedin, "linkedin.com/in/priya-sharma");
        assert_eq!(resume.coding_profiles.leetcode, "leetcode.com/u/priya_lc");
        assert_eq!(resume.coding_profiles.codechef, "");

        assert_eq!(
            resume.all_skills,
            vec!["Rust", "Python", "TypeScript", "Axum", "React"]
        );
        assert_eq!(resume.skills.len(), 2);

        assert_eq!(resume.education.len(), 1);
        let edu = &resume.education[0];
        assert_eq!(edu.institution, "Delhi Technological University");
        assert_eq!(edu.location, "New Delhi");
        assert_eq!(edu.gpa, "9.1/10");
        assert_eq!((edu.start_year.as_str(), edu.end_year.as_str()), ("2019", "2023"));

        assert_eq!(resume.projects.len(), 1);
        let project = &resume.projects[0];
        assert_eq!(project.name, "ledger sync");
        assert_eq!(project.url, "https://github.com/priyasharma/ledger-sync");
        assert_eq!(project.technologies, vec!["React", "Redis", "Rust"]);

        assert_eq!(resume.achievements.len(), 2);
        assert_eq!(resume.achievements[0].title, "ICPC Regionalist");
        assert_eq!(resume.coding_stats.problems_solved, Some(650));
        assert_eq!(
            resume.coding_stats.rating_info.as_deref(),
            Some("Max Rating: 2105")
        );
        assert!(resume.raw_text.starts_with("Priya Sharma\nEmail:"));
    }

    #[test]
    fn test_pdf_resume() {
        let bytes = crate::extract::pdf::tests::build_pdf(&["Jane Doe", "jane@example.com"]);
        let resume = parse_with(&RawDocument::new("jane.pdf", bytes), &NoEntities).unwrap();
        assert_eq!(resume.first_name, "Jane");
        assert_eq!(resume.last_name, "Doe");
        assert_eq!(resume.email, "jane@example.com");
        assert!(resume.raw_text.find("Jane Doe") < resume.raw_text.find("jane@example.com"));
    }

    #[test]
    fn test_section_boundaries_independent_of_order() {
        let text = "Skills\nLanguages: Python, Go\nEducation\nXYZ University, City";
        let resume = parse_text(text, &NoEntities);
        assert_eq!(resume.skills.get("Languages"), Some(&["Python".to_string(), "Go".to_string()][..]));
        assert_eq!(resume.skills.len(), 1);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].institution, "XYZ University");
        assert_eq!(resume.education[0].location, "City");
    }

    #[test]
    fn test_gibberish_degrades_to_empty_fields() {
        let doc = RawDocument::new("noise.docx", build_docx(&["qwr zx!! 9", "~~~~", "lorem"]));
        let resume = parse_with(&doc, &RuleBasedRecognizer::new()).unwrap();
        assert_eq!(resume.first_name, "");
        assert_eq!(resume.last_name, "");
        assert!(resume.skills.is_empty());
        assert!(resume.all_skills.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.achievements.is_empty());
        assert_eq!(resume.coding_stats, Default::default());
        assert_eq!(resume.email, "");
    }

    #[test]
    fn test_empty_document() {
        let doc = RawDocument::new("empty.docx", build_docx(&[]));
        let resume = parse_with(&doc, &NoEntities).unwrap();
        assert_eq!(resume.raw_text, "");
        assert_eq!(resume, ParsedResume::default());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let doc = RawDocument::new("priya.docx", build_docx(RESUME));
        let first = serde_json::to_vec(&parse(&doc).unwrap()).unwrap();
        let second = serde_json::to_vec(&parse(&doc).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_extension_passes_through() {
        let doc = RawDocument::new("resume.rtf", b"{\\rtf1}".to_vec());
        assert!(matches!(
            parse(&doc),
            Err(ParseError::UnsupportedFormat(ext)) if ext == "rtf"
        ));
    }

    #[test]
    fn test_corrupt_docx_is_parse_failure() {
        let doc = RawDocument::new("resume.docx", b"PK\x03\x04 truncated".to_vec());
        assert!(matches!(parse(&doc), Err(ParseError::ParseFailure(_))));
    }

    #[test]
    fn test_name_fallback_uses_recognizer() {
        let text = "CURRICULUM VITAE - 2024\nemail: a@b.io\nPrepared for review by Rahul Verma";
        let resume = parse_text(text, &RuleBasedRecognizer::new());
        assert_eq!(resume.first_name, "Rahul");
        assert_eq!(resume.last_name, "Verma");
    }
}
