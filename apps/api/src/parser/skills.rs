use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::SkillsInfo;
use crate::parser::cascade::compile;
use crate::parser::normalize::title_case;

/// Category labels searched for, in output order.
const CATEGORIES: &[&str] = &[
    "languages",
    "frameworks",
    "tools",
    "platforms",
    "databases",
    "soft skills",
];

/// `<category>[:\s]+<rest of line up to the next bullet>`, one per category.
/// The separator may span a line break, so a bare `Languages:` header picks
/// up the line below it.
static CATEGORY_PATTERNS: Lazy<Vec<(String, Regex)>> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .map(|category| {
            let pattern = format!(r"(?i){}[:\s]+([^\n•]+)", regex::escape(category));
            (title_case(category), compile(&pattern))
        })
        .collect()
});

/// Categorized skills from the skills section, or from `full_text` when the
/// section is empty.
pub fn parse_skills(section: &str, full_text: &str) -> SkillsInfo {
    let source = if section.trim().is_empty() {
        full_text
    } else {
        section
    };

    let mut info = SkillsInfo::default();
    for (category, re) in CATEGORY_PATTERNS.iter() {
        let Some(rest) = re.captures(source).and_then(|c| c.get(1)) else {
            continue;
        };
        let skills: Vec<String> = rest
            .as_str()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if skills.is_empty() {
            continue;
        }
        info.all_skills.extend(skills.iter().cloned());
        info.categorized.insert(category.as_str(), skills);
    }

    debug!(
        categories = info.categorized.len(),
        skills = info.all_skills.len(),
        "Parsed skills"
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_category() {
        let info = parse_skills("Languages: Python, Go", "");
        assert_eq!(info.categorized.get("Languages"), Some(&strings(&["Python", "Go"])[..]));
        assert_eq!(info.categorized.len(), 1);
        assert_eq!(info.all_skills, strings(&["Python", "Go"]));
    }

    #[test]
    fn test_categories_follow_fixed_order_and_keep_duplicates() {
        let section = "Tools: Git, Docker\nProgramming Languages: Rust , Python,\nPlatforms:  Linux, Docker\nDatabases:";
        let info = parse_skills(section, "");
        let order: Vec<&str> = info.categorized.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Languages", "Tools", "Platforms"]);
        assert_eq!(
            info.all_skills,
            strings(&["Rust", "Python", "Git", "Docker", "Linux", "Docker"])
        );
    }

    #[test]
    fn test_stops_at_bullet() {
        let info = parse_skills("Frameworks: React, Django • Tools: Git", "");
        assert_eq!(
            info.categorized.get("Frameworks"),
            Some(&strings(&["React", "Django"])[..])
        );
        assert_eq!(info.categorized.get("Tools"), Some(&strings(&["Git"])[..]));
    }

    #[test]
    fn test_header_on_own_line() {
        let info = parse_skills("Languages:\nPython, Go", "");
        assert_eq!(info.categorized.get("Languages"), Some(&strings(&["Python", "Go"])[..]));
        assert_eq!(info.all_skills, strings(&["Python", "Go"]));
    }

    #[test]
    fn test_soft_skills_title_cased() {
        let info = parse_skills("soft skills: Leadership, Communication", "");
        assert_eq!(
            info.categorized.get("Soft Skills"),
            Some(&strings(&["Leadership", "Communication"])[..])
        );
    }

    #[test]
    fn test_falls_back_to_full_text() {
        let full = "Jane Doe\nLanguages: C++, Java\nInterests: chess";
        let info = parse_skills("", full);
        assert_eq!(info.categorized.get("Languages"), Some(&strings(&["C++", "Java"])[..]));
    }

    #[test]
    fn test_nothing_found_is_empty() {
        let info = parse_skills("", "just some prose");
        assert!(info.categorized.is_empty());
        assert!(info.all_skills.is_empty());
    }

    #[test]
    fn test_every_flattened_skill_belongs_to_a_category() {
        let info = parse_skills("Languages: Go\nDatabases: Postgres, Redis", "");
        for skill in &info.all_skills {
            assert!(info.categorized.iter().any(|(_, list)| list.contains(skill)));
        }
    }
}
