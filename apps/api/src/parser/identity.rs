//! Candidate name and contact fields.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::ContactInfo;
use crate::parser::cascade::{compile, whole_match, Cascade, Rule};
use crate::parser::ner::{EntityLabel, EntityRecognizer};
use crate::parser::normalize::ExtractedText;

/// Only the top of the document is searched for a name line.
const NAME_SCAN_LINES: usize = 3;

/// A line containing any of these is contact/header text, never a name.
const NAME_LINE_EXCLUSIONS: &[&str] = &[
    "mobile:",
    "email:",
    "phone:",
    "education",
    "experience",
    "skills",
    "@",
    "github",
    "linkedin",
];

static EMAIL: Lazy<Regex> = Lazy::new(|| compile(r"[\w.-]+@[\w.-]+\.\w+"));

static PHONE: Lazy<Cascade<String>> = Lazy::new(|| {
    Cascade::new(vec![
        Rule {
            name: "indian_mobile",
            pattern: compile(r"\+91[\s-]?\d{5}[\s-]?\d{5}\b"),
            extract: whole_match,
        },
        // Area code and country code are optional, so local `555-1234` numbers
        // qualify. Both digit groups sit on word boundaries, which keeps year
        // ranges like `2018 - 2022` out.
        Rule {
            name: "international",
            pattern: compile(
                r"(?:\+\d{1,3}[\s.-]?)?(?:(?:\(\d{3}\)|\b\d{3})[\s.-]?)?\b\d{3}[\s.-]?\d{4}\b",
            ),
            extract: whole_match,
        },
    ])
});

static GITHUB: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+"));
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/[A-Za-z0-9_%-]+"));
static CODECHEF: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?codechef\.com/users/[A-Za-z0-9_]+"));
static CODEFORCES: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?codeforces\.com/profile/[A-Za-z0-9_.-]+"));
static LEETCODE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:https?://)?(?:www\.)?leetcode\.com/(?:u/)?[A-Za-z0-9_-]+"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub contact: ContactInfo,
}

pub fn extract_identity(text: &ExtractedText, ner: &dyn EntityRecognizer) -> Identity {
    let name = name_from_header_lines(&text.lines).or_else(|| name_from_entities(&text.lines, ner));
    let contact = extract_contact(&text.flat);
    debug!(found_name = name.is_some(), "Extracted identity");
    Identity { name, contact }
}

/// Splits a full name into `(first, last)`; everything after the first token
/// is the last name.
pub fn split_name(name: Option<&str>) -> (String, String) {
    let mut tokens = name.unwrap_or_default().split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

fn name_from_header_lines(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .filter(|line| {
            let lower = line.to_lowercase();
            !NAME_LINE_EXCLUSIONS.iter().any(|kw| lower.contains(kw))
        })
        .find(|line| looks_like_name(line))
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn looks_like_name(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&tokens.len())
        && tokens.iter().all(|token| {
            let word = token.trim_end_matches('.');
            !word.is_empty() && word.chars().all(char::is_alphabetic)
        })
}

fn name_from_entities(text: &str, ner: &dyn EntityRecognizer) -> Option<String> {
    ner.entities(text)
        .into_iter()
        .find(|e| e.label == EntityLabel::Person && e.text.split_whitespace().count() >= 2)
        .map(|e| e.text)
}

pub fn extract_contact(flat: &str) -> ContactInfo {
    ContactInfo {
        email: first_or_empty(&EMAIL, flat),
        phone: PHONE.first_match(flat).unwrap_or_default(),
        github: first_or_empty(&GITHUB, flat),
        linkedin: first_or_empty(&LINKEDIN, flat),
        codechef: first_or_empty(&CODECHEF, flat),
        codeforces: first_or_empty(&CODEFORCES, flat),
        leetcode: first_or_empty(&LEETCODE, flat),
    }
}

fn first_or_empty(re: &Regex, text: &str) -> String {
    whole_match(re, text).unwrap_or_default()
}
