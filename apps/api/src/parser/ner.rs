//! Named-entity recognition, used only as the fallback for candidate names.
//!
//! The recognizer is a process-wide, read-only model. It is created at most
//! once (`OnceCell` guarantees a single initialization even under concurrent
//! first calls) and shared by reference afterwards.

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use tracing::info;

use crate::parser::cascade::compile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// Black-box tagger. Implementations must be safe for concurrent read-only
/// inference.
pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Vec<Entity>;
}

static RECOGNIZER: OnceCell<Box<dyn EntityRecognizer>> = OnceCell::new();

/// The process-wide recognizer, loading the built-in model on first use.
pub fn recognizer() -> &'static dyn EntityRecognizer {
    RECOGNIZER
        .get_or_init(|| {
            info!("Loading rule-based entity recognizer");
            Box::new(RuleBasedRecognizer::new()) as Box<dyn EntityRecognizer>
        })
        .as_ref()
}

/// Replaces the built-in model. Only succeeds before the first call to
/// [`recognizer`]; afterwards the rejected model is handed back.
pub fn install_recognizer(
    model: Box<dyn EntityRecognizer>,
) -> Result<(), Box<dyn EntityRecognizer>> {
    RECOGNIZER.set(model)
}

/// 2–4 capitalized words on a single line.
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| compile(r"\b[A-Z][a-z][A-Za-z'-]*(?:[ \t]+[A-Z][a-z][A-Za-z'-]*){1,3}\b"));

const ORGANIZATION_HINTS: &[&str] = &[
    "university",
    "institute",
    "college",
    "school",
    "academy",
    "inc",
    "ltd",
    "llc",
    "corporation",
    "company",
    "technologies",
    "solutions",
    "labs",
    "foundation",
];

/// Tokens that never appear in a person's name on a resume.
const NON_PERSON_TOKENS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "project",
    "achievements",
    "certifications",
    "awards",
    "summary",
    "objective",
    "profile",
    "contact",
    "email",
    "phone",
    "mobile",
    "address",
    "github",
    "linkedin",
    "resume",
    "curriculum",
    "vitae",
    "languages",
    "frameworks",
    "tools",
    "platforms",
    "databases",
    "soft",
    "technical",
    "bachelor",
    "master",
    "science",
    "engineering",
    "computer",
    "software",
    "developer",
    "engineer",
    "intern",
    "internship",
    "present",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "data",
    "structures",
    "algorithms",
    "machine",
    "learning",
    "web",
    "development",
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "the",
    "and",
];

/// Gazetteer-style tagger: capitalized word runs, classified by vocabulary.
#[derive(Debug, Default)]
pub struct RuleBasedRecognizer;

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn classify(span: &str) -> EntityLabel {
        let tokens: Vec<String> = span
            .split_whitespace()
            .map(|t| t.trim_end_matches('.').to_lowercase())
            .collect();
        if tokens
            .iter()
            .any(|t| ORGANIZATION_HINTS.contains(&t.as_str()))
        {
            EntityLabel::Organization
        } else if tokens.iter().any(|t| NON_PERSON_TOKENS.contains(&t.as_str())) {
            EntityLabel::Other
        } else {
            EntityLabel::Person
        }
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        CAPITALIZED_RUN
            .find_iter(text)
            .map(|m| Entity {
                text: m.as_str().to_string(),
                label: Self::classify(m.as_str()),
            })
            .collect()
    }
}
