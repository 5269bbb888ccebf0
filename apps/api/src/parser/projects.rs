//! Project entries from the projects section.
//!
//! Same two-state shape as the education parser: a short title line opens a
//! project, everything else is description for the open project.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::ProjectEntry;
use crate::parser::cascade::compile;
use crate::parser::normalize::title_case;

/// Longer lines read as sentences rather than project titles.
pub const TITLE_MAX_WORDS: usize = 5;

const ACTION_VERBS: &[&str] = &["developed", "implemented", "built", "created", "designed"];

const TECHNOLOGIES: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "c#", "golang", "rust", "kotlin",
    "swift", "ruby", "php", "scala", "dart", "html", "css", "sass", "tailwind", "bootstrap",
    "react", "react native", "next.js", "angular", "vue", "svelte", "redux", "node.js",
    "express.js", "django", "flask", "fastapi", "spring boot", "laravel", "rails",
    "flutter", "graphql", "rest api", "restful", "mongodb", "mysql", "postgresql", "sqlite",
    "redis", "firebase", "supabase", "sql", "nosql", "aws", "gcp", "azure", "docker", "kubernetes",
    "jenkins", "terraform", "git", "linux", "nginx", "kafka", "rabbitmq", "tensorflow",
    "pytorch", "keras", "scikit-learn", "pandas", "numpy", "opencv", "langchain",
    "machine learning", "deep learning", "nlp", "socket.io", "webrtc", "solidity",
    "blockchain",
];

/// One matcher per vocabulary entry. Word boundaries are only asserted on
/// sides that start/end with a word character, so `c++` and `node.js` match.
static TECH_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TECHNOLOGIES
        .iter()
        .map(|tech| {
            let starts_word = tech.chars().next().is_some_and(|c| c.is_alphanumeric());
            let ends_word = tech.chars().last().is_some_and(|c| c.is_alphanumeric());
            let pattern = format!(
                r"(?i){}{}{}",
                if starts_word { r"\b" } else { "" },
                regex::escape(tech),
                if ends_word { r"\b" } else { r"(?:\W|$)" },
            );
            (*tech, compile(&pattern))
        })
        .collect()
});

static GITHUB_URL: Lazy<Regex> = Lazy::new(|| compile(r"https://github\.com/[\w.\-/]+"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectAccumulator {
    name: String,
    url: String,
    technologies: Vec<String>,
    description: Vec<String>,
}

impl ProjectAccumulator {
    fn open(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn absorb(mut self, line: &str) -> Self {
        if self.url.is_empty() {
            if let Some(m) = GITHUB_URL.find(line) {
                self.url = m.as_str().trim_end_matches(['.', '/']).to_string();
            }
        }
        self.technologies.extend(technologies_in(line));
        self.description.push(line.to_string());
        self
    }

    fn finish(self) -> ProjectEntry {
        let mut seen = BTreeSet::new();
        for tech in &self.technologies {
            seen.insert(title_case(tech));
        }
        ProjectEntry {
            name: self.name,
            url: self.url,
            technologies: seen.into_iter().collect(),
            description: self.description.join(" "),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectState {
    #[default]
    NoOpenEntry,
    OpenEntry(ProjectAccumulator),
}

pub fn transition(state: ProjectState, line: &str) -> (ProjectState, Option<ProjectEntry>) {
    if is_title(line) {
        let closed = finish(state);
        return (ProjectState::OpenEntry(ProjectAccumulator::open(line)), closed);
    }
    match state {
        ProjectState::OpenEntry(acc) => (ProjectState::OpenEntry(acc.absorb(line)), None),
        ProjectState::NoOpenEntry => (ProjectState::NoOpenEntry, None),
    }
}

pub fn finish(state: ProjectState) -> Option<ProjectEntry> {
    match state {
        ProjectState::OpenEntry(acc) => Some(acc.finish()),
        ProjectState::NoOpenEntry => None,
    }
}

/// Short, link-free, not capitalized and without an action verb.
pub fn is_title(line: &str) -> bool {
    let lower = line.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    words.len() <= TITLE_MAX_WORDS
        && !lower.contains("http")
        && !line.chars().next().is_some_and(char::is_uppercase)
        && !words
            .iter()
            .any(|w| ACTION_VERBS.contains(&w.trim_matches(|c: char| !c.is_alphanumeric())))
}

fn technologies_in(line: &str) -> impl Iterator<Item = String> + '_ {
    TECH_PATTERNS
        .iter()
        .filter(move |(_, re)| re.is_match(line))
        .map(|(tech, _)| tech.to_string())
}

pub fn parse_projects(section: &str) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    let mut state = ProjectState::NoOpenEntry;

    for line in section
        .lines()
        .map(|l| l.trim().trim_start_matches(['•', '◦']).trim())
        .filter(|l| !l.is_empty())
    {
        let (next, closed) = transition(state, line);
        projects.extend(closed);
        state = next;
    }
    projects.extend(finish(state));

    debug!(projects = projects.len(), "Parsed projects");
    projects
}
