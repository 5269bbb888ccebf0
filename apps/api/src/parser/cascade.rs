//! Ordered regex cascades with first-success-wins semantics.
//!
//! Each rule pairs a pattern with the function that turns its matches into a
//! value. Rules are tried in declaration order and the first one producing a
//! value ends the scan, so precedence is visible in one list.

use regex::Regex;
use tracing::trace;

pub type Extractor<T> = fn(&Regex, &str) -> Option<T>;

pub struct Rule<T> {
    pub name: &'static str,
    pub pattern: Regex,
    pub extract: Extractor<T>,
}

pub struct Cascade<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Cascade<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<T> {
        self.rules.iter().find_map(|rule| {
            let value = (rule.extract)(&rule.pattern, text)?;
            trace!(rule = rule.name, "Cascade rule matched");
            Some(value)
        })
    }
}

/// Compiles a pattern that is a literal in this crate.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// The whole first match.
pub fn whole_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// Maximum of capture group 1 across every match.
pub fn max_count(re: &Regex, text: &str) -> Option<u32> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .max()
}
