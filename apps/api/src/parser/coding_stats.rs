//! Competitive-programming statistics, scanned over the whole document.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::CodingStats;
use crate::parser::cascade::{compile, max_count, whole_match, Cascade, Rule};

/// Problem-count families, most specific first. The first family with any
/// match decides; within it the largest count wins.
static PROBLEM_COUNTS: Lazy<Cascade<u32>> = Lazy::new(|| {
    Cascade::new(vec![
        Rule {
            name: "data_structures",
            pattern: compile(
                r"(?i)(\d+)\+?\s*(?:data\s+structures?|dsa)(?:\s+(?:and|&)\s+algorithms?)?(?:\s+(?:problems|questions))?",
            ),
            extract: max_count,
        },
        Rule {
            name: "solved_problems",
            pattern: compile(
                r"(?i)solved\s+(?:over\s+|more\s+than\s+)?(\d+)\+?\s*(?:coding\s+|dsa\s+)?(?:problems|questions)",
            ),
            extract: max_count,
        },
        Rule {
            name: "problem_count",
            pattern: compile(r"(?i)(\d+)\+?\s*(?:problems|challenges|questions)"),
            extract: max_count,
        },
    ])
});

/// Rating, rank, percentile; first match wins.
static RATING: Lazy<Cascade<String>> = Lazy::new(|| {
    Cascade::new(vec![
        Rule {
            name: "rating",
            pattern: compile(r"(?i)(?:max(?:imum)?\s+)?rating\s*(?:of\s+)?[:\-]?\s*\d{3,4}"),
            extract: whole_match,
        },
        Rule {
            name: "rank",
            pattern: compile(r"(?i)(?:global\s+|world\s+|country\s+)?rank\s*(?:of\s+)?[:\-]?\s*#?\d+"),
            extract: whole_match,
        },
        Rule {
            name: "percentile",
            pattern: compile(r"(?i)top\s+\d+(?:\.\d+)?\s*%"),
            extract: whole_match,
        },
    ])
});

pub fn parse_coding_stats(full_text: &str) -> CodingStats {
    let stats = CodingStats {
        problems_solved: PROBLEM_COUNTS.first_match(full_text),
        rating_info: RATING.first_match(full_text),
    };
    debug!(?stats, "Parsed coding stats");
    stats
}
