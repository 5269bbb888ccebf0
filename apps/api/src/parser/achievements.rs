use crate::models::AchievementEntry;
use crate::parser::normalize::strip_bullet;

/// One entry per non-empty line; `Title: description` splits on the first colon.
pub fn parse_achievements(section: &str) -> Vec<AchievementEntry> {
    section
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((title, description)) => AchievementEntry {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            },
            None => AchievementEntry {
                title: line.to_string(),
                description: String::new(),
            },
        })
        .collect()
}
