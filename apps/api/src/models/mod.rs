pub mod resume;

pub use resume::{
    AchievementEntry, CategorizedSkills, CodingProfiles, CodingStats, ContactInfo,
    DocumentFormat, EducationEntry, ParsedResume, ProjectEntry, RawDocument, SkillsInfo,
};
