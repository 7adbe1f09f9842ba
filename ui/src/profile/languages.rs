//! Skill badges and language glyphs derived from the repository listing.

use api::GitHubRepo;

/// Skills always listed first, whatever the repositories say.
pub const MAIN_SKILLS: [&str; 7] = [
    "TypeScript",
    "React",
    "Node.js",
    "SQL",
    "JavaScript",
    "Express",
    "EJS",
];
pub const MAX_SKILL_BADGES: usize = 8;

/// Main skills followed by repository languages in first-seen order,
/// deduplicated and capped at [`MAX_SKILL_BADGES`].
pub fn skill_badges(repos: &[GitHubRepo]) -> Vec<String> {
    let repo_languages = repos
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .map(str::trim)
        .filter(|language| !language.is_empty());

    let mut badges: Vec<String> = Vec::with_capacity(MAX_SKILL_BADGES);
    for skill in MAIN_SKILLS {
        push_unique(&mut badges, skill);
    }
    for language in repo_languages {
        push_unique(&mut badges, language);
    }
    badges
}

fn push_unique(badges: &mut Vec<String>, language: &str) {
    if badges.len() < MAX_SKILL_BADGES && !badges.iter().any(|existing| existing == language) {
        badges.push(language.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageGlyph {
    Code,
    Document,
    Chip,
    Coffee,
    Globe,
    Palette,
    Shield,
    Database,
    Heart,
    Bolt,
}

impl LanguageGlyph {
    pub fn for_language(language: &str) -> Self {
        match language.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ejs" => Self::Document,
            "python" => Self::Chip,
            "java" => Self::Coffee,
            "html" | "php" => Self::Globe,
            "css" => Self::Palette,
            "c++" | "rust" => Self::Shield,
            "c#" | "sql" => Self::Database,
            "ruby" => Self::Heart,
            "go" => Self::Bolt,
            _ => Self::Code,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Document => "📄",
            Self::Chip => "🧠",
            Self::Coffee => "☕",
            Self::Globe => "🌐",
            Self::Palette => "🎨",
            Self::Shield => "🛡",
            Self::Database => "🗄",
            Self::Heart => "♥",
            Self::Bolt => "⚡",
        }
    }
}
