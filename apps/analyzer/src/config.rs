use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the library stays usable with no
/// environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the skill-vocabulary file (JSON array of strings).
    pub skills_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            skills_path: optional_env("SKILLS_PATH", "skills.json").into(),
        }
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
