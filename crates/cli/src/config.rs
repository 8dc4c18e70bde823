//! Configuration loading and parsing.
//!
//! Every setting has a default, so running without a config file gives the
//! stock first-quarter deployment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use paceboard_core::{default_themes, Goal, TrackerState, TrackingWindow, User, UserTheme};
use serde::Deserialize;

/// Application configuration (optionally loaded from a TOML file).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Location of the tracker document
    pub data_file: PathBuf,

    /// Tracking window; dates are quoted `YYYY-MM-DD` strings
    pub window: TrackingWindow,

    /// Display colors keyed by user name
    pub themes: IndexMap<String, UserTheme>,

    /// Replacement seed: user -> goal -> target/unit
    pub seed: Option<IndexMap<String, IndexMap<String, SeedGoal>>>,
}

/// A goal as written in the config seed table.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedGoal {
    pub target: f64,
    pub unit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            window: TrackingWindow::default(),
            themes: default_themes(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Read the config file, or fall back to defaults when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => load_config(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured window, checked for `end >= start`.
    pub fn window(&self) -> Result<TrackingWindow> {
        TrackingWindow::new(self.window.start, self.window.end).context("Invalid [window] section")
    }

    /// The configured seed as a document, if one was given.
    pub fn seed_state(&self) -> Result<Option<TrackerState>> {
        let Some(users) = &self.seed else {
            return Ok(None);
        };

        let mut state = TrackerState::new();
        for (user_name, goals) in users {
            let mut user = User::new();
            for (goal_name, spec) in goals {
                let goal = Goal::new(goal_name, spec.target, spec.unit.clone())
                    .with_context(|| format!("Invalid seed goal for user '{}'", user_name))?;
                user.insert_goal(goal_name.clone(), goal);
            }
            state.insert_user(user_name.clone(), user);
        }
        Ok(Some(state))
    }

    /// Theme of a user, if one is configured.
    pub fn theme(&self, user: &str) -> Option<&UserTheme> {
        self.themes.get(user)
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.window().unwrap(), TrackingWindow::default());
        assert_eq!(config.theme("Javier").unwrap().color, "#FF4B4B");
        assert!(config.seed_state().unwrap().is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r##"
            data_file = "/var/lib/paceboard/q2.json"

            [window]
            start = "2026-04-01"
            end = "2026-06-30"

            [themes.Ana]
            color = "#112233"

            [seed.Ana."Kilómetros"]
            target = 300
            unit = "km"

            [seed.Ana.Libros]
            target = 4
            unit = "Libros"

            [seed.Ben.Guitar]
            target = 40.5
            unit = "hours"
        "##;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/var/lib/paceboard/q2.json"));

        let window = config.window().unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());

        // An explicit themes table replaces the defaults.
        assert!(config.theme("Javier").is_none());
        assert_eq!(config.theme("Ana").unwrap().rgb(), Some((0x11, 0x22, 0x33)));

        let seed = config.seed_state().unwrap().unwrap();
        let users: Vec<_> = seed.user_names().collect();
        assert_eq!(users, vec!["Ana", "Ben"]);
        let goals: Vec<_> = seed.user("Ana").unwrap().goal_names().collect();
        assert_eq!(goals, vec!["Kilómetros", "Libros"]);
        assert_eq!(seed.goal("Ben", "Guitar").unwrap().target, 40.5);
        assert_eq!(seed.goal("Ben", "Guitar").unwrap().current, 0.0);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [window]
            start = "2026-06-30"
            end = "2026-04-01"
            "#,
        )
        .unwrap();
        assert!(config.window().is_err());
    }

    #[test]
    fn test_negative_seed_target_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [seed.Ana.Run]
            target = -5
            unit = "km"
            "#,
        )
        .unwrap();
        assert!(config.seed_state().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paceboard.toml");
        fs::write(&path, "data_file = \"team.json\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_file, PathBuf::from("team.json"));
        assert_eq!(config.window, TrackingWindow::default());

        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }
}
