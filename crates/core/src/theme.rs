//! Per-user display metadata. Purely cosmetic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a user is highlighted by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTheme {
    /// Accent color as `#RRGGBB`
    pub color: String,
}

impl UserTheme {
    /// Create a theme from a `#RRGGBB` color string.
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }

    /// The color as an RGB triple, if it is a well-formed `#RRGGBB` value.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Colors of the default deployment, keyed by user name.
pub fn default_themes() -> IndexMap<String, UserTheme> {
    [
        ("Javier", "#FF4B4B"),
        ("Ricardo", "#00FF00"),
        ("Robert", "#FFD700"),
        ("Jesus", "#1E90FF"),
        ("Angel", "#9400D3"),
    ]
    .into_iter()
    .map(|(name, color)| (name.to_string(), UserTheme::new(color)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parsing() {
        assert_eq!(UserTheme::new("#FF4B4B").rgb(), Some((255, 75, 75)));
        assert_eq!(UserTheme::new("#1e90ff").rgb(), Some((30, 144, 255)));
        assert_eq!(UserTheme::new("FF4B4B").rgb(), None);
        assert_eq!(UserTheme::new("#FFF").rgb(), None);
        assert_eq!(UserTheme::new("#GGGGGG").rgb(), None);
    }

    #[test]
    fn test_default_themes_cover_seed_users() {
        let themes = default_themes();
        for name in ["Robert", "Javier", "Jesus", "Ricardo", "Angel"] {
            assert!(themes.contains_key(name), "missing theme for {name}");
        }
    }
}
