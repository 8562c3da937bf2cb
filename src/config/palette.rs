use std::collections::BTreeSet;

use crate::foundation::error::{OrizuruError, OrizuruResult};

/// One selectable crane colour.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CraneColor {
    /// Stable identifier.
    pub id: String,
    /// CSS colour string handed to the renderer untouched.
    pub color: String,
    /// Display label.
    pub label: String,
    /// Optional prompt shown in the message field for this colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl CraneColor {
    fn new(id: &str, color: &str, label: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            color: color.to_string(),
            label: label.to_string(),
            placeholder: Some(placeholder.to_string()),
        }
    }
}

/// Ordered crane colour palette; the first entry is the default.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<CraneColor>);

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            CraneColor::new(
                "grey",
                "#808080",
                "The Unsent",
                "Write the message you deleted...",
            ),
            CraneColor::new(
                "blue",
                "#A4C2F4",
                "The Regret",
                "What would you do differently?",
            ),
            CraneColor::new(
                "red",
                "#E06666",
                "The Yearning",
                "Tell them you miss them...",
            ),
            CraneColor::new(
                "black",
                "#000000",
                "The Closure",
                "Say your final goodbye...",
            ),
        ])
    }
}

impl Palette {
    /// Require at least one entry, unique ids and non-blank colours.
    pub fn validate(&self) -> OrizuruResult<()> {
        if self.0.is_empty() {
            return Err(OrizuruError::config("palette must have at least one colour"));
        }
        let mut seen = BTreeSet::new();
        for entry in &self.0 {
            if entry.id.trim().is_empty() {
                return Err(OrizuruError::config("palette id must be non-empty"));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(OrizuruError::config(format!(
                    "palette id '{}' is duplicated",
                    entry.id
                )));
            }
            if entry.color.trim().is_empty() {
                return Err(OrizuruError::config(format!(
                    "palette colour for '{}' must be non-empty",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    /// The default (first) entry.
    pub fn default_color(&self) -> Option<&CraneColor> {
        self.0.first()
    }

    /// Look up an entry by id.
    pub fn by_id(&self, id: &str) -> Option<&CraneColor> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Keep `color` if the palette offers it, otherwise fall back to the default entry.
    ///
    /// Used whenever the palette changes under an existing selection.
    pub fn resolve(&self, color: &str) -> Option<&CraneColor> {
        self.0
            .iter()
            .find(|c| c.color.eq_ignore_ascii_case(color))
            .or_else(|| self.default_color())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;
