use crate::fold::state::FoldSnapshot;
use crate::foundation::core::Stage;
use crate::foundation::error::{OrizuruError, OrizuruResult};

/// Overlay text shown while folding.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Instructions {
    /// Three entries: manual crease prompt, playback text, finished text.
    pub folding: Vec<String>,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            folding: vec![
                "Drag right to start folding".to_string(),
                "Folding...".to_string(),
                "Ready".to_string(),
            ],
        }
    }
}

impl Instructions {
    /// Exactly three folding entries are required.
    pub fn validate(&self) -> OrizuruResult<()> {
        if self.folding.len() != 3 {
            return Err(OrizuruError::config(format!(
                "instructions.folding must have 3 entries, got {}",
                self.folding.len()
            )));
        }
        Ok(())
    }

    /// Text for the overlay, or `None` once the crane is complete.
    pub fn instruction_for(&self, snapshot: FoldSnapshot) -> Option<&str> {
        if snapshot.complete {
            return None;
        }
        let idx = match snapshot.stage {
            Stage::Crease => 0,
            Stage::SquareBase | Stage::Shaping => 1,
            Stage::Finished => 2,
        };
        self.folding.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/instructions.rs"]
mod tests;
