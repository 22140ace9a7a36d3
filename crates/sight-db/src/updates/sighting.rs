//! Sighting update builder.
//!
//! Location is not updatable through the primary store; only attributes the
//! primary store owns appear here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SightingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SightingUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
    }
}

pub struct SightingUpdateBuilder(SightingUpdate);

impl SightingUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SightingUpdate::default())
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SightingUpdate {
        self.0
    }
}

impl Default for SightingUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_noop() {
        assert!(SightingUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let update: SightingUpdate =
            serde_json::from_str(r#"{"description":"Lynx","latitude":9.0}"#).unwrap();
        assert_eq!(update.description.as_deref(), Some("Lynx"));
    }
}
