//! Job position definitions loaded from TOML

use crate::error::{Result, ScorerError};
use crate::scoring::Requirements;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A job opening and the requirement text candidates are scored against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub department: String,
    pub seniority: String,
    #[serde(default)]
    pub description: Option<String>,
    pub must_have: String,
    pub nice_to_have: String,
}

impl Position {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ScorerError::InvalidInput(format!(
                "Cannot read position file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let position: Position = toml::from_str(content)?;
        position.validate()?;
        Ok(position)
    }

    /// Every field except the description must be non-blank
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("department", &self.department),
            ("seniority", &self.seniority),
            ("must_have", &self.must_have),
            ("nice_to_have", &self.nice_to_have),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ScorerError::InvalidInput(format!(
                    "Position field '{}' is required",
                    field
                )));
            }
        }
        Ok(())
    }

    pub fn requirements(&self, custom: Option<&str>) -> Requirements {
        let requirements = Requirements::new(self.must_have.as_str(), self.nice_to_have.as_str());
        match custom {
            Some(custom) => requirements.with_custom(custom),
            None => requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITION: &str = r#"
title = "Backend Engineer"
department = "Platform"
seniority = "Senior"
must_have = """
- Rust
- PostgreSQL
- distributed systems
"""
nice_to_have = "Kafka, Kubernetes"
"#;

    #[test]
    fn test_parse_position() {
        let position = Position::from_toml(POSITION).unwrap();
        assert_eq!(position.title, "Backend Engineer");
        assert!(position.description.is_none());
        assert!(position.must_have.contains("PostgreSQL"));
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let content = POSITION.replace("seniority = \"Senior\"", "seniority = \"  \"");
        let err = Position::from_toml(&content).unwrap_err();
        assert!(err.to_string().contains("seniority"));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let content = POSITION.replace("nice_to_have = \"Kafka, Kubernetes\"", "");
        assert!(matches!(
            Position::from_toml(&content),
            Err(ScorerError::TomlParse(_))
        ));
    }

    #[test]
    fn test_requirements_carry_custom_text() {
        let position = Position::from_toml(POSITION).unwrap();
        let requirements = position.requirements(Some("on-call rotation"));
        assert_eq!(requirements.nice_to_have, "Kafka, Kubernetes");
        assert_eq!(requirements.custom.as_deref(), Some("on-call rotation"));
    }
}
