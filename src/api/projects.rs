//! Project API
//!
//! Types for the project resource and outgoing payload construction.

use crate::error::{Result, ShelfwareError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A project record as served by the backend
///
/// The backend owns the full shape; unknown fields are preserved in `extra`
/// so schema additions never break decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, assigned by the backend
    pub id: String,

    /// Project title
    pub title: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lifecycle status (backend-defined vocabulary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Link to the source repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Link to a live deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_url: Option<String>,

    /// Link to documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// Structured hardware description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_info: Option<serde_json::Value>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Any additional fields the backend serves
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Input for creating or updating a project
///
/// `hardware_info` carries a JSON-encoded string (the shape produced by a
/// free-text input); it is decoded into a structured value during payload
/// construction, before anything is sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormData {
    /// Project title
    pub title: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Link to the source repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Link to a live deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_url: Option<String>,

    /// Link to documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// Hardware description as a JSON-encoded string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_info: Option<String>,
}

impl ProjectFormData {
    /// Create form data with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the repository URL
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Set the deployment URL
    pub fn with_deployed_url(mut self, url: impl Into<String>) -> Self {
        self.deployed_url = Some(url.into());
        self
    }

    /// Set the documentation URL
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = Some(url.into());
        self
    }

    /// Set the hardware description (a JSON-encoded string)
    pub fn with_hardware_info(mut self, raw: impl Into<String>) -> Self {
        self.hardware_info = Some(raw.into());
        self
    }

    /// Build the outgoing request payload
    ///
    /// Copies all fields; `hardwareInfo`, when present, is replaced by its
    /// decoded JSON value. When absent or empty (a cleared text input) the
    /// key is omitted entirely. Fails with a form error if a non-empty
    /// string is not valid JSON.
    pub fn to_payload(&self) -> Result<serde_json::Value> {
        let mut payload = serde_json::to_value(self)
            .map_err(|e| ShelfwareError::Form(format!("Failed to serialize form: {}", e)))?;

        if let Some(obj) = payload.as_object_mut() {
            match self.hardware_info.as_deref() {
                Some(raw) if !raw.is_empty() => {
                    let parsed: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
                        ShelfwareError::Form(format!("Hardware info is not valid JSON: {}", e))
                    })?;
                    obj.insert("hardwareInfo".to_string(), parsed);
                }
                Some(_) => {
                    obj.remove("hardwareInfo");
                }
                None => {}
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_omits_absent_hardware_info() {
        let form = ProjectFormData::new("Weather Station");
        let payload = form.to_payload().unwrap();

        assert_eq!(payload["title"], "Weather Station");
        assert!(payload.get("hardwareInfo").is_none());
        assert!(payload.get("description").is_none());
    }

    #[test]
    fn test_payload_decodes_hardware_info() {
        let form = ProjectFormData::new("Weather Station")
            .with_hardware_info(r#"{"cpu":"x86","ramGb":4}"#);
        let payload = form.to_payload().unwrap();

        assert_eq!(payload["hardwareInfo"]["cpu"], "x86");
        assert_eq!(payload["hardwareInfo"]["ramGb"], 4);
        assert!(!payload["hardwareInfo"].is_string());
    }

    #[test]
    fn test_payload_omits_empty_hardware_info() {
        let form = ProjectFormData::new("Weather Station").with_hardware_info("");
        let payload = form.to_payload().unwrap();

        assert!(payload.get("hardwareInfo").is_none());
    }

    #[test]
    fn test_payload_rejects_invalid_hardware_info() {
        let form = ProjectFormData::new("Weather Station").with_hardware_info("{invalid");
        let result = form.to_payload();

        assert!(matches!(result, Err(ShelfwareError::Form(_))));
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = ProjectFormData::new("Weather Station")
            .with_github_url("https://github.com/acme/weather")
            .with_docs_url("https://docs.example.com");
        let payload = form.to_payload().unwrap();

        assert_eq!(payload["githubUrl"], "https://github.com/acme/weather");
        assert_eq!(payload["docsUrl"], "https://docs.example.com");
        assert!(payload.get("github_url").is_none());
    }

    #[test]
    fn test_project_deserialization_keeps_unknown_fields() {
        let json = r#"{
            "id": "proj-1",
            "title": "Weather Station",
            "status": "inProgress",
            "hardwareInfo": {"cpu": "x86"},
            "visibility": "private"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "proj-1");
        assert_eq!(project.status.as_deref(), Some("inProgress"));
        assert_eq!(project.hardware_info.unwrap()["cpu"], "x86");
        assert_eq!(project.extra["visibility"], "private");
    }
}
