//! shelfware-client - Shelfware API Client
//!
//! An async Rust client for the Shelfware project-tracking backend,
//! covering the project resource (list, fetch, create, update, delete)
//! over an authenticated HTTP connection.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

use api::{Project, ProjectFormData};
use client::HttpClient;
use config::{ClientConfig, ConfigLoader};
use error::{Result, ShelfwareError};

/// The main Shelfware client
///
/// Holds the resolved configuration and the underlying HTTP client. All
/// operations are independent; the client carries no cross-call state and
/// `&self` methods may run concurrently.
pub struct ShelfwareClient {
    /// Client configuration
    config: ClientConfig,

    /// HTTP client
    http_client: HttpClient,
}

impl ShelfwareClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        let loader = ConfigLoader::new()?;
        Self::from_config(loader.into_config())
    }

    /// Create a client with a custom config path
    pub fn with_config_path(path: &str) -> Result<Self> {
        let loader = ConfigLoader::from_path(path)?;
        Self::from_config(loader.into_config())
    }

    /// Create a client from a config object
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            config,
            http_client: HttpClient::new()?,
        })
    }

    /// Base URL of the project collection
    fn projects_url(&self) -> String {
        let base_url = self.config.get_base_url();
        format!("{}/api/projects", base_url.trim_end_matches('/'))
    }

    /// Resolve the API token, failing before any request is sent
    fn get_token(&self) -> Result<String> {
        self.config.get_api_token().ok_or_else(|| {
            ShelfwareError::Auth(
                "No API token configured. Set SHELFWARE_API_TOKEN or api_token in the config file."
                    .to_string(),
            )
        })
    }

    /// List all projects
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let token = self.get_token()?;
        self.http_client.get(&self.projects_url(), &token).await
    }

    /// Get a single project by ID
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        let token = self.get_token()?;
        let url = format!("{}/{}", self.projects_url(), id);
        self.http_client.get(&url, &token).await
    }

    /// Create a new project
    ///
    /// Fails with a form error before any network activity if the form's
    /// hardware info is present but not valid JSON.
    pub async fn create_project(&self, form: &ProjectFormData) -> Result<Project> {
        let payload = form.to_payload()?;
        let token = self.get_token()?;
        self.http_client
            .post(&self.projects_url(), &payload, &token)
            .await
    }

    /// Update an existing project
    ///
    /// Same payload construction and form-error semantics as
    /// [`create_project`](Self::create_project).
    pub async fn update_project(&self, id: &str, form: &ProjectFormData) -> Result<Project> {
        let payload = form.to_payload()?;
        let token = self.get_token()?;
        let url = format!("{}/{}", self.projects_url(), id);
        self.http_client.put(&url, &payload, &token).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let token = self.get_token()?;
        let url = format!("{}/{}", self.projects_url(), id);
        self.http_client.delete(&url, &token).await
    }
}
