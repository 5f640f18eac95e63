//! Client for the student service (read-only).

use reqwest::Client;

use super::{ClientError, json_or_not_found, transport};
use crate::models::Student;

#[derive(Debug, Clone)]
pub struct StudentClient {
    http: Client,
    base_url: String,
}

impl StudentClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The URL a given student id is fetched from. Exposed so the
    /// orchestrator can name it in a not-found error.
    pub fn url_for(&self, student_id: &str) -> String {
        format!("{}/{student_id}", self.base_url)
    }

    /// Fetch a student by id. `Ok(None)` when no record matches.
    pub async fn find(&self, student_id: &str) -> Result<Option<Student>, ClientError> {
        let url = self.url_for(student_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport(&url))?;
        json_or_not_found(resp, &url).await
    }
}
