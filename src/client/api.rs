//! Typed HTTP client for `/api/notes`.

use derive_more::Display;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    models::note::{Note, NoteForm},
};

#[derive(Debug, Display)]
pub enum ClientError {
    #[display(fmt = "request failed: {}", _0)]
    Http(reqwest::Error),
    #[display(fmt = "server answered {}: {}", _0, _1)]
    Status(StatusCode, String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        ClientError::Http(err)
    }
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status(StatusCode::NOT_FOUND, _))
    }
}

#[derive(Clone)]
pub struct NotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl NotesApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Points at the server's advertised `API_URL`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url)
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, note_id: &str) -> String {
        format!("{}/api/notes/{}", self.base_url, note_id)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::Status(status, body))
    }

    async fn json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        Ok(Self::check(resp).await?.json::<T>().await?)
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let resp = self.client.get(self.notes_url()).send().await?;
        Self::json(resp).await
    }

    pub async fn get_note(&self, note_id: &str) -> Result<Note, ClientError> {
        let resp = self.client.get(self.note_url(note_id)).send().await?;
        Self::json(resp).await
    }

    pub async fn create_note(&self, form: &NoteForm) -> Result<Note, ClientError> {
        let resp = self.client.post(self.notes_url()).json(form).send().await?;
        Self::json(resp).await
    }

    pub async fn update_note(&self, note_id: &str, form: &NoteForm) -> Result<Note, ClientError> {
        let resp = self
            .client
            .put(self.note_url(note_id))
            .json(form)
            .send()
            .await?;
        Self::json(resp).await
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<(), ClientError> {
        let resp = self.client.delete(self.note_url(note_id)).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_ignore_trailing_slash() {
        let api = NotesApi::new("http://localhost:5000/");
        assert_eq!(api.notes_url(), "http://localhost:5000/api/notes");
        assert_eq!(api.note_url("abc123"), "http://localhost:5000/api/notes/abc123");
    }

    #[test]
    fn config_supplies_the_base_url() {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/wishes".to_string()),
            "API_URL" => Some("https://wishes.example.com/".to_string()),
            _ => None,
        })
        .unwrap();

        let api = NotesApi::from_config(&config);
        assert_eq!(api.notes_url(), "https://wishes.example.com/api/notes");
    }

    #[test]
    fn only_404_status_is_not_found() {
        assert!(ClientError::Status(StatusCode::NOT_FOUND, String::new()).is_not_found());
        assert!(!ClientError::Status(StatusCode::BAD_REQUEST, String::new()).is_not_found());
    }
}
