//! Drive v3 REST listing source.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use drivehub_core::config::RemoteConfig;
use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_entity::remote::RemoteFileRecord;

use crate::source::RemoteFileSource;

const LIST_FIELDS: &str = "nextPageToken,files(id,name,fileExtension,kind,mimeType,parents)";

/// One page of `files.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListPage {
    #[serde(default)]
    files: Vec<RemoteFileRecord>,
    next_page_token: Option<String>,
}

/// Lists every non-trashed file through the Drive API.
///
/// The bearer token is issued elsewhere and passed in as-is.
#[derive(Clone)]
pub struct DriveApiSource {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
    page_size: u32,
}

impl std::fmt::Debug for DriveApiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveApiSource")
            .field("api_base", &self.api_base)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl DriveApiSource {
    /// Create a source from the `remote` configuration section.
    pub fn new(config: &RemoteConfig) -> AppResult<Self> {
        if config.access_token.is_empty() {
            return Err(AppError::configuration(
                "remote.access_token is required for the drive source",
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            page_size: config.page_size.max(1),
        })
    }

    fn page_url(&self, page_token: Option<&str>) -> AppResult<Url> {
        let mut params = vec![
            ("fields", LIST_FIELDS.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("q", "trashed=false".to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        Ok(Url::parse_with_params(&format!("{}/files", self.api_base), &params)?)
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> AppResult<FileListPage> {
        let url = self.page_url(page_token)?;
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::ExternalService, "Drive request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Drive API error {status}: {body}"
            )));
        }

        response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Failed to parse Drive page", e)
        })
    }
}

#[async_trait]
impl RemoteFileSource for DriveApiSource {
    fn source_type(&self) -> &str {
        "drive"
    }

    async fn list_files(&self) -> AppResult<Vec<RemoteFileRecord>> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            pages += 1;
            debug!(page = pages, count = page.files.len(), "Fetched Drive page");
            records.extend(page.files);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        info!(pages, count = records.len(), "Listed Drive files");
        Ok(records)
    }
}
