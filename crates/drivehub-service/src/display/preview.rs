//! Embedded-viewer locators for remote files.

use url::Url;

use drivehub_core::config::PreviewConfig;
use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_entity::remote::RemoteFileId;

const PLACEHOLDER: &str = "{id}";

/// Builds preview URLs from a string template keyed on the file id.
#[derive(Debug, Clone)]
pub struct PreviewService {
    template: String,
}

impl PreviewService {
    /// Create the service, checking that the template has an `{id}` slot.
    pub fn new(config: &PreviewConfig) -> AppResult<Self> {
        if !config.url_template.contains(PLACEHOLDER) {
            return Err(AppError::configuration(format!(
                "preview.url_template must contain {PLACEHOLDER}: {}",
                config.url_template
            )));
        }
        Ok(Self {
            template: config.url_template.clone(),
        })
    }

    /// Preview locator for `id`.
    pub fn preview_url(&self, id: &RemoteFileId) -> AppResult<Url> {
        validate_id(id.as_str())?;
        let raw = self.template.replace(PLACEHOLDER, id.as_str());
        Url::parse(&raw).map_err(|e| {
            AppError::validation(format!("Invalid preview locator for {id}: {e}"))
        })
    }
}

fn validate_id(id: &str) -> AppResult<()> {
    if id.is_empty() {
        return Err(AppError::validation("Remote file id is empty"));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(AppError::validation(format!(
            "Remote file id {id:?} contains invalid character {bad:?}"
        )));
    }
    Ok(())
}
