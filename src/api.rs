use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default listing endpoint of the storage provider
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Mime type the provider uses to mark directories
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Fields requested from the listing endpoint
const LIST_FIELDS: &str = "files(id,name,mimeType,size,owners,createdTime)";

/// Placeholder used when the provider returns no name for an id
pub const UNKNOWN_FOLDER_NAME: &str = "Unknown Folder";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    /// Byte count as a decimal string (the provider omits it for folders and native docs)
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub owners: Option<Vec<Owner>>,
}

impl DriveItem {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// Errors surfaced by the listing client
#[derive(Debug, Error)]
pub enum DriveError {
    /// The provider answered with an `error` payload
    #[error("{message}")]
    Api { message: String },

    /// Transport failure (DNS, connect, TLS, timeout, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the JSON we expected
    #[error("unexpected response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    files: Option<Vec<DriveItem>>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct NameResponse {
    #[serde(default)]
    name: Option<String>,
}

/// Parse the body of a listing call
///
/// An `error` member wins over anything else; a missing `files` member is an
/// empty folder. Items are returned in provider order (unsorted).
pub fn parse_list_response(body: &str) -> Result<Vec<DriveItem>, DriveError> {
    let data: ListResponse = serde_json::from_str(body)?;

    if let Some(error) = data.error {
        return Err(DriveError::Api {
            message: error
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Failed to fetch files".to_string()),
        });
    }

    Ok(data.files.unwrap_or_default())
}

/// Parse the body of a name lookup, falling back to the placeholder name
pub fn parse_name_response(body: &str) -> Result<String, DriveError> {
    let data: NameResponse = serde_json::from_str(body)?;

    Ok(data
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_FOLDER_NAME.to_string()))
}

#[derive(Clone)]
pub struct DriveClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DriveClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, DriveError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    fn key_param(&self) -> String {
        // Empty key means a proxy in front of the provider supplies it
        if self.api_key.is_empty() {
            String::new()
        } else {
            format!("&key={}", urlencoding::encode(&self.api_key))
        }
    }

    pub fn list_url(&self, folder_id: &str) -> String {
        format!(
            "{}?q='{}'+in+parents{}&fields={}",
            self.base_url,
            urlencoding::encode(folder_id),
            self.key_param(),
            LIST_FIELDS
        )
    }

    pub fn name_url(&self, item_id: &str) -> String {
        let key = self.key_param();
        // `key_param` yields "&key=..."; the first parameter needs '?'
        let query = if key.is_empty() {
            "?fields=name".to_string()
        } else {
            format!("?{}&fields=name", &key[1..])
        };
        format!(
            "{}/{}{}",
            self.base_url,
            urlencoding::encode(item_id),
            query
        )
    }

    /// List the immediate children of a folder, sorted folders-first
    pub async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveItem>, DriveError> {
        let url = self.list_url(folder_id);
        tracing::debug!(folder_id, "listing folder children");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let mut items = parse_list_response(&body).map_err(|e| {
            tracing::debug!(folder_id, %status, error = %e, "listing failed");
            e
        })?;

        crate::logic::sorting::sort_drive_items(&mut items);
        tracing::debug!(folder_id, count = items.len(), "listing loaded");

        Ok(items)
    }

    /// Resolve a folder or file id to its display name
    pub async fn resolve_name(&self, item_id: &str) -> Result<String, DriveError> {
        let url = self.name_url(item_id);
        tracing::debug!(item_id, "resolving name");

        let response = self.client.get(&url).send().await?;
        let body = response.text().await?;

        parse_name_response(&body)
    }
}
