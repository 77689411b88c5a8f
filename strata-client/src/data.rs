//! Data upload and download endpoints

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;
use strata_core::domain::data::DataObject;
use tracing::info;

use crate::StrataClient;
use crate::error::{ClientError, Result};

impl StrataClient {
    // =============================================================================
    // Data Upload
    // =============================================================================

    /// Upload raw bytes as a named data object
    ///
    /// # Arguments
    /// * `name` - Name the object is stored under
    /// * `bytes` - The object contents
    ///
    /// # Returns
    /// The stored data object, whose id can be used as job input
    pub async fn upload_data(&self, name: &str, bytes: Vec<u8>) -> Result<DataObject> {
        let size = bytes.len();
        let response = self
            .request(Method::POST, &["data"])?
            .query(&[("name", name)])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;

        let object: DataObject = self.handle_response(response).await?;
        info!("Uploaded {} ({} bytes) as {}", name, size, object.id);
        Ok(object)
    }

    /// Upload a local file, named after its file name
    ///
    /// # Arguments
    /// * `path` - The file to upload
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<DataObject> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ClientError::InvalidRequest(format!("{} has no file name", path.display()))
            })?;

        let bytes = tokio::fs::read(path).await?;
        self.upload_data(name, bytes).await
    }

    // =============================================================================
    // Data Management
    // =============================================================================

    /// List uploaded data objects
    pub async fn list_data(&self) -> Result<Vec<DataObject>> {
        let response = self.request(Method::GET, &["data"])?.send().await?;

        self.handle_response(response).await
    }

    /// Download the contents of a data object
    ///
    /// # Arguments
    /// * `data_id` - The data object id
    pub async fn download_data(&self, data_id: &str) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, &["data", data_id])?
            .send()
            .await?;

        self.handle_bytes_response(response).await
    }

    /// Delete a data object
    ///
    /// # Arguments
    /// * `data_id` - The data object id
    pub async fn delete_data(&self, data_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &["data", data_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
