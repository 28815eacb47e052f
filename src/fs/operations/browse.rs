//! Read-only browsing operations.

use crate::api::Operation;
use crate::error::{HdfsError, Result};
use crate::fs::status::{ContentSummary, DirectoryListing, FileChecksum, FileStatus};
use crate::session::Session;

impl Session {
    /// List the entries of a directory.
    ///
    /// # Arguments
    /// * `path` - The path to list (absolute, relative to the home
    ///   directory, or URI-form)
    ///
    /// # Example
    /// ```no_run
    /// # use hdfslib::Session;
    /// # async fn example() -> hdfslib::Result<()> {
    /// let session = Session::connect_as("http://namenode:9870/", "hdfs").await?;
    /// for entry in &session.list("/tmp").await?.entries {
    ///     println!("{} ({} bytes)", entry.path_suffix, entry.length);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, path: &str) -> Result<DirectoryListing> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(&path, Operation::ListStatus, &[], None)
            .await?;
        DirectoryListing::from_json(&response)
    }

    /// Get the status record of a file or directory.
    pub async fn stat(&self, path: &str) -> Result<FileStatus> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(&path, Operation::GetFileStatus, &[], None)
            .await?;
        FileStatus::from_json(&response)
    }

    /// Check whether a path exists.
    ///
    /// A 404 from the gateway maps to `false`; any other failure is
    /// propagated (and still reaches the error callback).
    pub async fn exists(&self, path: &str) -> Result<bool> {
        match self.stat(path).await {
            Ok(_) => Ok(true),
            Err(HdfsError::Remote { status: 404, .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Get aggregate counts and quota for a subtree.
    pub async fn content_summary(&self, path: &str) -> Result<ContentSummary> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(&path, Operation::GetContentSummary, &[], None)
            .await?;
        // The gateway wraps the record under its shape name.
        let value = response.get("ContentSummary").unwrap_or(&response);
        ContentSummary::from_json(value)
    }

    /// Get the checksum of a file.
    pub async fn checksum(&self, path: &str) -> Result<FileChecksum> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(&path, Operation::GetFileChecksum, &[], None)
            .await?;
        let value = response.get("FileChecksum").unwrap_or(&response);
        FileChecksum::from_json(value)
    }

    /// Fetch the session user's home directory from the gateway.
    ///
    /// This is the call [`Session::connect`] makes once to seed relative
    /// path resolution; it can be re-issued to inspect the remote value.
    pub async fn home_directory(&self) -> Result<String> {
        let response = self
            .api
            .invoke("/", Operation::GetHomeDirectory, &[], None)
            .await?;
        Ok(response
            .get("Path")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }
}
