//! Directory creation, renaming, deletion and attribute changes.

use crate::api::Operation;
use crate::error::Result;
use crate::fs::status::boolean_result;
use crate::session::Session;

impl Session {
    /// Create a directory, including missing parents.
    ///
    /// Returns the gateway's boolean result.
    pub async fn mkdir(&self, path: &str) -> Result<bool> {
        self.mkdir_inner(path, None).await
    }

    /// Create a directory with an explicit permission octal (e.g. "755").
    pub async fn mkdir_with_permission(&self, path: &str, permission: &str) -> Result<bool> {
        self.mkdir_inner(path, Some(permission)).await
    }

    async fn mkdir_inner(&self, path: &str, permission: Option<&str>) -> Result<bool> {
        let mut params = Vec::new();
        if let Some(permission) = permission {
            params.push(("permission", permission.to_string()));
        }
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(&path, Operation::Mkdirs, &params, None)
            .await?;
        boolean_result(&response)
    }

    /// Rename or move a file or directory.
    ///
    /// # Arguments
    /// * `path` - The path to rename
    /// * `destination` - The new path (resolved like any other path)
    pub async fn rename(&self, path: &str, destination: &str) -> Result<bool> {
        let destination = self.resolve(destination);
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(
                &path,
                Operation::Rename,
                &[("destination", destination)],
                None,
            )
            .await?;
        boolean_result(&response)
    }

    /// Delete a file or directory.
    ///
    /// `recursive` must be `true` to delete a non-empty directory.
    pub async fn delete(&self, path: &str, recursive: bool) -> Result<bool> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(
                &path,
                Operation::Delete,
                &[("recursive", recursive.to_string())],
                None,
            )
            .await?;
        boolean_result(&response)
    }

    /// Set the permission octal of a path (e.g. "644").
    pub async fn set_permission(&self, path: &str, permission: &str) -> Result<()> {
        let path = self.resolve(path);
        self.api
            .invoke(
                &path,
                Operation::SetPermission,
                &[("permission", permission.to_string())],
                None,
            )
            .await?;
        Ok(())
    }

    /// Set the owner and/or group of a path.
    pub async fn set_owner(
        &self,
        path: &str,
        owner: Option<&str>,
        group: Option<&str>,
    ) -> Result<()> {
        let mut params = Vec::new();
        if let Some(owner) = owner {
            params.push(("owner", owner.to_string()));
        }
        if let Some(group) = group {
            params.push(("group", group.to_string()));
        }
        let path = self.resolve(path);
        self.api
            .invoke(&path, Operation::SetOwner, &params, None)
            .await?;
        Ok(())
    }

    /// Set the replication factor of a file.
    pub async fn set_replication(&self, path: &str, replication: u16) -> Result<bool> {
        let path = self.resolve(path);
        let response = self
            .api
            .invoke(
                &path,
                Operation::SetReplication,
                &[("replication", replication.to_string())],
                None,
            )
            .await?;
        boolean_result(&response)
    }

    /// Set modification and/or access time of a path.
    ///
    /// Times are milliseconds since the epoch; `None` leaves the
    /// corresponding time untouched.
    pub async fn set_times(
        &self,
        path: &str,
        modification_time: Option<i64>,
        access_time: Option<i64>,
    ) -> Result<()> {
        let mut params = Vec::new();
        if let Some(mtime) = modification_time {
            params.push(("modificationtime", mtime.to_string()));
        }
        if let Some(atime) = access_time {
            params.push(("accesstime", atime.to_string()));
        }
        let path = self.resolve(path);
        self.api
            .invoke(&path, Operation::SetTimes, &params, None)
            .await?;
        Ok(())
    }
}
