//! Typed response shapes decoded from gateway JSON envelopes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{HdfsError, Result};

/// Entry kind reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// Regular file
    #[default]
    File,
    /// Directory
    Directory,
}

impl FileType {
    fn from_json_str(value: &str) -> Result<Self> {
        match value {
            "FILE" => Ok(FileType::File),
            "DIRECTORY" => Ok(FileType::Directory),
            other => Err(HdfsError::MalformedResponse(format!(
                "unknown file type {:?}",
                other
            ))),
        }
    }

    /// Check if this is the directory kind.
    pub fn is_directory(&self) -> bool {
        *self == FileType::Directory
    }
}

/// Status record of a single path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    /// Last access time (milliseconds since epoch)
    pub access_time: i64,
    /// Block size in bytes
    pub block_size: i64,
    /// Group name
    pub group: String,
    /// File length in bytes (0 for directories)
    pub length: i64,
    /// Last modification time (milliseconds since epoch)
    pub modification_time: i64,
    /// Owner name
    pub owner: String,
    /// Entry name relative to the listed directory
    pub path_suffix: String,
    /// Permission octal string (e.g. "755")
    pub permission: String,
    /// Replication factor (0 for directories)
    pub replication: i32,
    /// Entry kind
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl FileStatus {
    /// Decode a status record from a gateway envelope.
    ///
    /// A nested object under the `"FileStatus"` key is unwrapped first, so
    /// both the stat envelope and a bare listing entry decode the same way.
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let value = match value.get("FileStatus") {
            Some(inner) if inner.is_object() => inner,
            _ => value,
        };
        let obj = as_object(value, "FileStatus")?;

        Ok(Self {
            access_time: field_i64(obj, "accessTime")?,
            block_size: field_i64(obj, "blockSize")?,
            group: field_str(obj, "group")?,
            length: field_i64(obj, "length")?,
            modification_time: field_i64(obj, "modificationTime")?,
            owner: field_str(obj, "owner")?,
            path_suffix: field_str(obj, "pathSuffix")?,
            permission: field_str(obj, "permission")?,
            replication: field_i32(obj, "replication")?,
            file_type: match obj.get("type") {
                None | Some(Value::Null) => FileType::default(),
                Some(Value::String(s)) => FileType::from_json_str(s)?,
                Some(_) => {
                    return Err(HdfsError::MalformedResponse(
                        "field \"type\" is not a string".to_string(),
                    ))
                }
            },
        })
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.file_type.is_directory()
    }
}

/// Ordered directory listing.
///
/// Every entry is either a directory or a file; the [`directories`] and
/// [`files`] views partition the listing without overlap.
///
/// [`directories`]: DirectoryListing::directories
/// [`files`]: DirectoryListing::files
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DirectoryListing {
    /// Entries in the order the gateway returned them
    pub entries: Vec<FileStatus>,
}

impl DirectoryListing {
    /// Decode a listing from the `FileStatuses.FileStatus` envelope.
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let obj = as_object(value, "DirectoryListing")?;
        let statuses = obj
            .get("FileStatuses")
            .and_then(|v| v.as_object())
            .ok_or_else(|| {
                HdfsError::MalformedResponse("missing \"FileStatuses\" object".to_string())
            })?;
        let raw = statuses
            .get("FileStatus")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                HdfsError::MalformedResponse("missing \"FileStatus\" array".to_string())
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for item in raw {
            entries.push(FileStatus::from_json(item)?);
        }
        Ok(Self { entries })
    }

    /// Entries that are directories, in source order.
    pub fn directories(&self) -> Vec<&FileStatus> {
        self.entries.iter().filter(|e| e.is_directory()).collect()
    }

    /// Entries that are files, in source order.
    pub fn files(&self) -> Vec<&FileStatus> {
        self.entries.iter().filter(|e| e.is_file()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregate counts and quota for a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    /// Number of directories in the subtree
    pub directory_count: i32,
    /// Number of files in the subtree
    pub file_count: i32,
    /// Total content length in bytes
    pub length: i64,
    /// Namespace quota (-1 when unset)
    pub quota: i32,
    /// Storage consumed across replicas in bytes
    pub space_consumed: i64,
    /// Storage quota in bytes (-1 when unset)
    pub space_quota: i64,
}

impl ContentSummary {
    /// Decode a content summary from a gateway object.
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let obj = as_object(value, "ContentSummary")?;

        Ok(Self {
            directory_count: field_i32(obj, "directoryCount")?,
            file_count: field_i32(obj, "fileCount")?,
            length: field_i64(obj, "length")?,
            quota: field_i32(obj, "quota")?,
            space_consumed: field_i64(obj, "spaceConsumed")?,
            space_quota: field_i64(obj, "spaceQuota")?,
        })
    }
}

/// File checksum record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChecksum {
    /// Checksum algorithm name
    pub algorithm: String,
    /// Hex-encoded checksum, from the JSON key `"bytes"`
    pub bytes: String,
    /// Length of the checksum in bytes
    pub length: i32,
}

impl FileChecksum {
    /// Decode a checksum from a gateway object.
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let obj = as_object(value, "FileChecksum")?;

        Ok(Self {
            algorithm: field_str(obj, "algorithm")?,
            bytes: field_str(obj, "bytes")?,
            length: field_i32(obj, "length")?,
        })
    }
}

/// Decode a `{"boolean": ...}` envelope.
pub fn boolean_result(value: &Value) -> Result<bool> {
    if value.is_null() {
        return Ok(false);
    }
    let obj = as_object(value, "boolean result")?;
    match obj.get("boolean") {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(HdfsError::MalformedResponse(
            "field \"boolean\" is not a bool".to_string(),
        )),
    }
}

// Field readers shared by the shape decoders. Absent and null fields decode
// to the zero value; a present field of the wrong JSON type is an error.

fn as_object<'a>(value: &'a Value, shape: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| HdfsError::MalformedResponse(format!("{} envelope is not an object", shape)))
}

fn field_i64(obj: &Map<String, Value>, key: &str) -> Result<i64> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v.as_i64().ok_or_else(|| {
            HdfsError::MalformedResponse(format!("field {:?} is not an integer", key))
        }),
    }
}

fn field_i32(obj: &Map<String, Value>, key: &str) -> Result<i32> {
    Ok(field_i64(obj, key)? as i32)
}

fn field_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(HdfsError::MalformedResponse(format!(
            "field {:?} is not a string",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_result() {
        assert!(boolean_result(&json!({"boolean": true})).unwrap());
        assert!(!boolean_result(&json!({"boolean": false})).unwrap());
        assert!(!boolean_result(&Value::Null).unwrap());
        assert!(!boolean_result(&json!({})).unwrap());
        assert!(boolean_result(&json!({"boolean": "yes"})).is_err());
    }

    #[test]
    fn test_file_status_decoding() {
        let envelope = json!({
            "FileStatus": {
                "accessTime": 1320171722771i64,
                "blockSize": 33554432,
                "group": "supergroup",
                "length": 24930,
                "modificationTime": 1320171722771i64,
                "owner": "webuser",
                "pathSuffix": "a.patch",
                "permission": "644",
                "replication": 1,
                "type": "FILE"
            }
        });

        let status = FileStatus::from_json(&envelope).unwrap();
        assert_eq!(status.access_time, 1320171722771);
        assert_eq!(status.block_size, 33554432);
        assert_eq!(status.group, "supergroup");
        assert_eq!(status.length, 24930);
        assert_eq!(status.owner, "webuser");
        assert_eq!(status.path_suffix, "a.patch");
        assert_eq!(status.permission, "644");
        assert_eq!(status.replication, 1);
        assert!(status.is_file());
        assert!(!status.is_directory());

        // A bare object (listing entry) decodes the same way.
        let bare = json!({"pathSuffix": "dir", "type": "DIRECTORY"});
        let status = FileStatus::from_json(&bare).unwrap();
        assert_eq!(status.path_suffix, "dir");
        assert!(status.is_directory());
    }

    #[test]
    fn test_file_status_absent_fields_are_zero() {
        let status = FileStatus::from_json(&json!({})).unwrap();
        assert_eq!(status.access_time, 0);
        assert_eq!(status.length, 0);
        assert_eq!(status.owner, "");
        assert_eq!(status.replication, 0);
        assert_eq!(status.file_type, FileType::File);
    }

    #[test]
    fn test_file_status_type_mismatch() {
        assert!(FileStatus::from_json(&json!({"length": "not a number"})).is_err());
        assert!(FileStatus::from_json(&json!({"owner": 42})).is_err());
        assert!(FileStatus::from_json(&json!({"type": "SYMLINK?"})).is_err());
        assert!(FileStatus::from_json(&json!("plain string")).is_err());
    }

    #[test]
    fn test_directory_listing_partition() {
        let envelope = json!({
            "FileStatuses": {
                "FileStatus": [
                    {"pathSuffix": "docs", "type": "DIRECTORY"}
                ]
            }
        });

        let listing = DirectoryListing::from_json(&envelope).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.directories().len(), 1);
        assert!(listing.files().is_empty());
        assert_eq!(listing.directories()[0].path_suffix, "docs");
    }

    #[test]
    fn test_directory_listing_preserves_order() {
        let envelope = json!({
            "FileStatuses": {
                "FileStatus": [
                    {"pathSuffix": "b", "type": "FILE"},
                    {"pathSuffix": "a", "type": "DIRECTORY"},
                    {"pathSuffix": "c", "type": "FILE"}
                ]
            }
        });

        let listing = DirectoryListing::from_json(&envelope).unwrap();
        let names: Vec<&str> = listing
            .entries
            .iter()
            .map(|e| e.path_suffix.as_str())
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(listing.files().len(), 2);
        assert_eq!(listing.directories().len(), 1);
    }

    #[test]
    fn test_directory_listing_malformed() {
        assert!(DirectoryListing::from_json(&json!({})).is_err());
        assert!(DirectoryListing::from_json(&json!({"FileStatuses": {}})).is_err());
        assert!(DirectoryListing::from_json(&json!({"FileStatuses": {"FileStatus": 1}})).is_err());
    }

    #[test]
    fn test_content_summary_decoding() {
        let value = json!({
            "directoryCount": 2,
            "fileCount": 1,
            "length": 24930,
            "quota": -1,
            "spaceConsumed": 24930,
            "spaceQuota": -1
        });

        let summary = ContentSummary::from_json(&value).unwrap();
        assert_eq!(summary.directory_count, 2);
        assert_eq!(summary.file_count, 1);
        assert_eq!(summary.length, 24930);
        assert_eq!(summary.quota, -1);
        assert_eq!(summary.space_consumed, 24930);
        assert_eq!(summary.space_quota, -1);
    }

    #[test]
    fn test_file_checksum_decoding() {
        let value = json!({
            "algorithm": "MD5-of-1MD5-of-512CRC32",
            "bytes": "eadb10de24aa315748930df6e185c0d0",
            "length": 28
        });

        let checksum = FileChecksum::from_json(&value).unwrap();
        assert_eq!(checksum.algorithm, "MD5-of-1MD5-of-512CRC32");
        assert_eq!(checksum.bytes, "eadb10de24aa315748930df6e185c0d0");
        assert_eq!(checksum.length, 28);
    }

    #[test]
    fn test_empty_envelope_decodes_to_default() {
        assert_eq!(
            FileStatus::from_json(&Value::Null).unwrap(),
            FileStatus::default()
        );
        assert!(DirectoryListing::from_json(&Value::Null).unwrap().is_empty());
        assert_eq!(
            ContentSummary::from_json(&Value::Null).unwrap(),
            ContentSummary::default()
        );
        assert_eq!(
            FileChecksum::from_json(&Value::Null).unwrap(),
            FileChecksum::default()
        );
    }
}
