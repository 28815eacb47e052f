//! # hdfslib
//!
//! Rust client library for WebHDFS-style REST filesystem gateways.
//!
//! ## Features
//!
//! - **Browsing**: list directories, stat paths, fetch content summaries
//!   and file checksums.
//! - **Mutation**: create directories, rename/move, delete, and set
//!   permission, owner, replication and times.
//! - **Transfer**: read files as a byte stream (with optional offset and
//!   length) and create files from a single request body.
//! - **Path resolution**: absolute, home-relative and URI-form paths,
//!   resolved against the home directory fetched once at connect time.
//! - **Observability**: an optional error callback notified once per failed
//!   request, alongside the typed error each call returns.
//! - **Pluggable transport**: the default client is reqwest-backed (with
//!   proxy support); tests and pooling callers can inject their own.
//!
//! Paths not starting with `/` are resolved against the session's home
//! directory, so connect with the user whose namespace you expect.
//!
//! ## Example
//!
//! ```no_run
//! use hdfslib::Session;
//!
//! # async fn example() -> hdfslib::Result<()> {
//! // Connect (fetches the home directory once)
//! let session = Session::connect_as("http://namenode:9870/", "hdfs").await?;
//!
//! // List a directory
//! let listing = session.list("/tmp").await?;
//! for entry in &listing.entries {
//!     println!("{} ({} bytes)", entry.path_suffix, entry.length);
//! }
//!
//! // Write and read back a file
//! session.create_overwrite("/tmp/hello.txt", "hello").await?;
//! let data = session.read("/tmp/hello.txt").await?;
//! assert_eq!(&data[..], b"hello");
//!
//! // Rename and delete
//! session.rename("/tmp/hello.txt", "/tmp/hello-old.txt").await?;
//! session.delete("/tmp/hello-old.txt", false).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod fs;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use api::Operation;
pub use error::{ErrorCallback, ErrorEvent, HdfsError, Result};
pub use fs::{ContentSummary, DirectoryListing, FileChecksum, FileStatus, FileType};
pub use http::{ByteStream, HttpClient, Method, Transport};
pub use session::Session;
