//! File content transfer operations.

use bytes::Bytes;
use futures::StreamExt;

use crate::api::Operation;
use crate::error::Result;
use crate::http::ByteStream;
use crate::session::Session;

impl Session {
    /// Open a file for reading and return the raw byte stream.
    ///
    /// `offset` and `length` bound the read when positive; zero means
    /// "from the start" / "to the end".
    ///
    /// The HTTP status is not checked before the stream is handed back;
    /// a failed open shows up as a zero-length stream (or the gateway's
    /// error body). Use [`Session::stat`] first when that distinction
    /// matters.
    pub async fn open(&self, path: &str, offset: u64, length: u64) -> Result<ByteStream> {
        let path = self.resolve(path);
        self.api.open_stream(&path, offset, length).await
    }

    /// Read a whole file into memory.
    pub async fn read(&self, path: &str) -> Result<Bytes> {
        let mut stream = self.open(path, 0, 0).await?;
        let mut buf = Vec::new();
        while let Some(chunk) = stream.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(buf))
    }

    /// Create a new file from the given content.
    ///
    /// Fails when the path already exists; use [`Session::create_overwrite`]
    /// to replace it.
    pub async fn create(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.create_inner(path, data.into(), false).await
    }

    /// Create a file, replacing any existing content.
    pub async fn create_overwrite(&self, path: &str, data: impl Into<Bytes>) -> Result<()> {
        self.create_inner(path, data.into(), true).await
    }

    async fn create_inner(&self, path: &str, data: Bytes, overwrite: bool) -> Result<()> {
        let mut params = Vec::new();
        if overwrite {
            params.push(("overwrite", "true".to_string()));
        }
        let path = self.resolve(path);
        self.api
            .invoke(&path, Operation::Create, &params, Some(data))
            .await?;
        Ok(())
    }
}
