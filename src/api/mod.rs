//! Gateway API client and operation codes.

pub(crate) mod client;
pub mod operation;

pub(crate) use client::ApiClient;
pub use operation::Operation;
