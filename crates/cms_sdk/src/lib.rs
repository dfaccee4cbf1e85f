//! Client for the CMS schema API.
//!
//! This crate covers the remote half of the generator: resolving connection
//! settings from the environment, performing the authentication handshake,
//! and fetching schema descriptions for named content models. The client is
//! configured through an explicit [`ClientConfig`] value so tests can point
//! it at a mock server instead of ambient process state.

mod client;
mod config;
mod dotenv;
mod error;
mod schema;

pub use client::{AccessToken, SchemaClient};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use schema::{ColumnDef, Schema};
