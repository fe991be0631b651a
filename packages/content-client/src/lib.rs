//! Client SDK for the firm's hosted content backend.
//!
//! The backend exposes content as plain tables (`services`, `team_members`,
//! `categories`, `job_positions`) plus a per-table change feed. This crate
//! provides:
//!
//! - [`ContentClient`]: the HTTP client for the table API,
//! - [`ChangeSubscription`]: a handle for an open change feed,
//! - [`CollectionSource`]: the capability set (fetch all + subscribe) a
//!   frontend hook consumes for one content domain,
//! - [`Collection`]: the engine that drives one domain's
//!   loading/data/error state, re-fetching on every change notification.
//!
//! The frontend constructs one [`Collection`] per mounted consumer; nothing
//! here is shared between instances except the process-wide client handle
//! configured once at startup via [`init`].

mod client;
mod collection;
mod config;
mod error;
mod realtime;
mod source;

pub use client::ContentClient;
pub use collection::{Collection, ResourceState};
pub use config::{init, shared, ClientConfig};
pub use error::FetchError;
pub use realtime::ChangeSubscription;
pub use source::{CollectionSource, OnChange, TableSource};
