//! Newsdesk - News Publishing Backend
//!
//! CRUD over posts, served over HTTP, stored in whichever backend was
//! selected at startup:
//! - `memdb` - process-local map
//! - `postgres` - posts joined with authors
//! - `mongo` - denormalized documents
//!
//! The storage contract lives in `newsdesk-store`; this crate only wires
//! flags, logging and the HTTP surface around it.

pub mod api;
pub mod config;

pub use config::{Cli, DbKind, APP_NAME, APP_VERSION};
