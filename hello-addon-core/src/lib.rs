//! # hello-addon core
//!
//! Request dispatch and resource resolution for a content-catalog add-on.
//!
//! ## Overview
//!
//! - **Store**: immutable catalog and stream tables plus the manifest, loaded
//!   once ([`store::CatalogStore`])
//! - **Request parsing**: `/<type>/<id>[/<extra>...][.<ext>]` into a
//!   [`request::ParsedRequest`]
//! - **Handlers**: manifest, catalog, meta and stream resources, each a
//!   [`handlers::ResourceHandler`] that either answers or declines
//! - **Dispatch**: [`dispatch::Dispatcher`] walks the handlers in a fixed
//!   order and falls back to a plain-text 404
//!
//! Nothing here performs I/O after the store is built, so a single
//! [`dispatch::Dispatcher`] can be shared across any number of request tasks.

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod mount;
pub mod poster;
pub mod request;
pub mod response;
pub mod store;

pub use dispatch::Dispatcher;
pub use error::{Result, StoreError};
pub use mount::{Mount, Resource};
pub use poster::PosterTemplate;
pub use request::ParsedRequest;
pub use response::{AddonBody, AddonResponse};
pub use store::{CatalogStore, DanglingStream};
