//! # content-studio
//!
//! Content management service: projects group content items (blog posts,
//! social posts, emails, scripts), and a template-driven generator drafts
//! their bodies from a title and a topic.
//!
//! The generator is a pure function over a fixed set of templates; see
//! [`content::generate`]. The HTTP surface lives in [`http_server`].

pub mod config;
pub mod content;
pub mod error;
pub mod http_server;
pub mod logging;
pub mod store;

pub use config::AppConfig;
pub use content::{generate, ContentType};
pub use error::{Error, Result};
pub use http_server::{create_router, AppState, HttpServer};
