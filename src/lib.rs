//! News reader for the newsdata.io API.
//!
//! [`feed::NewsClient`] fetches one page of articles for a set of
//! [`models::FilterParameters`]; [`feed::NewsController`] owns the current
//! filters and publishes the article list to observers, applying only the
//! response to the most recent request.

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
pub use feed::{ControllerState, NewsClient, NewsController, NewsSource};
pub use models::{ArticleRecord, FetchResult, FilterParameters};
