//! # feedly - Feedly Cloud API client for Rust
//!
//! A typed Rust client for the [Feedly Cloud REST API](https://developer.feedly.com).
//! Each API resource group is exposed as a service on [`Client`], and every
//! response model keeps the fields the API returns but the model does not
//! declare in an `unmapped_fields` map, so nothing the server sends is lost.
//!
//! ## Features
//!
//! - Services for boards, collections, entries, feeds, library, markers,
//!   mixes, OPML, preferences, profile, recommendations, search, and streams
//! - Forward-compatible models: unknown response fields land in
//!   `unmapped_fields` instead of being dropped
//! - Millisecond-epoch [`Time`] type matching the API's timestamp encoding
//! - Unified [`Error`] type covering transport failures and API errors
//!
//! ## Basic Usage
//!
//! ```no_run
//! use feedly::Client;
//! use reqwest::header::{self, HeaderMap, HeaderValue};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Authentication is handled by the HTTP client
//!     let mut headers = HeaderMap::new();
//!     headers.insert(
//!         header::AUTHORIZATION,
//!         HeaderValue::from_static("Bearer <access token>"),
//!     );
//!     let http_client = reqwest::blocking::Client::builder()
//!         .default_headers(headers)
//!         .build()?;
//!
//!     let feedly = Client::new(http_client);
//!
//!     let (response, _) = feedly.collections.list(None)?;
//!     for collection in &response.collections {
//!         println!("{:?}", collection.label);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Reading a stream
//!
//! ```no_run
//! use feedly::streams::StreamContentParams;
//! # let feedly = feedly::Client::new(reqwest::blocking::Client::new());
//!
//! let params = StreamContentParams {
//!     count: Some(20),
//!     unread_only: Some(true),
//!     ..Default::default()
//! };
//! let (response, _) = feedly
//!     .streams
//!     .content("user/-/category/global.all", Some(&params))?;
//! # Ok::<(), feedly::Error>(())
//! ```

pub mod boards;
pub mod client;
pub mod collections;
mod decode;
pub mod entries;
pub mod error;
pub mod feeds;
pub mod library;
pub mod markers;
mod mime;
pub mod mixes;
pub mod opml;
pub mod preferences;
pub mod profile;
pub mod recommendations;
pub mod search;
pub mod streams;
pub mod time;
mod transport;

pub use client::{Client, Config, API_BASE_URL, API_BASE_VERSION};
pub use decode::UnmappedFields;
pub use error::{ApiError, Error, Result};
pub use time::Time;
pub use transport::HttpResponse;
