//! # SlideShare
//!
//! A Rust client for the SlideShare REST API (v2).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slideshare::{ApiConfig, GetSlideshowsByUser, SearchSlideshows, SlideshareApi, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SlideshareApi::new(ApiConfig::from_env()?)?;
//!
//!     // Slideshows of a user
//!     let listing = api
//!         .get_slideshows_by_user(&GetSlideshowsByUser::new("miguelff"))
//!         .await?;
//!     println!("{} has {} slideshows", listing.name, listing.total_number_of_results);
//!
//!     // Search, most viewed first
//!     let search = SearchSlideshows {
//!         sort: Some(SortOrder::MostViewed),
//!         ..SearchSlideshows::new("real time web")
//!     };
//!     for slideshow in api.search_slideshows(&search).await?.iter() {
//!         println!("{} ({})", slideshow.title, slideshow.url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Signed requests**: every call carries the API key, a timestamp and its hash
//! - **Proxy support** with optional basic authentication
//! - **Service errors** surface as [`SlideshareError::Service`] with their code
//! - **Typed responses** for slideshows, groups, contacts and tags
//!
//! ## Low-Level APIs
//!
//! - [`ApiRequest`] and [`SlideshareApi::perform_get`] - call any web-method
//! - [`converters`] - XML mapping helpers
//! - [`crypto`] - request signing

pub mod api;
pub mod config;
pub mod converters;
pub mod crypto;
pub mod error;
pub mod models;

// Main interface
pub use api::SlideshareApi;
pub use config::ApiConfig;

// Web-method arguments
pub use api::{
    CheckFavorite, Credentials, DeleteSlideshow, EditSlideshow, FavoriteSlideshow, FileFormat,
    FileType, GetSlideshow, GetSlideshowsByGroup, GetSlideshowsByTag, GetSlideshowsByUser,
    GetUserContacts, GetUserGroups, GetUserTags, Language, PrivacySettings, SearchSlideshows,
    SlideshowRef, SortOrder, UploadDate, UploadSlideshow, UploadSource,
};

// Low-level APIs
pub use api::{ApiRequest, Protocol, Proxy, WebMethod};
pub use error::{Result, SlideshareError};
pub use models::{
    CheckFavoriteResponse, Contact, Group, SearchResults, Slideshow, SlideshowAck,
    SlideshowListing, SlideshowStatus, SlideshowType, Tag,
};
