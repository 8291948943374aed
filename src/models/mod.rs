//! Data models for SlideShare API responses.
//!
//! Each model mirrors one XML document of the remote schema; the field
//! attributes say which element or attribute a field is read from.

pub mod common;
pub mod contact;
pub mod group;
pub mod listing;
pub mod responses;
pub mod slideshow;
pub mod tag;

// Re-exports for convenience
pub use common::{SlideshowStatus, SlideshowType};
pub use contact::{Contact, ContactList};
pub use group::{Group, GroupList};
pub use listing::{SearchMeta, SearchResults, SlideshowListing};
pub use responses::{CheckFavoriteResponse, ServiceError, SlideshowAck};
pub use slideshow::{RelatedSlideshow, RelatedSlideshows, Slideshow};
pub use tag::{Tag, TagList};
