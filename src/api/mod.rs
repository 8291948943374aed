//! SlideShare web API.
//!
//! - [`SlideshareApi`]: signs, sends and parses web-method calls
//! - [`ApiRequest`]: a web-method name and its parameters
//! - [`methods`]: validated arguments for each web-method

pub mod client;
pub mod methods;
pub mod proxy;
pub mod request;

pub use client::SlideshareApi;
pub use methods::{
    CheckFavorite, Credentials, DeleteSlideshow, EditSlideshow, FavoriteSlideshow, FileFormat,
    FileType, GetSlideshow, GetSlideshowsByGroup, GetSlideshowsByTag, GetSlideshowsByUser,
    GetUserContacts, GetUserGroups, GetUserTags, Language, PrivacySettings, SearchSlideshows,
    SlideshowRef, SortOrder, UploadDate, UploadSlideshow, UploadSource, WebMethod,
};
pub use proxy::Proxy;
pub use request::{ApiRequest, Protocol};
