//! Arguments of every supported web-method.
//!
//! Each options type checks its arguments against the constraints the
//! service documents and maps them onto the service's parameter names.
//! Nothing is sent when validation fails.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::request::ApiRequest;
use crate::error::{Result, SlideshareError};
use crate::models::{
    CheckFavoriteResponse, ContactList, GroupList, SearchResults, Slideshow, SlideshowAck,
    SlideshowListing, TagList,
};

/// A remote web-method: its name, response document and parameters.
pub trait WebMethod {
    /// Name of the web-method, appended to the API base URL.
    const NAME: &'static str;

    /// Document the service answers with.
    type Response: DeserializeOwned;

    /// Check the arguments before anything is sent.
    fn validate(&self) -> Result<()>;

    /// Add this method's parameters to a request.
    fn apply(&self, request: ApiRequest) -> ApiRequest;

    /// Validate and build the unsigned request.
    fn to_request(&self) -> Result<ApiRequest> {
        self.validate()?;
        Ok(self.apply(ApiRequest::new(Self::NAME)?))
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SlideshareError::invalid(format!("{} cannot be empty", name)));
    }
    Ok(())
}

fn positive(name: &str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(SlideshareError::invalid(format!(
            "{} must be a positive integer",
            name
        ))),
        _ => Ok(()),
    }
}

fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Username and password of the SlideShare account a call acts for.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Create credentials for an account.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        require("username", &self.username)?;
        require("password", &self.password)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .param("username", &self.username)
            .param("password", &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn validate_credentials(credentials: Option<&Credentials>) -> Result<()> {
    credentials.map_or(Ok(()), Credentials::validate)
}

fn apply_credentials(credentials: Option<&Credentials>, request: ApiRequest) -> ApiRequest {
    match credentials {
        Some(c) => c.apply(request),
        None => request,
    }
}

/// Declares a closed set of codes the service accepts for a parameter.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Code sent to the service.
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = SlideshareError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($code => Ok($name::$variant),)+
                    other => Err(SlideshareError::invalid(format!(
                        "'{}' is not a valid {}",
                        other, $what
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

code_enum! {
    /// Language filter for searches.
    Language, "language code" {
        /// English.
        English => "en",
        /// Spanish.
        Spanish => "es",
        /// Portuguese.
        Portuguese => "pt",
        /// French.
        French => "fr",
        /// Italian.
        Italian => "it",
        /// Dutch.
        Dutch => "nl",
        /// German.
        German => "de",
        /// Chinese.
        Chinese => "zh",
        /// Japanese.
        Japanese => "ja",
        /// Korean.
        Korean => "ko",
        /// Romanian.
        Romanian => "ro",
        /// Russian.
        Russian => "ru",
        /// Polish.
        Polish => "pl",
        /// Turkish.
        Turkish => "tr",
        /// Swedish.
        Swedish => "sv",
        /// Any language.
        All => "**",
        /// Languages not listed above.
        Other => "!!",
    }
}

code_enum! {
    /// Ordering of search results.
    SortOrder, "sort order" {
        /// Best match first.
        Relevance => "relevance",
        /// Most viewed first.
        MostViewed => "mostviewed",
        /// Most downloaded first.
        MostDownloaded => "mostdownloaded",
        /// Newest first.
        Latest => "latest",
    }
}

code_enum! {
    /// Upload date filter for searches.
    UploadDate, "upload date" {
        /// Any time.
        Any => "any",
        /// Last week.
        Week => "week",
        /// Last month.
        Month => "month",
        /// Last year.
        Year => "year",
    }
}

code_enum! {
    /// Source file format filter for searches.
    FileFormat, "file format" {
        /// Every format.
        All => "all",
        /// PDF.
        Pdf => "pdf",
        /// PowerPoint.
        Ppt => "ppt",
        /// OpenDocument presentation.
        Odp => "odp",
        /// PowerPoint show.
        Pps => "pps",
        /// PowerPoint template.
        Pot => "pot",
    }
}

code_enum! {
    /// Document kind filter for searches.
    FileType, "file type" {
        /// Every kind.
        All => "all",
        /// Presentations.
        Presentations => "presentations",
        /// Documents.
        Documents => "documents",
        /// Webinars.
        Webinars => "webinars",
        /// Videos.
        Videos => "videos",
    }
}

/// How `get_slideshow` identifies the slideshow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideshowRef {
    /// By slideshow ID.
    Id(String),
    /// By web permalink.
    Url(String),
}

/// Arguments of `get_slideshow`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetSlideshow {
    /// Slideshow to fetch.
    pub slideshow: SlideshowRef,
    /// Needed to fetch private slideshows.
    pub credentials: Option<Credentials>,
    /// Leave tags out of the response.
    pub exclude_tags: Option<bool>,
    /// Include owner, privacy and related-slideshow fields.
    pub detailed: Option<bool>,
}

impl GetSlideshow {
    /// Fetch a slideshow by ID.
    pub fn by_id<S: Into<String>>(slideshow_id: S) -> Self {
        Self::new(SlideshowRef::Id(slideshow_id.into()))
    }

    /// Fetch a slideshow by URL.
    pub fn by_url<S: Into<String>>(slideshow_url: S) -> Self {
        Self::new(SlideshowRef::Url(slideshow_url.into()))
    }

    fn new(slideshow: SlideshowRef) -> Self {
        Self {
            slideshow,
            credentials: None,
            exclude_tags: None,
            detailed: None,
        }
    }
}

impl WebMethod for GetSlideshow {
    const NAME: &'static str = "get_slideshow";
    type Response = Slideshow;

    fn validate(&self) -> Result<()> {
        match &self.slideshow {
            SlideshowRef::Id(id) => require("slideshow_id", id)?,
            SlideshowRef::Url(url) => require("slideshow_url", url)?,
        }
        validate_credentials(self.credentials.as_ref())
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        let request = match &self.slideshow {
            SlideshowRef::Id(id) => request.param("slideshow_id", id),
            SlideshowRef::Url(url) => request.param("slideshow_url", url),
        };
        apply_credentials(self.credentials.as_ref(), request)
            .flag_param("exclude_tags", self.exclude_tags)
            .flag_param("detailed", self.detailed)
    }
}

/// Arguments of `get_slideshows_by_tag`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSlideshowsByTag {
    /// Tag to list slideshows for.
    pub tag: String,
    /// Maximum number of slideshows to return.
    pub limit: Option<u32>,
    /// Number of slideshows to skip.
    pub offset: Option<u32>,
    /// Include detailed slideshow fields.
    pub detailed: Option<bool>,
}

impl GetSlideshowsByTag {
    /// List slideshows tagged with `tag`.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }
}

impl WebMethod for GetSlideshowsByTag {
    const NAME: &'static str = "get_slideshows_by_tag";
    type Response = SlideshowListing;

    fn validate(&self) -> Result<()> {
        require("tag", &self.tag)?;
        positive("limit", self.limit)?;
        positive("offset", self.offset)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .param("tag", &self.tag)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .flag_param("detailed", self.detailed)
    }
}

/// Arguments of `get_slideshows_by_group`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSlideshowsByGroup {
    /// Query name of the group.
    pub group_name: String,
    /// Maximum number of slideshows to return.
    pub limit: Option<u32>,
    /// Number of slideshows to skip.
    pub offset: Option<u32>,
    /// Include detailed slideshow fields.
    pub detailed: Option<bool>,
}

impl GetSlideshowsByGroup {
    /// List slideshows posted to `group_name`.
    pub fn new<S: Into<String>>(group_name: S) -> Self {
        Self {
            group_name: group_name.into(),
            ..Default::default()
        }
    }
}

impl WebMethod for GetSlideshowsByGroup {
    const NAME: &'static str = "get_slideshows_by_group";
    type Response = SlideshowListing;

    fn validate(&self) -> Result<()> {
        require("group_name", &self.group_name)?;
        positive("limit", self.limit)?;
        positive("offset", self.offset)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .param("group_name", &self.group_name)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
            .flag_param("detailed", self.detailed)
    }
}

/// Arguments of `get_slideshows_by_user`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSlideshowsByUser {
    /// User whose slideshows are listed.
    pub username_for: String,
    /// Needed to include private slideshows.
    pub credentials: Option<Credentials>,
    /// Maximum number of slideshows to return.
    pub limit: Option<u32>,
    /// Number of slideshows to skip.
    pub offset: Option<u32>,
    /// Include detailed slideshow fields.
    pub detailed: Option<bool>,
    /// Include slideshows that failed to convert or are still converting.
    pub get_unconverted: Option<bool>,
}

impl GetSlideshowsByUser {
    /// List slideshows owned by `username_for`.
    pub fn new<S: Into<String>>(username_for: S) -> Self {
        Self {
            username_for: username_for.into(),
            ..Default::default()
        }
    }
}

impl WebMethod for GetSlideshowsByUser {
    const NAME: &'static str = "get_slideshows_by_user";
    type Response = SlideshowListing;

    fn validate(&self) -> Result<()> {
        require("username_for", &self.username_for)?;
        validate_credentials(self.credentials.as_ref())?;
        positive("limit", self.limit)?;
        positive("offset", self.offset)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        apply_credentials(
            self.credentials.as_ref(),
            request.param("username_for", &self.username_for),
        )
        .opt_param("limit", self.limit)
        .opt_param("offset", self.offset)
        .flag_param("detailed", self.detailed)
        .flag_param("get_unconverted", self.get_unconverted)
    }
}

/// Arguments of `search_slideshows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSlideshows {
    /// Search query.
    pub q: String,
    /// Page of results, starting at 1.
    pub page: Option<u32>,
    /// Results per page.
    pub items_per_page: Option<u32>,
    /// Language filter.
    pub lang: Option<Language>,
    /// Result ordering.
    pub sort: Option<SortOrder>,
    /// Upload date filter.
    pub upload_date: Option<UploadDate>,
    /// Match the query against tags only instead of the full text.
    pub search_in_tags_only: Option<bool>,
    /// Only return slideshows that can be downloaded.
    pub restrict_to_downloadables: Option<bool>,
    /// Source format filter.
    pub file_format: Option<FileFormat>,
    /// Document kind filter.
    pub file_type: Option<FileType>,
    /// Only return Creative Commons licensed slideshows.
    pub restrict_to_cc: Option<bool>,
    /// Only return slideshows licensed for adaptation.
    pub restrict_to_cc_adapt: Option<bool>,
    /// Only return slideshows licensed for commercial use.
    pub restrict_to_cc_commercial: Option<bool>,
    /// Include detailed slideshow fields.
    pub detailed: Option<bool>,
}

impl SearchSlideshows {
    /// Search for `q` with the service defaults.
    pub fn new<S: Into<String>>(q: S) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

impl WebMethod for SearchSlideshows {
    const NAME: &'static str = "search_slideshows";
    type Response = SearchResults;

    fn validate(&self) -> Result<()> {
        require("q", &self.q)?;
        positive("page", self.page)?;
        positive("items_per_page", self.items_per_page)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .param("q", &self.q)
            .opt_param("page", self.page)
            .opt_param("items_per_page", self.items_per_page)
            .opt_param("lang", self.lang)
            .opt_param("sort", self.sort)
            .opt_param("upload_date", self.upload_date)
            .opt_param(
                "what",
                self.search_in_tags_only
                    .map(|tags_only| if tags_only { "tag" } else { "text" }),
            )
            .flag_param("download", self.restrict_to_downloadables)
            .opt_param("fileformat", self.file_format)
            .opt_param("file_type", self.file_type)
            .flag_param("cc", self.restrict_to_cc)
            .flag_param("cc_adapt", self.restrict_to_cc_adapt)
            .flag_param("cc_commercial", self.restrict_to_cc_commercial)
            .flag_param("detailed", self.detailed)
    }
}

/// Arguments of `get_user_groups`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetUserGroups {
    /// User whose groups are listed.
    pub username_for: String,
    /// Needed to include private groups.
    pub credentials: Option<Credentials>,
}

impl GetUserGroups {
    /// List the groups `username_for` belongs to.
    pub fn new<S: Into<String>>(username_for: S) -> Self {
        Self {
            username_for: username_for.into(),
            credentials: None,
        }
    }
}

impl WebMethod for GetUserGroups {
    const NAME: &'static str = "get_user_groups";
    type Response = GroupList;

    fn validate(&self) -> Result<()> {
        require("username_for", &self.username_for)?;
        validate_credentials(self.credentials.as_ref())
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        apply_credentials(
            self.credentials.as_ref(),
            request.param("username_for", &self.username_for),
        )
    }
}

/// Arguments of `get_user_contacts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetUserContacts {
    /// User whose contacts are listed.
    pub username_for: String,
    /// Maximum number of contacts to return.
    pub limit: Option<u32>,
    /// Number of contacts to skip.
    pub offset: Option<u32>,
}

impl GetUserContacts {
    /// List the contacts of `username_for`.
    pub fn new<S: Into<String>>(username_for: S) -> Self {
        Self {
            username_for: username_for.into(),
            ..Default::default()
        }
    }
}

impl WebMethod for GetUserContacts {
    const NAME: &'static str = "get_user_contacts";
    type Response = ContactList;

    fn validate(&self) -> Result<()> {
        require("username_for", &self.username_for)?;
        positive("limit", self.limit)?;
        positive("offset", self.offset)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .param("username_for", &self.username_for)
            .opt_param("limit", self.limit)
            .opt_param("offset", self.offset)
    }
}

/// Arguments of `get_user_tags`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetUserTags {
    /// Account whose tags are listed.
    pub credentials: Credentials,
}

impl GetUserTags {
    /// List the tags used by the account.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl WebMethod for GetUserTags {
    const NAME: &'static str = "get_user_tags";
    type Response = TagList;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        self.credentials.apply(request)
    }
}

/// Privacy settings shared by `edit_slideshow` and `upload_slideshow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivacySettings {
    /// Make the slideshow private.
    pub make_private: Option<bool>,
    /// Generate a secret URL. Requires `make_private`.
    pub generate_secret_url: Option<bool>,
    /// Allow embedding. Requires `make_private`.
    pub allow_embeds: Option<bool>,
    /// Let contacts view it while private. Requires `make_private`.
    pub share_with_contacts: Option<bool>,
}

impl PrivacySettings {
    fn validate(&self) -> Result<()> {
        if self.make_private.is_some() {
            return Ok(());
        }
        let dependent = [
            ("generate_secret_url", self.generate_secret_url),
            ("allow_embeds", self.allow_embeds),
            ("share_with_contacts", self.share_with_contacts),
        ];
        match dependent.iter().find(|(_, value)| value.is_some()) {
            Some((name, _)) => Err(SlideshareError::invalid(format!(
                "{} can only be set together with make_private",
                name
            ))),
            None => Ok(()),
        }
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .yes_no_param("make_slideshow_private", self.make_private)
            .yes_no_param("generate_secret_url", self.generate_secret_url)
            .yes_no_param("allow_embeds", self.allow_embeds)
            .yes_no_param("share_with_contacts", self.share_with_contacts)
    }
}

/// Arguments of `edit_slideshow`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSlideshow {
    /// Owner of the slideshow.
    pub credentials: Credentials,
    /// Slideshow to edit.
    pub slideshow_id: String,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New tags, replacing the current ones.
    pub tags: Option<Vec<String>>,
    /// New privacy settings.
    pub privacy: PrivacySettings,
}

impl EditSlideshow {
    /// Edit `slideshow_id`, changing nothing yet.
    pub fn new<S: Into<String>>(credentials: Credentials, slideshow_id: S) -> Self {
        Self {
            credentials,
            slideshow_id: slideshow_id.into(),
            title: None,
            description: None,
            tags: None,
            privacy: PrivacySettings::default(),
        }
    }
}

impl WebMethod for EditSlideshow {
    const NAME: &'static str = "edit_slideshow";
    type Response = SlideshowAck;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        require("slideshow_id", &self.slideshow_id)?;
        self.privacy.validate()
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        let request = self
            .credentials
            .apply(request)
            .param("slideshow_id", &self.slideshow_id)
            .opt_param("slideshow_title", self.title.as_deref())
            .opt_param("slideshow_description", self.description.as_deref())
            .opt_param("slideshow_tags", self.tags.as_deref().map(join_tags));
        self.privacy.apply(request)
    }
}

/// Arguments of `delete_slideshow`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteSlideshow {
    /// Owner of the slideshow.
    pub credentials: Credentials,
    /// Slideshow to delete.
    pub slideshow_id: String,
}

impl DeleteSlideshow {
    /// Delete `slideshow_id`.
    pub fn new<S: Into<String>>(credentials: Credentials, slideshow_id: S) -> Self {
        Self {
            credentials,
            slideshow_id: slideshow_id.into(),
        }
    }
}

impl WebMethod for DeleteSlideshow {
    const NAME: &'static str = "delete_slideshow";
    type Response = SlideshowAck;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        require("slideshow_id", &self.slideshow_id)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        self.credentials
            .apply(request)
            .param("slideshow_id", &self.slideshow_id)
    }
}

/// Arguments of `favorite_slideshow`.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteSlideshow {
    /// Account marking the favorite.
    pub credentials: Credentials,
    /// Slideshow to favorite.
    pub slideshow_id: String,
}

impl FavoriteSlideshow {
    /// Mark `slideshow_id` as a favorite of the account.
    pub fn new<S: Into<String>>(credentials: Credentials, slideshow_id: S) -> Self {
        Self {
            credentials,
            slideshow_id: slideshow_id.into(),
        }
    }
}

impl WebMethod for FavoriteSlideshow {
    const NAME: &'static str = "favorite_slideshow";
    type Response = SlideshowAck;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        require("slideshow_id", &self.slideshow_id)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        self.credentials
            .apply(request)
            .param("slideshow_id", &self.slideshow_id)
    }
}

/// Arguments of `check_favorite`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFavorite {
    /// Account to check.
    pub credentials: Credentials,
    /// Slideshow to check.
    pub slideshow_id: String,
}

impl CheckFavorite {
    /// Check whether the account has favorited `slideshow_id`.
    pub fn new<S: Into<String>>(credentials: Credentials, slideshow_id: S) -> Self {
        Self {
            credentials,
            slideshow_id: slideshow_id.into(),
        }
    }
}

impl WebMethod for CheckFavorite {
    const NAME: &'static str = "check_favorite";
    type Response = CheckFavoriteResponse;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        require("slideshow_id", &self.slideshow_id)
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        self.credentials
            .apply(request)
            .param("slideshow_id", &self.slideshow_id)
    }
}

/// Where `upload_slideshow` takes the source document from.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadSource {
    /// A file on disk, sent as a multipart part.
    File(PathBuf),
    /// In-memory content, sent as a multipart part.
    Bytes {
        /// File name reported to the service; its extension gives the format.
        file_name: String,
        /// File content.
        content: Bytes,
    },
    /// A publicly reachable URL the service fetches the file from.
    Url(String),
}

/// Arguments of `upload_slideshow`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSlideshow {
    /// Account the slideshow is uploaded to.
    pub credentials: Credentials,
    /// Title.
    pub title: String,
    /// Source document.
    pub source: UploadSource,
    /// Description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Let visitors download the source file.
    pub make_src_public: Option<bool>,
    /// Privacy settings.
    pub privacy: PrivacySettings,
}

impl UploadSlideshow {
    /// Upload `source` under `title`.
    pub fn new<S: Into<String>>(credentials: Credentials, title: S, source: UploadSource) -> Self {
        Self {
            credentials,
            title: title.into(),
            source,
            description: None,
            tags: None,
            make_src_public: None,
            privacy: PrivacySettings::default(),
        }
    }
}

impl WebMethod for UploadSlideshow {
    const NAME: &'static str = "upload_slideshow";
    type Response = SlideshowAck;

    fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        require("slideshow_title", &self.title)?;
        match &self.source {
            UploadSource::File(path) => require("slideshow_srcfile", &path.to_string_lossy())?,
            UploadSource::Bytes { file_name, content } => {
                require("slideshow_srcfile name", file_name)?;
                if content.is_empty() {
                    return Err(SlideshareError::invalid("slideshow_srcfile cannot be empty"));
                }
            }
            UploadSource::Url(url) => require("upload_url", url)?,
        }
        self.privacy.validate()
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        let request = self
            .credentials
            .apply(request)
            .param("slideshow_title", &self.title)
            .opt_param("slideshow_description", self.description.as_deref())
            .opt_param("slideshow_tags", self.tags.as_deref().map(join_tags))
            .yes_no_param("make_src_public", self.make_src_public);
        let request = match &self.source {
            UploadSource::Url(url) => request.param("upload_url", url),
            UploadSource::File(_) | UploadSource::Bytes { .. } => request,
        };
        self.privacy.apply(request)
    }
}
