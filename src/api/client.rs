//! SlideShare API client.
//!
//! Every call is signed with the API key, a timestamp and the SHA-1 hash of
//! the shared secret plus that timestamp. Responses are checked for a
//! `SlideShareServiceError` document before they are parsed.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use tracing::{debug, error, info};

use super::methods::{
    CheckFavorite, DeleteSlideshow, EditSlideshow, FavoriteSlideshow, GetSlideshow,
    GetSlideshowsByGroup, GetSlideshowsByTag, GetSlideshowsByUser, GetUserContacts,
    GetUserGroups, GetUserTags, SearchSlideshows, UploadSlideshow, UploadSource, WebMethod,
};
use super::request::ApiRequest;
use crate::config::ApiConfig;
use crate::converters;
use crate::crypto::AuthParams;
use crate::error::{Result, SlideshareError};
use crate::models::{
    CheckFavoriteResponse, Contact, Group, SearchResults, Slideshow, SlideshowAck,
    SlideshowListing, Tag,
};

/// Multipart field carrying the uploaded document.
const UPLOAD_FILE_FIELD: &str = "slideshow_srcfile";

/// SlideShare API client.
///
/// # Example
///
/// ```rust,no_run
/// use slideshare::{ApiConfig, GetSlideshow, SlideshareApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SlideshareApi::new(ApiConfig::new("api_key", "shared_secret"))?;
///     let slideshow = api.get_slideshow(&GetSlideshow::by_id("5229002")).await?;
///     println!("{} by {}", slideshow.title, slideshow.username);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SlideshareApi {
    client: Client,
    config: ApiConfig,
    base_url: Url,
}

impl SlideshareApi {
    /// Create a client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout);
        builder = match &config.proxy {
            Some(proxy) => builder.proxy(proxy.to_reqwest()?),
            None => builder.no_proxy(),
        };
        let client = builder.build()?;

        match &config.proxy {
            Some(proxy) => info!("SlideShare client for {} through proxy {}", base_url, proxy),
            None => info!("SlideShare client for {}", base_url),
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Add the `api_key`, `ts` and `hash` parameters to a request.
    fn sign(&self, request: &ApiRequest) -> ApiRequest {
        let auth = AuthParams::new(&self.config.api_key, &self.config.shared_secret);
        auth.to_params()
            .into_iter()
            .fold(request.clone(), |request, (name, value)| {
                request.param(name, value)
            })
    }

    /// Sign and send a request as a GET, returning the response body.
    pub async fn perform_get(&self, request: &ApiRequest) -> Result<String> {
        let url = self.sign(request).url(&self.base_url)?;
        debug!("GET {} ({} params)", request.method(), request.params().len());

        let response = self.client.get(url).send().await?;
        self.read_body(request, response).await
    }

    /// Sign and send a request as a multipart POST, returning the response body.
    ///
    /// Every parameter is added to `form` as a text field.
    pub async fn perform_post(&self, request: &ApiRequest, form: Form) -> Result<String> {
        let url = request.endpoint(&self.base_url)?;
        debug!("POST {} ({} params)", request.method(), request.params().len());

        let form = self
            .sign(request)
            .params()
            .iter()
            .fold(form, |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self.client.post(url).multipart(form).send().await?;
        self.read_body(request, response).await
    }

    async fn read_body(&self, request: &ApiRequest, response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if let Some(service_error) = converters::check_service_error(&body) {
            return Err(service_error.into());
        }
        if !status.is_success() {
            error!("{} failed with HTTP status {}", request.method(), status);
            return Err(SlideshareError::HttpStatus(status));
        }
        Ok(body)
    }

    async fn call<M: WebMethod>(&self, method: &M) -> Result<M::Response> {
        let request = method.to_request()?;
        let body = self.perform_get(&request).await?;
        converters::from_xml(&body)
    }

    /// Get a slideshow by ID or URL.
    pub async fn get_slideshow(&self, options: &GetSlideshow) -> Result<Slideshow> {
        self.call(options).await
    }

    /// Get the slideshows tagged with a tag.
    pub async fn get_slideshows_by_tag(
        &self,
        options: &GetSlideshowsByTag,
    ) -> Result<SlideshowListing> {
        self.call(options).await
    }

    /// Get the slideshows posted to a group.
    pub async fn get_slideshows_by_group(
        &self,
        options: &GetSlideshowsByGroup,
    ) -> Result<SlideshowListing> {
        self.call(options).await
    }

    /// Get the slideshows owned by a user.
    pub async fn get_slideshows_by_user(
        &self,
        options: &GetSlideshowsByUser,
    ) -> Result<SlideshowListing> {
        self.call(options).await
    }

    /// Search slideshows.
    pub async fn search_slideshows(&self, options: &SearchSlideshows) -> Result<SearchResults> {
        self.call(options).await
    }

    /// Get the groups a user belongs to.
    pub async fn get_user_groups(&self, options: &GetUserGroups) -> Result<Vec<Group>> {
        Ok(self.call(options).await?.items)
    }

    /// Get the contacts of a user.
    pub async fn get_user_contacts(&self, options: &GetUserContacts) -> Result<Vec<Contact>> {
        Ok(self.call(options).await?.items)
    }

    /// Get the tags used by the authenticated user.
    pub async fn get_user_tags(&self, options: &GetUserTags) -> Result<Vec<Tag>> {
        Ok(self.call(options).await?.items)
    }

    /// Edit title, description, tags or privacy of a slideshow.
    pub async fn edit_slideshow(&self, options: &EditSlideshow) -> Result<SlideshowAck> {
        self.call(options).await
    }

    /// Delete a slideshow.
    pub async fn delete_slideshow(&self, options: &DeleteSlideshow) -> Result<SlideshowAck> {
        self.call(options).await
    }

    /// Mark a slideshow as a favorite of the authenticated user.
    pub async fn favorite_slideshow(&self, options: &FavoriteSlideshow) -> Result<SlideshowAck> {
        self.call(options).await
    }

    /// Check whether the authenticated user has favorited a slideshow.
    pub async fn check_favorite(&self, options: &CheckFavorite) -> Result<CheckFavoriteResponse> {
        self.call(options).await
    }

    /// Upload a slideshow.
    ///
    /// Local files and in-memory content are sent as a multipart POST; an
    /// upload URL is sent as a plain GET and fetched by the service.
    pub async fn upload_slideshow(&self, options: &UploadSlideshow) -> Result<SlideshowAck> {
        let request = options.to_request()?;
        let part = match &options.source {
            UploadSource::Url(_) => {
                let body = self.perform_get(&request).await?;
                return converters::from_xml(&body);
            }
            UploadSource::File(path) => file_part(path).await?,
            UploadSource::Bytes { file_name, content } => {
                Part::stream(content.clone()).file_name(file_name.clone())
            }
        };

        let form = Form::new().part(UPLOAD_FILE_FIELD, part);
        let body = self.perform_post(&request, form).await?;
        converters::from_xml(&body)
    }
}

async fn file_part(path: &Path) -> Result<Part> {
    let content = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SlideshareError::invalid(format!("'{}' is not a file", path.display()))
        })?;
    debug!("Uploading {} ({} bytes)", file_name, content.len());
    Ok(Part::bytes(content).file_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Credentials, Protocol, Proxy};
    use crate::crypto;
    use bytes::Bytes;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tokio_test::{assert_err, assert_ok};

    /// A request as seen by the mock server.
    struct Captured {
        head: String,
        body: String,
    }

    impl Captured {
        fn request_line(&self) -> &str {
            self.head.lines().next().unwrap_or("")
        }

        fn query(&self) -> HashMap<String, String> {
            let target = self.request_line().split(' ').nth(1).unwrap();
            let url = Url::parse("http://localhost")
                .unwrap()
                .join(target)
                .unwrap();
            url.query_pairs().into_owned().collect()
        }

        fn header(&self, name: &str) -> Option<String> {
            self.head.lines().skip(1).find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim().to_string())
            })
        }
    }

    fn body_complete(head: &str, body: &[u8]) -> bool {
        let lower = head.to_ascii_lowercase();
        if let Some(length) = lower
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
        {
            return body.len() >= length.trim().parse::<usize>().unwrap();
        }
        if lower.contains("transfer-encoding: chunked") {
            return body.ends_with(b"0\r\n\r\n");
        }
        true
    }

    /// Serve one canned HTTP response and hand back the request it answered.
    async fn serve_once(status: &'static str, xml: &'static str) -> (Url, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 4096];
            let captured = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buffer.extend_from_slice(&chunk[..n]);
                if let Some(end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buffer[..end]).into_owned();
                    let body = &buffer[end + 4..];
                    if n == 0 || body_complete(&head, body) {
                        break Captured {
                            head,
                            body: String::from_utf8_lossy(body).into_owned(),
                        };
                    }
                }
                assert!(n > 0, "connection closed before the request was complete");
            };

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                xml.len(),
                xml
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            captured
        });

        let base = Url::parse(&format!("http://{}/api/2/", addr)).unwrap();
        (base, handle)
    }

    fn api(base: Url) -> SlideshareApi {
        SlideshareApi::new(ApiConfig::new("key", "secret").base_url_override(base)).unwrap()
    }

    fn assert_signed(query: &HashMap<String, String>) {
        assert_eq!(query["api_key"], "key");
        let ts: i64 = query["ts"].parse().unwrap();
        assert_eq!(query["hash"], crypto::sign("secret", ts));
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        assert_err!(SlideshareApi::new(ApiConfig::new("", "secret")));
        assert_err!(SlideshareApi::new(ApiConfig::new("key", "")));
        assert_ok!(SlideshareApi::new(ApiConfig::new("key", "secret")));
    }

    #[tokio::test]
    async fn test_get_slideshow_sends_signed_request() {
        let (base, server) = serve_once(
            "200 OK",
            "<Slideshow><ID>5229002</ID><Title>Real time</Title></Slideshow>",
        )
        .await;

        let options = GetSlideshow {
            detailed: Some(true),
            ..GetSlideshow::by_id("5229002")
        };
        let slideshow = assert_ok!(api(base).get_slideshow(&options).await);
        assert_eq!(slideshow.slideshow_id, "5229002");
        assert_eq!(slideshow.title, "Real time");

        let captured = server.await.unwrap();
        assert!(captured
            .request_line()
            .starts_with("GET /api/2/get_slideshow?"));
        let query = captured.query();
        assert_signed(&query);
        assert_eq!(query["slideshow_id"], "5229002");
        assert_eq!(query["detailed"], "1");
        assert!(!query.contains_key("exclude_tags"));
    }

    #[tokio::test]
    async fn test_service_error_is_reported_with_code() {
        let (base, server) = serve_once(
            "200 OK",
            r#"<SlideShareServiceError><Message ID="9">SlideShow Not Found</Message></SlideShareServiceError>"#,
        )
        .await;

        let err = assert_err!(api(base).get_slideshow(&GetSlideshow::by_id("1")).await);
        assert_eq!(err.service_code(), Some(9));
        assert_eq!(err.to_string(), "Error (9): SlideShow Not Found");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_service_error_wins_over_http_status() {
        let (base, server) = serve_once(
            "500 Internal Server Error",
            r#"<SlideShareServiceError><Message ID="99">Account Exceeded Daily Limit</Message></SlideShareServiceError>"#,
        )
        .await;

        let err = assert_err!(
            api(base)
                .get_user_contacts(&GetUserContacts::new("someone"))
                .await
        );
        assert_eq!(err.service_code(), Some(99));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_status_without_error_document() {
        let (base, server) = serve_once("503 Service Unavailable", "").await;

        let err = assert_err!(
            api(base)
                .get_slideshows_by_tag(&GetSlideshowsByTag::new("ruby"))
                .await
        );
        assert!(matches!(
            err,
            SlideshareError::HttpStatus(status) if status.as_u16() == 503
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_not_sent() {
        let api = api(Url::parse("http://127.0.0.1:9/api/2/").unwrap());
        let err = assert_err!(api.search_slideshows(&SearchSlideshows::new("")).await);
        assert!(matches!(err, SlideshareError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_user_tags_are_unwrapped() {
        let (base, server) = serve_once(
            "200 OK",
            r#"<Tags><Tag Count="2" Owner="1">rails</Tag><Tag Count="1">ruby</Tag></Tags>"#,
        )
        .await;

        let tags = assert_ok!(
            api(base)
                .get_user_tags(&GetUserTags::new(Credentials::new("foo", "bar")))
                .await
        );
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "rails");
        assert_eq!(tags[0].used_by_owner, Some(true));
        assert_eq!(tags[1].used_by_owner, None);

        let query = server.await.unwrap().query();
        assert_signed(&query);
        assert_eq!(query["username"], "foo");
        assert_eq!(query["password"], "bar");
    }

    #[tokio::test]
    async fn test_search_maps_options_onto_params() {
        let (base, server) = serve_once(
            "200 OK",
            "<Slideshows><Meta><Query>art</Query><ResultOffset>1</ResultOffset>\
             <NumResults>0</NumResults><TotalResults>0</TotalResults></Meta></Slideshows>",
        )
        .await;

        let options = SearchSlideshows {
            search_in_tags_only: Some(false),
            restrict_to_downloadables: Some(true),
            lang: Some("es".parse().unwrap()),
            ..SearchSlideshows::new("art")
        };
        let results = assert_ok!(api(base).search_slideshows(&options).await);
        assert_eq!(results.query(), "art");
        assert_eq!(results.iter().count(), 0);

        let query = server.await.unwrap().query();
        assert_eq!(query["q"], "art");
        assert_eq!(query["what"], "text");
        assert_eq!(query["download"], "1");
        assert_eq!(query["lang"], "es");
    }

    #[tokio::test]
    async fn test_upload_posts_multipart_form() {
        let (base, server) = serve_once(
            "200 OK",
            "<SlideShowUploaded><SlideShowID>12345</SlideShowID></SlideShowUploaded>",
        )
        .await;

        let options = UploadSlideshow {
            tags: Some(vec!["rust".to_string(), "xml".to_string()]),
            ..UploadSlideshow::new(
                Credentials::new("foo", "bar"),
                "My deck",
                UploadSource::Bytes {
                    file_name: "deck.pdf".to_string(),
                    content: Bytes::from_static(b"%PDF-1.4 fake"),
                },
            )
        };
        let ack = assert_ok!(api(base).upload_slideshow(&options).await);
        assert_eq!(ack.slideshow_id, "12345");
        assert!(ack.is_success());

        let captured = server.await.unwrap();
        assert_eq!(
            captured.request_line(),
            "POST /api/2/upload_slideshow HTTP/1.1"
        );
        assert!(captured
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data"));
        for field in [
            "api_key", "ts", "hash", "username", "password", "slideshow_title", "slideshow_tags",
        ] {
            assert!(
                captured.body.contains(&format!("name=\"{}\"", field)),
                "missing form field {}",
                field
            );
        }
        assert!(captured.body.contains("rust,xml"));
        assert!(captured
            .body
            .contains("name=\"slideshow_srcfile\"; filename=\"deck.pdf\""));
        assert!(captured.body.contains("%PDF-1.4 fake"));
    }

    #[tokio::test]
    async fn test_upload_of_missing_file_fails_locally() {
        let api = api(Url::parse("http://127.0.0.1:9/api/2/").unwrap());
        let options = UploadSlideshow::new(
            Credentials::new("foo", "bar"),
            "My deck",
            UploadSource::File("/nonexistent/deck.pdf".into()),
        );
        let err = assert_err!(api.upload_slideshow(&options).await);
        assert!(matches!(err, SlideshareError::IoError(_)));
    }

    #[tokio::test]
    async fn test_requests_go_through_proxy() {
        let (base, server) = serve_once("200 OK", "<Tags/>").await;
        let port = base.port().unwrap();

        let proxy = Proxy::with_port("127.0.0.1", port)
            .unwrap()
            .with_credentials("user", "pass");
        let config = ApiConfig::new("key", "secret")
            .protocol(Protocol::Http)
            .proxy(proxy);
        let api = SlideshareApi::new(config).unwrap();

        let tags = assert_ok!(
            api.get_user_tags(&GetUserTags::new(Credentials::new("foo", "bar")))
                .await
        );
        assert!(tags.is_empty());

        let captured = server.await.unwrap();
        assert!(captured
            .request_line()
            .starts_with("GET http://www.slideshare.net/api/2/get_user_tags?"));
        // base64("user:pass")
        assert_eq!(
            captured.header("proxy-authorization").as_deref(),
            Some("Basic dXNlcjpwYXNz")
        );
    }
}
