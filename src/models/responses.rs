//! Responses of the write web-methods, and the service error document.

use serde::{Deserialize, Serialize};

use crate::converters;
use crate::error::SlideshareError;

/// Acknowledgement returned by `edit_slideshow`, `delete_slideshow`,
/// `upload_slideshow` and `favorite_slideshow`.
///
/// ```xml
/// <SlideShowEdited>   <!-- or SlideShowDeleted, SlideShowUploaded, SlideShow -->
///   <SlideShowID>{ slideshow id }</SlideShowID>
/// </SlideShowEdited>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlideshowAck {
    /// ID of the slideshow the operation applied to.
    #[serde(rename(deserialize = "SlideShowID"), default)]
    pub slideshow_id: String,
}

impl SlideshowAck {
    /// Whether the service confirmed the operation.
    pub fn is_success(&self) -> bool {
        !self.slideshow_id.trim().is_empty()
    }
}

/// Response of `check_favorite`.
///
/// ```xml
/// <SlideShow>
///   <SlideShowID>{ slideshow id }</SlideShowID>
///   <User>{ user id }</User>
///   <Favorited>{ true or false }</Favorited>
/// </SlideShow>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckFavoriteResponse {
    /// Slideshow that was checked.
    #[serde(rename(deserialize = "SlideShowID"), default)]
    pub slideshow_id: String,

    /// User that was checked.
    #[serde(rename(deserialize = "User"), default)]
    pub user_id: String,

    /// Whether the user has favorited the slideshow.
    #[serde(
        rename(deserialize = "Favorited"),
        default,
        deserialize_with = "converters::true_string"
    )]
    pub marked_as_favorite: bool,
}

/// Error document returned by any web-method instead of its regular response.
///
/// ```xml
/// <SlideShareServiceError>
///   <Message ID="9">SlideShow Not Found</Message>
/// </SlideShareServiceError>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawServiceError")]
pub struct ServiceError {
    /// Numeric error code.
    pub code: u32,
    /// Error message.
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawServiceError {
    #[serde(rename = "Message", default)]
    message: RawMessage,
}

#[derive(Debug, Default, Deserialize)]
struct RawMessage {
    #[serde(rename = "@ID", default, deserialize_with = "converters::int")]
    id: u32,
    #[serde(rename = "$text", default)]
    text: String,
}

impl From<RawServiceError> for ServiceError {
    fn from(raw: RawServiceError) -> Self {
        Self {
            code: raw.message.id,
            message: raw.message.text,
        }
    }
}

impl From<ServiceError> for SlideshareError {
    fn from(err: ServiceError) -> Self {
        SlideshareError::Service {
            code: err.code,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::from_xml;

    #[test]
    fn test_edit_ack() {
        let xml = "<SlideShowEdited><SlideShowID>SlideShowID</SlideShowID></SlideShowEdited>";
        let ack: SlideshowAck = from_xml(xml).unwrap();
        assert_eq!(ack.slideshow_id, "SlideShowID");
        assert!(ack.is_success());
    }

    #[test]
    fn test_empty_ack_is_not_success() {
        let ack: SlideshowAck = from_xml("<SlideShowEdited/>").unwrap();
        assert!(ack.slideshow_id.is_empty());
        assert!(!ack.is_success());
    }

    #[test]
    fn test_delete_and_upload_acks() {
        let deleted: SlideshowAck =
            from_xml("<SlideShowDeleted><SlideShowID>42</SlideShowID></SlideShowDeleted>").unwrap();
        let uploaded: SlideshowAck =
            from_xml("<SlideShowUploaded><SlideShowID>43</SlideShowID></SlideShowUploaded>")
                .unwrap();
        assert_eq!(deleted.slideshow_id, "42");
        assert_eq!(uploaded.slideshow_id, "43");
    }

    #[test]
    fn test_check_favorite() {
        let xml = r#"
            <SlideShow>
              <SlideShowID>5229002</SlideShowID>
              <User>4689517</User>
              <Favorited>true</Favorited>
            </SlideShow>
        "#;
        let response: CheckFavoriteResponse = from_xml(xml).unwrap();
        assert_eq!(response.slideshow_id, "5229002");
        assert_eq!(response.user_id, "4689517");
        assert!(response.marked_as_favorite);
    }

    #[test]
    fn test_check_favorite_false() {
        let xml = "<SlideShow><SlideShowID>1</SlideShowID><Favorited>false</Favorited></SlideShow>";
        let response: CheckFavoriteResponse = from_xml(xml).unwrap();
        assert!(!response.marked_as_favorite);
    }

    #[test]
    fn test_service_error() {
        let xml = r#"
            <SlideShareServiceError>
              <Message ID="0">No API Key Provided</Message>
            </SlideShareServiceError>
        "#;
        let err: ServiceError = from_xml(xml).unwrap();
        assert_eq!(err.code, 0);
        assert_eq!(err.message, "No API Key Provided");

        let err: SlideshareError = err.into();
        assert_eq!(err.to_string(), "Error (0): No API Key Provided");
    }

    #[test]
    fn test_service_error_without_data() {
        let err: ServiceError = from_xml("<SlideShareServiceError/>").unwrap();
        assert_eq!(err, ServiceError::default());
    }
}
