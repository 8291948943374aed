//! XML to model converters.
//!
//! Models declare, field by field, which element or attribute they are read
//! from (`#[serde(rename(deserialize = ...))]`) and how the raw text is turned
//! into a typed value (`deserialize_with` one of the helpers below). This
//! module runs those rules over a response body and detects the error
//! document the service sends instead of a regular response.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::de::{DeserializeOwned, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, error};

use crate::error::{Result, SlideshareError};
use crate::models::{
    RelatedSlideshow, RelatedSlideshows, ServiceError, SlideshowStatus, SlideshowType, Tag,
    TagList,
};

/// Root element of the document SlideShare returns on failure.
pub const SERVICE_ERROR_ROOT: &str = "SlideShareServiceError";

/// Date format used by the service, e.g. `Sat Sep 18 08:09:00 -0500 2010`.
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Later date format, e.g. `2010-09-18 13:09:00 UTC`.
const UTC_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Unmarshal an XML document into a model.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(|e| {
        debug!("Failed to map XML document: {}", e);
        SlideshareError::from(e)
    })
}

/// Name of the first element of a document, if it has one.
pub fn root_element(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return None,
            Ok(_) => continue,
            Err(e) => {
                debug!("Body is not well-formed XML: {}", e);
                return None;
            }
        }
    }
}

/// Return the service error carried by a body, if any.
///
/// An error document with no data still counts as an error, with code 0 and
/// an empty message.
pub fn check_service_error(xml: &str) -> Option<ServiceError> {
    if root_element(xml).as_deref() != Some(SERVICE_ERROR_ROOT) {
        return None;
    }

    let service_error = from_xml::<ServiceError>(xml).unwrap_or_default();
    error!(
        "SlideShare service error {}: {}",
        service_error.code, service_error.message
    );
    Some(service_error)
}

/// Parse the leading decimal digits of a string; anything else yields the default.
pub fn parse_int<T: FromStr + Default>(text: &str) -> T {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or_default()
}

/// Parse a service date. Empty input means "no date".
pub fn parse_date(text: &str) -> Result<Option<DateTime<FixedOffset>>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = DateTime::parse_from_str(text, DATE_FORMAT) {
        return Ok(Some(date));
    }

    NaiveDateTime::parse_from_str(text, UTC_DATE_FORMAT)
        .map(|date| Some(date.and_utc().fixed_offset()))
        .map_err(|e| SlideshareError::ParseError(format!("invalid date '{}': {}", text, e)))
}

/// Element text read leniently as an integer.
pub fn int<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let text = String::deserialize(deserializer)?;
    Ok(parse_int(&text))
}

/// Optional attribute read leniently as an integer.
pub fn opt_int<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.map(|t| parse_int(&t)))
}

/// `1` is true, anything else false.
pub fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(parse_int::<u32>(&text) == 1)
}

/// `1` is false, anything else true.
pub fn inverted_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    flag(deserializer).map(|value| !value)
}

/// True when the text reads as the integer 0, empty text included.
pub fn zero_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(parse_int::<u64>(&text) == 0)
}

/// Optional attribute where `1` is true.
pub fn opt_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.map(|t| parse_int::<u32>(&t) == 1))
}

/// The literal `true` is true, anything else false.
pub fn true_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(text.trim().eq_ignore_ascii_case("true"))
}

/// Date in one of the service formats.
pub fn date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).map_err(D::Error::custom)
}

/// Free text of an element, with any markup inside it reduced to its text.
pub fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    MixedText::deserialize(deserializer).map(|text| text.0)
}

struct MixedText(String);

impl<'de> Deserialize<'de> for MixedText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MixedTextVisitor)
    }
}

struct MixedTextVisitor;

impl<'de> Visitor<'de> for MixedTextVisitor {
    type Value = MixedText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element text")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<MixedText, E> {
        Ok(MixedText(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> std::result::Result<MixedText, E> {
        Ok(MixedText(v))
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<MixedText, E> {
        Ok(MixedText(String::new()))
    }

    // Text runs arrive as `$text` entries, child elements under their own name.
    fn visit_map<A>(self, mut map: A) -> std::result::Result<MixedText, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut text = String::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.starts_with('@') {
                map.next_value::<IgnoredAny>()?;
            } else {
                text.push_str(&map.next_value::<MixedText>()?.0);
            }
        }
        Ok(MixedText(text))
    }
}

/// Numeric status code.
pub fn status<'de, D>(deserializer: D) -> std::result::Result<Option<SlideshowStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(SlideshowStatus::from_code(parse_int(&text)))
}

/// Numeric slideshow type code.
pub fn slideshow_type<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<SlideshowType>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(SlideshowType::from_code(parse_int(&text)))
}

/// A `<Tags>` element flattened into its tags.
pub fn tags<'de, D>(deserializer: D) -> std::result::Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    TagList::deserialize(deserializer).map(|list| list.items)
}

/// A `<RelatedSlideshows>` element flattened into its entries.
pub fn related_slideshows<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<RelatedSlideshow>, D::Error>
where
    D: Deserializer<'de>,
{
    RelatedSlideshows::deserialize(deserializer).map(|list| list.items)
}

pub(crate) fn default_true() -> bool {
    true
}
