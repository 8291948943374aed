//! Slideshow listings: search results and slideshows by tag, group or user.

use serde::{Deserialize, Serialize};

use super::slideshow::Slideshow;
use crate::converters;

/// Slideshows returned by `get_slideshows_by_tag`, `get_slideshows_by_group`
/// and `get_slideshows_by_user`.
///
/// ```xml
/// <Tag>   <!-- or <Group>, <User> -->
///   <Name>{ tag, group or user searched }</Name>
///   <Count>{ total number of slideshows }</Count>
///   <Slideshow>{ as in get_slideshow }</Slideshow>
///   ...
/// </Tag>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlideshowListing {
    /// The tag, group or username that was searched.
    #[serde(rename(deserialize = "Name"), default)]
    pub name: String,

    /// Total number of matching slideshows on SlideShare.
    #[serde(
        rename(deserialize = "Count"),
        default,
        deserialize_with = "converters::int"
    )]
    pub total_number_of_results: u64,

    /// The slideshows in this page of results.
    #[serde(rename(deserialize = "Slideshow"), default)]
    pub slideshows: Vec<Slideshow>,
}

impl SlideshowListing {
    /// Number of slideshows in this page.
    pub fn len(&self) -> usize {
        self.slideshows.len()
    }

    /// Whether this page holds no slideshows.
    pub fn is_empty(&self) -> bool {
        self.slideshows.is_empty()
    }

    /// Iterate over the slideshows in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Slideshow> {
        self.slideshows.iter()
    }
}

impl IntoIterator for SlideshowListing {
    type Item = Slideshow;
    type IntoIter = std::vec::IntoIter<Slideshow>;

    fn into_iter(self) -> Self::IntoIter {
        self.slideshows.into_iter()
    }
}

/// The `<Meta>` block of a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchMeta {
    /// The query performed.
    #[serde(rename(deserialize = "Query"), default)]
    pub query: String,

    /// Offset of this page of results.
    #[serde(
        rename(deserialize = "ResultOffset"),
        default,
        deserialize_with = "converters::int"
    )]
    pub result_offset: u64,

    /// Number of results in this page.
    #[serde(
        rename(deserialize = "NumResults"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_results: u64,

    /// Total number of results matching the query.
    #[serde(
        rename(deserialize = "TotalResults"),
        default,
        deserialize_with = "converters::int"
    )]
    pub total_number_of_results: u64,
}

/// Result of `search_slideshows`.
///
/// ```xml
/// <Slideshows>
///   <Meta>
///     <Query>{ query }</Query>
///     <ResultOffset>{ offset of this page }</ResultOffset>
///     <NumResults>{ results in this page }</NumResults>
///     <TotalResults>{ total results }</TotalResults>
///   </Meta>
///   <Slideshow>{ as in get_slideshow }</Slideshow>
///   ...
/// </Slideshows>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// Query metadata.
    #[serde(rename(deserialize = "Meta"), default)]
    pub meta: SearchMeta,

    /// Matching slideshows.
    #[serde(rename(deserialize = "Slideshow"), default)]
    pub items: Vec<Slideshow>,
}

impl SearchResults {
    /// The query performed.
    pub fn query(&self) -> &str {
        &self.meta.query
    }

    /// Offset of this page of results.
    pub fn result_offset(&self) -> u64 {
        self.meta.result_offset
    }

    /// Total number of results matching the query.
    pub fn total_number_of_results(&self) -> u64 {
        self.meta.total_number_of_results
    }

    /// Iterate over the slideshows in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Slideshow> {
        self.items.iter()
    }
}
