//! Tag models.

use serde::{Deserialize, Serialize};

use crate::converters;

/// A tag attached to a slideshow or used by a user.
///
/// ```xml
/// <Tag Count="{ times used }" Owner="{ 1 if the owner used it }">{ name }</Tag>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// The tag text.
    #[serde(rename(deserialize = "$text"), default)]
    pub name: String,

    /// Number of times this tag has been used.
    #[serde(
        rename(deserialize = "@Count"),
        default,
        deserialize_with = "converters::opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub times_used: Option<u64>,

    /// Whether the slideshow owner has used this tag.
    ///
    /// Only present where the service reports it (slideshow tags, not user tags).
    #[serde(
        rename(deserialize = "@Owner"),
        default,
        deserialize_with = "converters::opt_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub used_by_owner: Option<bool>,
}

/// A `<Tags>` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagList {
    /// The tags, in document order.
    #[serde(rename(deserialize = "Tag"), default)]
    pub items: Vec<Tag>,
}

impl TagList {
    /// Names of all tags in the list.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|t| t.name.as_str()).collect()
    }
}

impl IntoIterator for TagList {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::from_xml;

    #[test]
    fn test_tag_with_every_attribute() {
        let tag: Tag = from_xml(r#"<Tag Owner="1" Count="1">tiempo real</Tag>"#).unwrap();
        assert_eq!(tag.name, "tiempo real");
        assert_eq!(tag.times_used, Some(1));
        assert_eq!(tag.used_by_owner, Some(true));
    }

    #[test]
    fn test_tag_without_owner() {
        let tag: Tag = from_xml(r#"<Tag Count="12">ajax</Tag>"#).unwrap();
        assert_eq!(tag.times_used, Some(12));
        assert_eq!(tag.used_by_owner, None);
    }

    #[test]
    fn test_tag_without_data() {
        let tag: Tag = from_xml("<Tag/>").unwrap();
        assert_eq!(tag, Tag::default());
    }

    #[test]
    fn test_tag_list() {
        let xml = r#"
            <Tags>
              <Tag Count="3">rails</Tag>
              <Tag Count="1">ruby</Tag>
            </Tags>
        "#;
        let list: TagList = from_xml(xml).unwrap();
        assert_eq!(list.names(), vec!["rails", "ruby"]);
        assert_eq!(list.items[0].times_used, Some(3));
    }

    #[test]
    fn test_empty_tag_list() {
        let list: TagList = from_xml("<Tags/>").unwrap();
        assert!(list.items.is_empty());
    }
}
