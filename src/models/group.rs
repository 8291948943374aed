//! Group models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::converters;

/// A SlideShare group.
///
/// ```xml
/// <Group>
///   <Name>{ group name }</Name>
///   <NumPosts>{ number of posts }</NumPosts>
///   <NumSlideshows>{ number of slideshows }</NumSlideshows>
///   <NumMembers>{ number of members }</NumMembers>
///   <Created>{ created date }</Created>
///   <QueryName>{ name used by get_slideshows_by_group }</QueryName>
///   <URL>{ group URL }</URL>
/// </Group>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Group {
    /// Display name.
    #[serde(rename(deserialize = "Name"), default)]
    pub name: String,

    /// Number of posts published on the group.
    #[serde(
        rename(deserialize = "NumPosts"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_posts: u64,

    /// Number of slideshows in the group.
    #[serde(
        rename(deserialize = "NumSlideshows"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_slideshows: u64,

    /// Number of members.
    #[serde(
        rename(deserialize = "NumMembers"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_members: u64,

    /// When the group was created.
    #[serde(
        rename(deserialize = "Created"),
        default,
        deserialize_with = "converters::date"
    )]
    pub created: Option<DateTime<FixedOffset>>,

    /// Name to pass to `get_slideshows_by_group`.
    #[serde(rename(deserialize = "QueryName"), default)]
    pub query_name: String,

    /// Group URL.
    #[serde(rename(deserialize = "URL"), default)]
    pub url: String,
}

/// A `<Groups>` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupList {
    /// The groups, in document order.
    #[serde(rename(deserialize = "Group"), default)]
    pub items: Vec<Group>,
}

impl IntoIterator for GroupList {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::from_xml;
    use chrono::{TimeZone, Utc};

    const GROUP_XML: &str = r#"
        <Group>
          <Name>Viajes, Travels, Voyages</Name>
          <NumPosts>100</NumPosts>
          <NumSlideshows>200</NumSlideshows>
          <NumMembers>3</NumMembers>
          <Created>Sat Sep 18 08:09:00 -0500 2010</Created>
          <QueryName>viajes-travels-voyages</QueryName>
          <URL>http://www.slideshare.net/group/viajes-travels-voyages</URL>
        </Group>
    "#;

    #[test]
    fn test_parse_group() {
        let group: Group = from_xml(GROUP_XML).unwrap();
        assert_eq!(group.name, "Viajes, Travels, Voyages");
        assert_eq!(group.num_posts, 100);
        assert_eq!(group.num_slideshows, 200);
        assert_eq!(group.num_members, 3);
        assert_eq!(
            group.created,
            Some(Utc.with_ymd_and_hms(2010, 9, 18, 13, 9, 0).unwrap().fixed_offset())
        );
        assert_eq!(group.query_name, "viajes-travels-voyages");
        assert_eq!(
            group.url,
            "http://www.slideshare.net/group/viajes-travels-voyages"
        );
    }

    #[test]
    fn test_group_without_data() {
        let group: Group = from_xml("<Group/>").unwrap();
        assert_eq!(group, Group::default());
    }

    #[test]
    fn test_parse_group_list() {
        let xml = r#"
            <Groups>
              <Group><Name>art</Name><NumMembers>10</NumMembers></Group>
              <Group><Name>design</Name><NumMembers>4</NumMembers></Group>
            </Groups>
        "#;
        let list: GroupList = from_xml(xml).unwrap();
        let names: Vec<String> = list.into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["art", "design"]);
    }
}
