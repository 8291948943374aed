//! Contact models.

use serde::{Deserialize, Serialize};

use crate::converters;

/// A user in someone's contact list.
///
/// ```xml
/// <Contact>
///   <Username>{ username }</Username>
///   <NumSlideshows>{ number of slideshows }</NumSlideshows>
///   <NumComments>{ number of comments }</NumComments>
/// </Contact>
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Contact's username.
    #[serde(rename(deserialize = "Username"), default)]
    pub name: String,

    /// Number of slideshows the contact owns.
    #[serde(
        rename(deserialize = "NumSlideshows"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_slideshows: u64,

    /// Number of comments the contact has posted.
    #[serde(
        rename(deserialize = "NumComments"),
        default,
        deserialize_with = "converters::int"
    )]
    pub num_comments: u64,
}

/// A `<Contacts>` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactList {
    /// The contacts, in document order.
    #[serde(rename(deserialize = "Contact"), default)]
    pub items: Vec<Contact>,
}

impl IntoIterator for ContactList {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::from_xml;

    #[test]
    fn test_parse_contact() {
        let xml = r#"
            <Contact>
              <Username>Bern7</Username>
              <NumSlideshows>12</NumSlideshows>
              <NumComments>3</NumComments>
            </Contact>
        "#;
        let contact: Contact = from_xml(xml).unwrap();
        assert_eq!(contact.name, "Bern7");
        assert_eq!(contact.num_slideshows, 12);
        assert_eq!(contact.num_comments, 3);
    }

    #[test]
    fn test_contact_without_data() {
        let contact: Contact = from_xml("<Contact/>").unwrap();
        assert_eq!(contact, Contact::default());
    }

    #[test]
    fn test_parse_contact_list() {
        let xml = r#"
            <Contacts>
              <Contact><Username>a</Username><NumSlideshows>1</NumSlideshows></Contact>
              <Contact><Username>b</Username><NumSlideshows>2</NumSlideshows></Contact>
              <Contact><Username>c</Username><NumSlideshows></NumSlideshows></Contact>
            </Contacts>
        "#;
        let list: ContactList = from_xml(xml).unwrap();
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[1].num_slideshows, 2);
        assert_eq!(list.items[2].num_slideshows, 0);
    }
}
