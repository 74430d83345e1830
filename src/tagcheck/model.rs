use crate::error::TagCheckError;
use dicom_core::Tag;
use std::fmt;
use std::str::FromStr;

/// A DICOM attribute identity: the (group, element) pair naming one slot in a
/// decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId {
    pub group: u16,
    pub element: u16,
}

impl TagId {
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// File meta information lives outside the dataset, in group 0002.
    pub fn is_file_meta(&self) -> bool {
        self.group == 0x0002
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}

impl FromStr for TagId {
    type Err = TagCheckError;

    /// Parses the canonical `(GGGG,EEEE)` form. Each half must be exactly four
    /// hex digits; case does not matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TagCheckError::MalformedIdentity(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (group, element) = inner.split_once(',').ok_or_else(malformed)?;

        Ok(TagId {
            group: parse_hex4(group).ok_or_else(malformed)?,
            element: parse_hex4(element).ok_or_else(malformed)?,
        })
    }
}

fn parse_hex4(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}

impl From<TagId> for Tag {
    fn from(id: TagId) -> Self {
        Tag(id.group, id.element)
    }
}

impl From<Tag> for TagId {
    fn from(tag: Tag) -> Self {
        TagId::new(tag.group(), tag.element())
    }
}
