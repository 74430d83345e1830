//! # Tag Registry
//!
//! The fixed, ordered set of tags a scan looks for. The registry is static
//! configuration: it is built once at startup and never mutated.
//!
//! Duplicate entries are kept as-is. Looking a tag up twice is redundant but
//! harmless, since the table ignores values it has already seen.

use crate::error::Result;
use crate::model::TagId;

/// The curated tag list used when no config overrides it.
pub const STANDARD_TAGS: &[&str] = &[
    "(0002,0013)", "(0008,0080)", "(0008,0090)", "(0008,0115)", "(0008,1010)",
    "(0008,1040)", "(0008,1050)", "(0008,1060)", "(0008,1070)", "(0008,1090)",
    "(0008,1120)", "(0008,2120)", "(0008,2127)", "(0008,2132)", "(0010,0010)",
    "(0010,0020)", "(0010,0021)", "(0010,0022)", "(0010,0030)", "(0010,0032)",
    "(0010,0032)", "(0010,0040)", "(0010,0050)", "(0010,0050)", "(0010,0101)",
    "(0010,0102)", "(0010,1000)", "(0010,1001)", "(0010,1002)", "(0010,1005)",
    "(0010,1010)", "(0010,1020)", "(0010,1020)", "(0010,1030)", "(0010,1040)",
    "(0010,1050)", "(0010,1060)", "(0010,1080)", "(0010,1081)", "(0010,1090)",
    "(0010,2000)", "(0010,2110)", "(0010,2150)", "(0010,2152)", "(0010,2154)",
    "(0010,2160)", "(0010,2180)", "(0010,21A0)", "(0010,21B0)", "(0010,21C0)",
    "(0010,21D0)", "(0010,21F0)", "(0010,21F0)", "(0010,2201)", "(0010,2202)",
    "(0010,2203)", "(0010,2292)", "(0010,2293)", "(0010,2294)", "(0010,2295)",
    "(0010,2296)", "(0010,2297)", "(0010,2298)", "(0010,2299)", "(0010,4000)",
    "(0010,9431)", "(0012,0010)", "(0012,0021)", "(0012,0031)", "(0012,0040)",
    "(0012,0042)", "(0012,0060)", "(0012,0062)", "(0018,0024)", "(0018,0034)",
    "(0018,1018)", "(0018,101B)", "(0018,1030)", "(0018,1111)", "(0018,1180)",
    "(0018,1250)", "(0018,1251)", "(0018,5100)", "(0018,5104)", "(0018,702A)",
    "(0018,702B)", "(0018,9005)", "(0018,9041)", "(0018,9047)", "(0018,9050)",
    "(0018,9313)", "(0018,9318)", "(0018,9423)", "(0018,9447)", "(0020,0020)",
    "(0020,1200)", "(0020,1202)", "(0020,1204)", "(0020,9450)", "(0022,0005)",
    "(0022,0006)", "(0038,0004)", "(0038,001E)", "(0038,0300)", "(0038,0400)",
    "(0038,0500)", "(0038,0502)", "(0040,0006)", "(0040,0010)", "(0040,0242)",
    "(0040,1004)", "(0040,1010)", "(0040,3001)", "(0040,4025)", "(0040,4028)",
    "(0040,4037)", "(0040,A043)", "(0040,A075)", "(0040,A123)", "(0054,0018)",
    "(0054,0410)", "(0054,0412)", "(0054,0414)", "(0062,0009)", "(0070,0084)",
    "(0072,0002)", "(0072,0010)", "(0072,0700)", "(0072,0714)", "(0088,0906)",
    "(2110,0030)", "(3002,0003)", "(3002,0020)", "(3006,0004)", "(3006,0026)",
    "(300A,0003)", "(300A,004C)", "(300A,00B2)", "(300A,00C2)", "(300A,00FE)",
    "(300A,0122)", "(300A,0123)", "(300A,0180)", "(300A,0182)", "(300A,0183)",
    "(300A,0184)", "(300A,0226)", "(300A,0236)", "(300A,0244)", "(300A,0266)",
    "(300A,0294)", "(300A,02B4)", "(300A,0350)", "(300A,0352)", "(300A,0354)",
    "(300C,006A)", "(300E,0008)", "(4008,0119)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<TagId>,
}

impl TagRegistry {
    /// Builds a registry from `(GGGG,EEEE)` strings, failing on the first
    /// malformed entry.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = entries
            .into_iter()
            .map(|entry| entry.as_ref().parse())
            .collect::<Result<Vec<TagId>>>()?;
        Ok(Self { tags })
    }

    pub fn standard() -> Result<Self> {
        Self::from_entries(STANDARD_TAGS)
    }

    /// Appends more tags after the existing ones.
    pub fn extended<I, S>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Self::from_entries(entries)?;
        self.tags.extend(extra.tags);
        Ok(self)
    }

    pub fn identities(&self) -> &[TagId] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
