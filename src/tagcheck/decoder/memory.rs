use super::{Decoder, Record};
use crate::error::DecodeError;
use crate::model::TagId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    dataset: Option<HashMap<TagId, String>>,
}

impl Record for MemoryRecord {
    fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    fn value(&self, tag: TagId) -> Option<String> {
        self.dataset.as_ref()?.get(&tag).cloned()
    }
}

/// Serves canned records by path. Paths it was not told about decode as
/// "not DICOM", which is how tests model corrupt files.
#[derive(Debug, Default)]
pub struct InMemoryDecoder {
    records: HashMap<PathBuf, MemoryRecord>,
    decoded: RefCell<Vec<PathBuf>>,
}

impl InMemoryDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P, I, S>(mut self, path: P, values: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = (TagId, S)>,
        S: Into<String>,
    {
        let dataset = values
            .into_iter()
            .map(|(tag, value)| (tag, value.into()))
            .collect();
        self.records.insert(
            path.into(),
            MemoryRecord {
                dataset: Some(dataset),
            },
        );
        self
    }

    /// A file that decodes but has no dataset.
    pub fn with_empty_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.records.insert(path.into(), MemoryRecord { dataset: None });
        self
    }

    /// Every path passed to `decode`, in call order.
    pub fn decoded_paths(&self) -> Vec<PathBuf> {
        self.decoded.borrow().clone()
    }
}

impl Decoder for InMemoryDecoder {
    type Record = MemoryRecord;

    fn decode(&self, path: &Path) -> Result<MemoryRecord, DecodeError> {
        self.decoded.borrow_mut().push(path.to_path_buf());
        self.records
            .get(path)
            .cloned()
            .ok_or_else(|| DecodeError::NotDicom {
                path: path.to_path_buf(),
                reason: "no record registered".to_string(),
            })
    }
}
