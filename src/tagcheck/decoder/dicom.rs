use super::{Decoder, Record};
use crate::error::DecodeError;
use crate::model::TagId;
use dicom_core::PrimitiveValue;
use dicom_dictionary_std::tags;
use dicom_object::{DefaultDicomObject, InMemDicomObject, OpenFileOptions};
use std::path::Path;

/// Decodes DICOM Part 10 files from disk.
///
/// Parsing stops at Pixel Data, so image payloads are never loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DicomDecoder;

impl DicomDecoder {
    pub fn new() -> Self {
        Self
    }
}

pub struct DicomRecord {
    object: DefaultDicomObject,
}

impl Decoder for DicomDecoder {
    type Record = DicomRecord;

    fn decode(&self, path: &Path) -> Result<DicomRecord, DecodeError> {
        let object = OpenFileOptions::new()
            .read_until(tags::PIXEL_DATA)
            .open_file(path)
            .map_err(|e| DecodeError::NotDicom {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(DicomRecord { object })
    }
}

impl DicomRecord {
    /// Group 0002 is read into the file meta table, not the dataset.
    fn meta_value(&self, tag: TagId) -> Option<String> {
        let meta = self.object.meta();
        match tag.element {
            0x0000 => Some(meta.information_group_length.to_string()),
            0x0001 => Some(render_bytes(meta.information_version.to_vec())),
            0x0002 => Some(meta.media_storage_sop_class_uid.clone()),
            0x0003 => Some(meta.media_storage_sop_instance_uid.clone()),
            0x0010 => Some(meta.transfer_syntax.clone()),
            0x0012 => Some(meta.implementation_class_uid.clone()),
            0x0013 => meta.implementation_version_name.clone(),
            0x0016 => meta.source_application_entity_title.clone(),
            0x0017 => meta.sending_application_entity_title.clone(),
            0x0018 => meta.receiving_application_entity_title.clone(),
            0x0100 => meta.private_information_creator_uid.clone(),
            0x0102 => meta.private_information.clone().map(render_bytes),
            _ => None,
        }
    }

    fn dataset_value(&self, tag: TagId) -> Option<String> {
        self.object
            .element(tag.into())
            .ok()
            .and_then(|elem| elem.to_str().ok())
            .map(|s| s.into_owned())
    }
}

impl Record for DicomRecord {
    fn has_dataset(&self) -> bool {
        let dataset: &InMemDicomObject = &self.object;
        dataset.into_iter().next().is_some()
    }

    fn value(&self, tag: TagId) -> Option<String> {
        let raw = if tag.is_file_meta() {
            self.meta_value(tag)
        } else {
            self.dataset_value(tag)
        }?;
        Some(strip_padding(&raw).to_string())
    }
}

/// OB values render the way dicom-core renders them in the dataset.
fn render_bytes(bytes: Vec<u8>) -> String {
    PrimitiveValue::from(bytes).to_str().into_owned()
}

/// DICOM pads odd-length text with a space (or NUL for UIDs).
fn strip_padding(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}
