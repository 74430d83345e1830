use crate::commands::{CmdMessage, FileOutcome, ScanResult, ScanStats};
use crate::decoder::{Decoder, Record};
use crate::error::{DecodeError, Result};
use crate::extract::extract;
use crate::registry::TagRegistry;
use crate::table::TagTable;
use crate::walker::Walker;
use std::path::Path;

/// Walks `root` and aggregates the registry tags of every file that decodes.
pub fn run<D: Decoder>(
    decoder: &D,
    walker: &Walker,
    registry: &TagRegistry,
    root: &Path,
) -> Result<ScanResult> {
    tracing::info!(
        "Scanning {} for {} tags",
        root.display(),
        registry.len()
    );

    let mut table = TagTable::new();
    let mut stats = ScanStats::default();
    let walk = walker.walk(root, |path| {
        tracing::debug!("Checking {}", path.display());
        stats.tally(process_file(decoder, path, registry, &mut table));
    })?;
    stats.walk = walk;

    let mut result = ScanResult {
        table,
        stats,
        messages: Vec::new(),
    };
    summarize(&mut result);
    tracing::info!(
        "Scan finished: {} tags, {} distinct values",
        result.table.len(),
        result.table.value_count()
    );
    Ok(result)
}

/// Decodes one file and feeds its values into `table`. Failures are logged and
/// reported through the outcome; they never abort the scan.
pub fn process_file<D: Decoder>(
    decoder: &D,
    path: &Path,
    registry: &TagRegistry,
    table: &mut TagTable,
) -> FileOutcome {
    let record = match decoder.decode(path) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("{}", e);
            return outcome_for(&e);
        }
    };

    if !record.has_dataset() {
        let e = DecodeError::MissingDataset {
            path: path.to_path_buf(),
        };
        tracing::warn!("{}", e);
        return outcome_for(&e);
    }

    let mut recorded = 0;
    for (tag, value) in extract(&record, registry) {
        if table.record(tag, &value) {
            recorded += 1;
        }
    }
    FileOutcome::Decoded { recorded }
}

fn outcome_for(e: &DecodeError) -> FileOutcome {
    match e {
        DecodeError::NotDicom { .. } => FileOutcome::NotDicom,
        DecodeError::MissingDataset { .. } => FileOutcome::MissingDataset,
    }
}

fn summarize(result: &mut ScanResult) {
    let stats = result.stats;
    let scanned = format!(
        "Scanned {} files: {} decoded, {} not DICOM, {} missing dataset",
        stats.walk.candidates, stats.decoded, stats.not_dicom, stats.missing_dataset
    );
    result.add_message(if stats.skipped() == 0 {
        CmdMessage::success(scanned)
    } else {
        CmdMessage::warning(scanned)
    });
    result.add_message(CmdMessage::info(format!(
        "Found {} distinct values across {} tags",
        result.table.value_count(),
        result.table.len()
    )));
    if stats.walk.unreadable > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} entries could not be read",
            stats.walk.unreadable
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::decoder::memory::InMemoryDecoder;
    use crate::error::TagCheckError;
    use crate::model::TagId;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const NAME: TagId = TagId::new(0x0010, 0x0010);
    const ID: TagId = TagId::new(0x0010, 0x0020);

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    fn registry() -> TagRegistry {
        TagRegistry::from_entries(["(0010,0010)", "(0010,0020)"]).unwrap()
    }

    #[test]
    fn aggregates_the_documented_scenario() {
        let temp = TempDir::new().unwrap();
        let one = touch(temp.path(), "a/1.dcm");
        let two = touch(temp.path(), "a/b/2.dcm");
        touch(temp.path(), "a/junk.txt");

        let decoder = InMemoryDecoder::new()
            .with_file(&one, [(NAME, "SMITH")])
            .with_file(&two, [(NAME, "SMITH"), (ID, "ID1")]);

        let result = run(&decoder, &Walker::default(), &registry(), temp.path()).unwrap();

        assert_eq!(result.table.len(), 2);
        assert_eq!(result.table.values(NAME).unwrap(), &["SMITH"]);
        assert_eq!(result.table.values(ID).unwrap(), &["ID1"]);
        assert_eq!(decoder.decoded_paths(), vec![one, two]);
        assert_eq!(result.stats.walk.ignored, 1);
        assert_eq!(result.stats.decoded, 2);
    }

    #[test]
    fn corrupt_file_does_not_change_the_result() {
        let temp = TempDir::new().unwrap();
        let one = touch(temp.path(), "1.dcm");
        let two = touch(temp.path(), "sub/2.dcm");

        let clean = InMemoryDecoder::new()
            .with_file(&one, [(NAME, "A")])
            .with_file(&two, [(NAME, "B"), (ID, "X")]);
        let clean_result = run(&clean, &Walker::default(), &registry(), temp.path()).unwrap();

        touch(temp.path(), "sub/broken.dcm");
        let with_corrupt = InMemoryDecoder::new()
            .with_file(&one, [(NAME, "A")])
            .with_file(&two, [(NAME, "B"), (ID, "X")]);
        let corrupt_result =
            run(&with_corrupt, &Walker::default(), &registry(), temp.path()).unwrap();

        let flatten = |r: &ScanResult| -> Vec<(TagId, Vec<String>)> {
            r.table.iter().map(|(t, v)| (t, v.to_vec())).collect()
        };
        assert_eq!(flatten(&clean_result), flatten(&corrupt_result));
        assert_eq!(corrupt_result.stats.not_dicom, 1);
        assert_eq!(corrupt_result.stats.decoded, 2);
    }

    #[test]
    fn missing_dataset_is_skipped() {
        let temp = TempDir::new().unwrap();
        let empty = touch(temp.path(), "empty.dcm");
        let decoder = InMemoryDecoder::new().with_empty_file(&empty);

        let mut table = TagTable::new();
        let outcome = process_file(&decoder, &empty, &registry(), &mut table);
        assert_eq!(outcome, FileOutcome::MissingDataset);
        assert!(table.is_empty());
    }

    #[test]
    fn process_file_counts_only_new_values() {
        let decoder = InMemoryDecoder::new()
            .with_file("/1.dcm", [(NAME, "SMITH"), (ID, "ID1")])
            .with_file("/2.dcm", [(NAME, "SMITH"), (ID, "ID2")]);
        let mut table = TagTable::new();

        let first = process_file(&decoder, Path::new("/1.dcm"), &registry(), &mut table);
        let second = process_file(&decoder, Path::new("/2.dcm"), &registry(), &mut table);

        assert_eq!(first, FileOutcome::Decoded { recorded: 2 });
        assert_eq!(second, FileOutcome::Decoded { recorded: 1 });
        assert_eq!(table.values(ID).unwrap(), &["ID1", "ID2"]);
    }

    #[test]
    fn missing_root_aborts_before_decoding() {
        let temp = TempDir::new().unwrap();
        let decoder = InMemoryDecoder::new();
        let err = run(
            &decoder,
            &Walker::default(),
            &registry(),
            &temp.path().join("missing"),
        )
        .unwrap_err();

        assert!(matches!(err, TagCheckError::RootNotFound(_)));
        assert!(decoder.decoded_paths().is_empty());
    }

    #[test]
    fn summary_message_reports_counts() {
        let temp = TempDir::new().unwrap();
        let one = touch(temp.path(), "1.dcm");
        touch(temp.path(), "2.dcm");
        let decoder = InMemoryDecoder::new().with_file(&one, [(NAME, "SMITH")]);

        let result = run(&decoder, &Walker::default(), &registry(), temp.path()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Scanned 2 files: 1 decoded, 1 not DICOM, 0 missing dataset"
        );
        assert_eq!(
            result.messages[1].content,
            "Found 1 distinct values across 1 tags"
        );
    }

    #[test]
    fn clean_scan_summary_is_a_success() {
        let temp = TempDir::new().unwrap();
        let one = touch(temp.path(), "1.dcm");
        let decoder = InMemoryDecoder::new().with_file(&one, [(NAME, "SMITH")]);

        let result = run(&decoder, &Walker::default(), &registry(), temp.path()).unwrap();
        assert_eq!(result.stats.skipped(), 0);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Scanned 1 files: 1 decoded, 0 not DICOM, 0 missing dataset"
        );
    }
}
