use std::path::Path;

pub const DEFAULT_EXTENSION: &str = ".dcm";

/// Decides which files are candidate DICOM files, by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    extensions: Vec<String>,
    case_sensitive: bool,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new([DEFAULT_EXTENSION], false)
    }
}

impl FileFilter {
    /// Extensions may be given with or without the leading dot.
    pub fn new<I, S>(extensions: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref(), case_sensitive))
            .collect();
        Self {
            extensions,
            case_sensitive,
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = normalize_extension(ext, self.case_sensitive);
        self.extensions.iter().any(|value| *value == ext)
    }
}

fn normalize_extension(ext: &str, case_sensitive: bool) -> String {
    let ext = if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    };
    if case_sensitive {
        ext
    } else {
        ext.to_ascii_lowercase()
    }
}
