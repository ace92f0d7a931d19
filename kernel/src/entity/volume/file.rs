use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use vodca::References;

pub const PDF_MIME: &str = "application/pdf";
pub const PDF_EXTENSION: &str = ".pdf";

/// Where the bytes of a selected file come from. Nothing is read until the
/// submission body is built.
#[derive(Clone, Eq, PartialEq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl Debug for FileSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FileSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// A file picked for one volume.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct VolumeFile {
    name: String,
    mime: String,
    size: Option<u64>,
    source: FileSource,
}

impl VolumeFile {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        size: Option<u64>,
        source: FileSource,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            source,
        }
    }

    pub fn from_path(path: impl AsRef<Path>, mime: impl Into<String>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(name, mime, None, FileSource::Path(path.to_path_buf()))
    }

    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = u64::try_from(bytes.len()).ok();
        Self::new(name, mime, size, FileSource::Bytes(bytes))
    }

    /// Both the declared type and the file name have to say PDF.
    pub fn check_pdf(&self) -> Result<(), String> {
        if !self.mime.trim().eq_ignore_ascii_case(PDF_MIME) {
            return Err(format!(
                "{}: only PDF files are accepted (got {})",
                self.name,
                if self.mime.is_empty() { "unknown type" } else { self.mime.as_str() }
            ));
        }
        if !self.name.to_ascii_lowercase().ends_with(PDF_EXTENSION) {
            return Err(format!("{}: the file name must end in .pdf", self.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::VolumeFile;

    #[test]
    fn pdf_needs_type_and_extension() {
        assert!(VolumeFile::from_bytes("report.pdf", "application/pdf", vec![])
            .check_pdf()
            .is_ok());
        assert!(VolumeFile::from_bytes("REPORT.PDF", "application/pdf", vec![])
            .check_pdf()
            .is_ok());
        assert!(VolumeFile::from_bytes("report.txt", "text/plain", vec![])
            .check_pdf()
            .is_err());
        assert!(VolumeFile::from_bytes("report.txt", "application/pdf", vec![])
            .check_pdf()
            .is_err());
        assert!(VolumeFile::from_bytes("report.pdf", "text/plain", vec![])
            .check_pdf()
            .is_err());
    }

    #[test]
    fn name_comes_from_path() {
        let file = VolumeFile::from_path("/scans/tomo-1.pdf", "application/pdf");
        assert_eq!(file.name(), "tomo-1.pdf");
        assert_eq!(file.size(), &None);
    }
}
