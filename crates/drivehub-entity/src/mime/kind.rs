//! The small set of MIME types the drive screen has icons for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A MIME type with a dedicated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeKind {
    /// Native cloud document.
    Document,
    /// Native cloud spreadsheet.
    Spreadsheet,
    /// Folder.
    Folder,
    /// PDF file.
    Pdf,
}

impl MimeKind {
    /// Classify a MIME type. Unknown or absent types yield `None`.
    pub fn from_mime(mime: Option<&str>) -> Option<Self> {
        match mime? {
            "application/vnd.google-apps.document" => Some(Self::Document),
            "application/vnd.google-apps.spreadsheet" => Some(Self::Spreadsheet),
            "application/vnd.google-apps.folder" => Some(Self::Folder),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// The MIME string this kind is matched from.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Document => "application/vnd.google-apps.document",
            Self::Spreadsheet => "application/vnd.google-apps.spreadsheet",
            Self::Folder => "application/vnd.google-apps.folder",
            Self::Pdf => "application/pdf",
        }
    }

    /// Icon file name for this kind.
    pub fn icon_file(&self) -> &'static str {
        match self {
            Self::Document => "doc.png",
            Self::Spreadsheet => "xls.png",
            Self::Folder => "folder.png",
            Self::Pdf => "pdf.png",
        }
    }
}

impl fmt::Display for MimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        for kind in [
            MimeKind::Document,
            MimeKind::Spreadsheet,
            MimeKind::Folder,
            MimeKind::Pdf,
        ] {
            assert_eq!(MimeKind::from_mime(Some(kind.mime_type())), Some(kind));
        }
    }

    #[test]
    fn test_unknown_and_absent() {
        assert_eq!(MimeKind::from_mime(Some("image/png")), None);
        assert_eq!(MimeKind::from_mime(Some("APPLICATION/PDF")), None);
        assert_eq!(MimeKind::from_mime(None), None);
    }
}
