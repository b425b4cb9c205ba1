//! File type detection and provider URLs
//!
//! Pure functions, no I/O: everything here derives from an item's id and mime type.

use crate::api::{DriveItem, FOLDER_MIME_TYPE};

/// Coarse file category used for icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Folder,
    Pdf,
    Image,
    Video,
    Doc,
    Sheet,
    Slides,
    File,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Folder => "Folder",
            FileKind::Pdf => "PDF",
            FileKind::Image => "Image",
            FileKind::Video => "Video",
            FileKind::Doc => "Document",
            FileKind::Sheet => "Spreadsheet",
            FileKind::Slides => "Presentation",
            FileKind::File => "File",
        }
    }
}

/// Classify a mime type
///
/// The checks run in order, so "application/vnd.google-apps.document" is a Doc
/// and "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" is
/// also a Doc (it contains "document" before "sheet" is considered).
pub fn file_kind(mime_type: &str) -> FileKind {
    if mime_type == FOLDER_MIME_TYPE {
        FileKind::Folder
    } else if mime_type == "application/pdf" {
        FileKind::Pdf
    } else if mime_type.starts_with("image/") {
        FileKind::Image
    } else if mime_type.starts_with("video/") {
        FileKind::Video
    } else if mime_type.contains("word") || mime_type.contains("document") {
        FileKind::Doc
    } else if mime_type.contains("sheet") || mime_type.contains("excel") {
        FileKind::Sheet
    } else if mime_type.contains("presentation") || mime_type.contains("powerpoint") {
        FileKind::Slides
    } else {
        FileKind::File
    }
}

/// Whether the provider renders this type natively (Docs, Sheets, Slides, ...)
pub fn is_native_document(mime_type: &str) -> bool {
    mime_type.contains("google-apps")
}

/// URL that shows the item in the browser
///
/// Native documents open in their editor app; everything else uses the inline
/// preview page.
pub fn view_url(item: &DriveItem) -> String {
    if is_native_document(&item.mime_type) {
        format!("https://drive.google.com/open?id={}", item.id)
    } else {
        format!("https://drive.google.com/file/d/{}/preview", item.id)
    }
}

/// Direct download URL for a file
pub fn download_url(item: &DriveItem) -> String {
    format!("https://drive.google.com/uc?id={}&export=download", item.id)
}

/// Provider web page for a folder
pub fn folder_url(folder_id: &str) -> String {
    format!("https://drive.google.com/drive/folders/{}", folder_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, mime: &str) -> DriveItem {
        DriveItem {
            id: id.to_string(),
            name: "x".to_string(),
            mime_type: mime.to_string(),
            size: None,
            created_time: None,
            owners: None,
        }
    }

    #[test]
    fn test_file_kind_classification() {
        assert_eq!(file_kind(FOLDER_MIME_TYPE), FileKind::Folder);
        assert_eq!(file_kind("application/pdf"), FileKind::Pdf);
        assert_eq!(file_kind("image/png"), FileKind::Image);
        assert_eq!(file_kind("video/mp4"), FileKind::Video);
        assert_eq!(file_kind("application/msword"), FileKind::Doc);
        assert_eq!(file_kind("application/vnd.google-apps.document"), FileKind::Doc);
        assert_eq!(file_kind("application/vnd.ms-excel"), FileKind::Sheet);
        assert_eq!(file_kind("application/vnd.google-apps.spreadsheet"), FileKind::Sheet);
        assert_eq!(file_kind("application/vnd.google-apps.presentation"), FileKind::Slides);
        assert_eq!(file_kind("application/zip"), FileKind::File);
    }

    #[test]
    fn test_file_kind_precedence() {
        // "document" wins over "sheet" for OOXML spreadsheets
        assert_eq!(
            file_kind("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            FileKind::Doc
        );
    }

    #[test]
    fn test_view_url_native_document_opens_app() {
        let doc = item("doc1", "application/vnd.google-apps.document");
        assert_eq!(view_url(&doc), "https://drive.google.com/open?id=doc1");
    }

    #[test]
    fn test_view_url_regular_file_uses_preview() {
        let pdf = item("pdf1", "application/pdf");
        assert_eq!(view_url(&pdf), "https://drive.google.com/file/d/pdf1/preview");
    }

    #[test]
    fn test_download_and_folder_urls() {
        let pdf = item("pdf1", "application/pdf");
        assert_eq!(
            download_url(&pdf),
            "https://drive.google.com/uc?id=pdf1&export=download"
        );
        assert_eq!(folder_url("f1"), "https://drive.google.com/drive/folders/f1");
    }
}
