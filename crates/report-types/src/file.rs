use serde::{Deserialize, Serialize};

/// Extensions the upload picker accepts. Not a security boundary.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv", "pdf", "vb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    #[default]
    Uploaded,
    Error,
}

/// Reference to an uploaded (or uploading) file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default = "full_progress")]
    pub upload_progress: u8,
    #[serde(default)]
    pub status: UploadStatus,
}

fn full_progress() -> u8 {
    100
}

impl FileAttachment {
    /// Placeholder shown while the upload is in flight.
    pub fn pending(id: impl Into<String>, upload: &FileUpload) -> Self {
        Self {
            id: id.into(),
            name: upload.name.clone(),
            size: upload.size(),
            mime_type: upload.mime_type.clone(),
            upload_progress: 0,
            status: UploadStatus::Uploading,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        self.status == UploadStatus::Uploaded
    }
}

/// A file picked by the user, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Lowercased extension of a file name, without the dot.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_accepted_upload(name: &str, accepted: &[String]) -> bool {
    match file_extension(name) {
        Some(ext) => accepted.iter().any(|a| a.trim_start_matches('.') == ext),
        None => false,
    }
}

/// Broad category used to pick a badge for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Spreadsheet,
    Pdf,
    Text,
}

impl FileKind {
    pub fn of(name: &str) -> Self {
        match file_extension(name).as_deref() {
            Some("xlsx") | Some("xls") | Some("csv") => FileKind::Spreadsheet,
            Some("pdf") => FileKind::Pdf,
            _ => FileKind::Text,
        }
    }
}

/// Human readable size, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
