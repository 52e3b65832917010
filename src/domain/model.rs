use crate::utils::error::{CardCheckError, Result};
use crate::utils::validation::is_numeric;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Digits typed into (or extracted for) the card-number field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardNumberInput(String);

impl CardNumberInput {
    pub fn parse(raw: &str) -> Result<Self> {
        if !is_numeric(raw) {
            return Err(CardCheckError::NonNumericInput {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four digits only, for logs.
    pub fn masked(&self) -> String {
        let len = self.0.len();
        if len <= 4 {
            return "*".repeat(len);
        }
        format!("{}{}", "*".repeat(len - 4), &self.0[len - 4..])
    }
}

/// A file picked for upload. Size and type are left for the server to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Inner markup of the `.result` and `.card-type` elements of a `/validate` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFragment {
    pub result: String,
    pub card_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub encrypted_card_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    pub encrypted_card_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResponse {
    pub decrypted_card_number: String,
}

/// What `/validate` sent back. The status is informational only.
#[derive(Debug, Clone)]
pub struct ValidateReply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateOutcome {
    /// Rejected locally; no request was made.
    NonNumeric,
    Rendered(ValidationFragment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Rejected { message: String },
    NothingExtracted,
    DecryptionFailed,
    Validated(ValidateOutcome),
}
