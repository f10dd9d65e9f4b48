//! Core types for scale-config

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hex identifier of the file whose transmission applies all pending updates
pub const TRIGGER_FILE_HEX: &str = "25H";

/// A product to be linked to a physical e-label tag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductTagLink {
    /// PLU number (e.g., 10)
    #[serde(alias = "PluNumber")]
    pub plu_number: u32,
    /// 9-digit physical tag ID (e.g., "111111111")
    #[serde(alias = "TagId")]
    pub tag_id: String,
    /// Human-readable name (e.g., "Angus Beef"); encoded as at most 100 ASCII bytes
    #[serde(alias = "ProductName")]
    pub product_name: String,
    /// Image number on the scale (e.g., 42)
    #[serde(alias = "ImageId")]
    pub image_id: u32,
}

/// One generated scale file with its raw content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Descriptive name (e.g., "AA PLU4 FILE")
    pub file_name: &'static str,
    /// Protocol file number in hex notation (e.g., "AAH")
    pub file_number_hex: &'static str,
    /// Protocol file number in decimal (e.g., 170)
    pub file_number_decimal: u32,
    /// Binary file content
    pub content: Vec<u8>,
}

impl GeneratedFile {
    /// Whether this file has to be transmitted after all others
    pub fn is_trigger(&self) -> bool {
        self.file_number_hex == TRIGGER_FILE_HEX
    }
}

/// Transport form of a generated file, content encoded as Base64
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFile {
    /// Descriptive name (e.g., "AA PLU4 FILE")
    pub file_name: String,
    /// Protocol file number in hex notation (e.g., "AAH")
    pub file_number_hex: String,
    /// Protocol file number in decimal (e.g., 170)
    pub file_number_decimal: u32,
    /// Binary file content, Base64 encoded
    pub content_base64: String,
}

impl From<&GeneratedFile> for ScaleFile {
    fn from(file: &GeneratedFile) -> Self {
        Self {
            file_name: file.file_name.to_string(),
            file_number_hex: file.file_number_hex.to_string(),
            file_number_decimal: file.file_number_decimal,
            content_base64: STANDARD.encode(&file.content),
        }
    }
}

/// Result of file generation, as returned to read-only consumers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated files in transmission-independent order (AAH, CCH, 25H)
    pub files: Vec<ScaleFile>,
}

impl GenerationResult {
    /// Convert raw generated files into their transport form
    pub fn from_files(files: &[GeneratedFile]) -> Self {
        Self {
            files: files.iter().map(ScaleFile::from).collect(),
        }
    }
}

/// Request body for an upload to a scale
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// IPv4 or IPv6 literal of the target scale
    #[serde(alias = "ScaleIpAddress")]
    pub scale_ip_address: String,
    /// Products to encode and transmit
    #[serde(alias = "Products")]
    pub products: Vec<ProductTagLink>,
}

/// Outcome of one upload attempt
///
/// Failures that the upload flow anticipates (bad address, missing driver,
/// driver exit code) are reported here rather than as errors. The log is
/// never truncated on failure.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    /// Whether every driver invocation succeeded
    pub success: bool,
    /// Summary message
    pub message: String,
    /// Ordered log of everything the attempt did
    pub log: Vec<String>,
}

impl UploadResult {
    /// A successful attempt
    pub fn succeeded(message: impl Into<String>, log: Vec<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            log,
        }
    }

    /// A failed attempt
    pub fn failed(message: impl Into<String>, log: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            log,
        }
    }
}
