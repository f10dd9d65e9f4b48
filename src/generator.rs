//! Assembly of the three configuration files sent to the scale
//!
//! A generation call always yields, in this order:
//!
//! | file | hex | decimal |
//! |---|---|---|
//! | AA PLU4 FILE | AAH | 170 |
//! | CC TAG INFO FILE | CCH | 204 |
//! | PLU FILE (MOCK) | 25H | 37 |
//!
//! The file numbers are fixed by the scale protocol.

use crate::encoding::{encode_link_records, encode_tag_info_records, encode_trigger_placeholder};
use crate::error::Result;
use crate::types::{GeneratedFile, GenerationResult, ProductTagLink, TRIGGER_FILE_HEX};
use tracing::{info, warn};

/// PLU link file: attaches e-label data such as images to PLUs
pub const LINK_FILE_NAME: &str = "AA PLU4 FILE";
/// Hex file number of the PLU link file
pub const LINK_FILE_HEX: &str = "AAH";
/// Decimal file number of the PLU link file
pub const LINK_FILE_NUMBER: u32 = 170;

/// Tag info file: links a PLU to a physical tag id
pub const TAG_INFO_FILE_NAME: &str = "CC TAG INFO FILE";
/// Hex file number of the tag info file
pub const TAG_INFO_FILE_HEX: &str = "CCH";
/// Decimal file number of the tag info file
pub const TAG_INFO_FILE_NUMBER: u32 = 204;

/// Trigger file: its arrival makes the scale apply the previous files
pub const TRIGGER_FILE_NAME: &str = "PLU FILE (MOCK)";
/// Decimal file number of the trigger file
pub const TRIGGER_FILE_NUMBER: u32 = 37;

/// Generate the raw AAH, CCH and 25H files for `products`.
///
/// # Errors
///
/// Returns [`Error::InvalidTagId`](crate::Error::InvalidTagId) if a tag id is
/// not a 32-bit decimal integer.
pub fn generate_files(products: &[ProductTagLink]) -> Result<Vec<GeneratedFile>> {
    let link = encode_link_records(products);
    info!(
        file = LINK_FILE_NAME,
        hex = LINK_FILE_HEX,
        bytes = link.len(),
        "generated file"
    );

    let tag_info = encode_tag_info_records(products)?;
    info!(
        file = TAG_INFO_FILE_NAME,
        hex = TAG_INFO_FILE_HEX,
        bytes = tag_info.len(),
        "generated file"
    );

    let trigger = encode_trigger_placeholder();
    warn!(
        file = TRIGGER_FILE_NAME,
        hex = TRIGGER_FILE_HEX,
        "generating placeholder file, layout is not documented"
    );

    Ok(vec![
        GeneratedFile {
            file_name: LINK_FILE_NAME,
            file_number_hex: LINK_FILE_HEX,
            file_number_decimal: LINK_FILE_NUMBER,
            content: link.to_vec(),
        },
        GeneratedFile {
            file_name: TAG_INFO_FILE_NAME,
            file_number_hex: TAG_INFO_FILE_HEX,
            file_number_decimal: TAG_INFO_FILE_NUMBER,
            content: tag_info.to_vec(),
        },
        GeneratedFile {
            file_name: TRIGGER_FILE_NAME,
            file_number_hex: TRIGGER_FILE_HEX,
            file_number_decimal: TRIGGER_FILE_NUMBER,
            content: trigger.to_vec(),
        },
    ])
}

/// Generate the files for `products` in their Base64 transport form
pub fn generate_for_transport(products: &[ProductTagLink]) -> Result<GenerationResult> {
    info!(products = products.len(), "generating scale configuration files");
    let files = generate_files(products)?;
    Ok(GenerationResult::from_files(&files))
}
