//! Record layouts for the AAH, CCH and 25H files
//!
//! Multi-byte integers are little-endian. Each record is written field by field
//! and then fixed to its declared record size: the reserved tail is zero-filled
//! up to that size and nothing is emitted past it. The declared sizes are
//! protocol constants and are not derived from the field list.

use super::fields::{put_fixed_ascii, put_packed_decimal};
use crate::error::{Error, Result};
use crate::types::ProductTagLink;
use bytes::{BufMut, Bytes, BytesMut};

/// Size of one PLU link (AAH) record
pub const LINK_RECORD_SIZE: usize = 30;

/// Size of one tag info (CCH) record
pub const TAG_INFO_RECORD_SIZE: usize = 176;

/// Content of the trigger (25H) file.
///
/// The layout of this file is not documented by the vendor; the scale only
/// needs it to arrive last. The bytes never depend on the products.
pub const TRIGGER_PLACEHOLDER: &[u8] = b"// MOCK FILE - The structure for 25H (PLU FILE) was not \
// provided in the setup documentation. \
// This file is required to trigger the tag update.";

/// Status bit 5: update the e-label
const STATUS_UPDATE_E_LABEL: u32 = 1 << 5;

/// Tag type 999: auto init
const TAG_TYPE_AUTO_INIT: i32 = 999;

const PRODUCT_NAME_LEN: usize = 100;

/// Encode one PLU link record per product.
///
/// | offset | size | field |
/// |---|---|---|
/// | 0 | 4 | PLU number, packed decimal |
/// | 4 | 2 | record size (30) |
/// | 6 | 4 | status, bit 5 set |
/// | 10 | 4 | e-label address (0) |
/// | 14 | 2 | e-label format, packed decimal (0) |
/// | 16 | 4 | image id, packed decimal |
/// | 20 | 10 | reserved: image 2, image 3, min/max temperature |
///
/// The e-label commodity text is not sent.
pub fn encode_link_records(products: &[ProductTagLink]) -> Bytes {
    let mut out = BytesMut::with_capacity(products.len() * LINK_RECORD_SIZE);

    for product in products {
        put_record(&mut out, LINK_RECORD_SIZE, |record| {
            put_packed_decimal(record, u64::from(product.plu_number), 4);
            record.put_u16_le(LINK_RECORD_SIZE as u16);
            record.put_u32_le(STATUS_UPDATE_E_LABEL);
            record.put_u32_le(0);
            put_packed_decimal(record, 0, 2);
            put_packed_decimal(record, u64::from(product.image_id), 4);
        });
    }

    out.freeze()
}

/// Encode one tag info record per product.
///
/// | offset | size | field |
/// |---|---|---|
/// | 0 | 4 | tag id, i32 |
/// | 4 | 2 | record size (176) |
/// | 6 | 100 | product name, zero-padded ASCII |
/// | 106 | 4 | tag type (999, auto init) |
/// | 110 | 4 | PLU number, u32 |
/// | 114 | 62 | reserved: traceability number through sensitivity upper limit |
///
/// Fails with [`Error::InvalidTagId`] on the first tag id that is not a 32-bit
/// decimal integer; nothing is returned for the other products in that case.
pub fn encode_tag_info_records(products: &[ProductTagLink]) -> Result<Bytes> {
    let mut out = BytesMut::with_capacity(products.len() * TAG_INFO_RECORD_SIZE);

    for product in products {
        let tag_id = parse_tag_id(&product.tag_id)?;

        put_record(&mut out, TAG_INFO_RECORD_SIZE, |record| {
            record.put_i32_le(tag_id);
            record.put_u16_le(TAG_INFO_RECORD_SIZE as u16);
            put_fixed_ascii(record, &product.product_name, PRODUCT_NAME_LEN);
            record.put_i32_le(TAG_TYPE_AUTO_INIT);
            record.put_u32_le(product.plu_number);
        });
    }

    Ok(out.freeze())
}

/// The constant trigger file content
pub fn encode_trigger_placeholder() -> Bytes {
    Bytes::from_static(TRIGGER_PLACEHOLDER)
}

fn parse_tag_id(tag_id: &str) -> Result<i32> {
    tag_id.trim().parse().map_err(|_| Error::InvalidTagId {
        tag_id: tag_id.to_string(),
    })
}

/// Lay out one record with `fill`, then fix it to exactly `size` bytes.
fn put_record(out: &mut BytesMut, size: usize, fill: impl FnOnce(&mut BytesMut)) {
    let mut record = BytesMut::with_capacity(size);
    fill(&mut record);
    record.resize(size, 0);
    out.extend_from_slice(&record);
}
