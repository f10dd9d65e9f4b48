//! Fixed-layout binary records for the scale's configuration files
//!
//! Every file is a plain concatenation of fixed-size records with no header,
//! separator or trailer; record boundaries follow from the record size alone.
//!
//! - [`fields`] writes the two non-native field types (packed decimal and
//!   zero-padded ASCII).
//! - [`records`] lays out the PLU link (AAH) and tag info (CCH) records and
//!   holds the constant trigger (25H) placeholder.

pub mod fields;
pub mod records;

pub use fields::{put_fixed_ascii, put_packed_decimal};
pub use records::{
    LINK_RECORD_SIZE, TAG_INFO_RECORD_SIZE, TRIGGER_PLACEHOLDER, encode_link_records,
    encode_tag_info_records, encode_trigger_placeholder,
};
