//! Text-field normalization before persistence
//!
//! The designated location fields are stored upper-cased so that equality
//! queries match regardless of input casing. Contact fields, the link, and
//! coordinates are stored verbatim.

use super::record::StoreRecord;

/// Upper-case the normalized text fields of a record.
///
/// Pure and idempotent: `normalize(normalize(r)) == normalize(r)`.
pub fn normalize(mut record: StoreRecord) -> StoreRecord {
    record.code_name = record.code_name.to_uppercase();
    record.country = record.country.to_uppercase();
    record.city = record.city.to_uppercase();
    record.address = record.address.to_uppercase();
    record
}
