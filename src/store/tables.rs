use redb::TableDefinition;

use crate::constants::{DONATIONS_COLLECTION, NGO_REQUESTS_COLLECTION};

/// Donations collection: document id -> JSON document bytes
pub const DONATIONS: TableDefinition<u64, &[u8]> = TableDefinition::new(DONATIONS_COLLECTION);

/// NGO requests collection: document id -> JSON document bytes
pub const NGO_REQUESTS: TableDefinition<u64, &[u8]> = TableDefinition::new(NGO_REQUESTS_COLLECTION);

/// Resolve a collection name to its table definition
///
/// The store only knows the collections this service writes; anything else
/// is a caller bug surfaced as `StoreError::UnknownCollection`.
pub fn for_collection(name: &str) -> Option<TableDefinition<'static, u64, &'static [u8]>> {
    match name {
        DONATIONS_COLLECTION => Some(DONATIONS),
        NGO_REQUESTS_COLLECTION => Some(NGO_REQUESTS),
        _ => None,
    }
}
