//! Anonymous visitor ids sent along with chat messages.

use rand::Rng;
use shopfront_cache::{LocalStore, StorageKey};

const GUEST_ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const GUEST_ID_LEN: usize = 6;

/// A fresh `guest_xxxxxx` id.
pub fn generate_guest_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..GUEST_ID_LEN)
        .map(|_| GUEST_ID_CHARS[rng.gen_range(0..GUEST_ID_CHARS.len())] as char)
        .collect();
    format!("guest_{}", suffix)
}

/// The stored visitor id, creating and storing one on first use.
pub fn guest_id(store: &LocalStore) -> Result<String, shopfront_cache::CacheError> {
    if let Some(id) = store.read_or::<Option<String>>(StorageKey::UserId, None) {
        return Ok(id);
    }
    let id = generate_guest_id();
    store.write(StorageKey::UserId, &id)?;
    tracing::debug!(guest_id = %id, "assigned guest id");
    Ok(id)
}
