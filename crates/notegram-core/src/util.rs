use sha2::{Digest, Sha256};

/// Order-sensitive digest of the fetched corpus. Rows are length-prefixed
/// before hashing so ["ab"] and ["a", "b"] fingerprint differently.
pub fn corpus_fingerprint(rows: &[String]) -> String {
    let mut hasher = Sha256::new();
    for row in rows {
        hasher.update((row.len() as u64).to_le_bytes());
        hasher.update(row.as_bytes());
    }
    hex::encode(hasher.finalize())
}
