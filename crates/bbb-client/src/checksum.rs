//! Request checksum computation.
//!
//! The server authenticates callers by a SHA-1 digest over the operation
//! name, the serialized query string and the shared secret, concatenated
//! in that order with nothing in between. The digest travels as the final
//! `checksum` query parameter; the server recomputes it and rejects the
//! request on mismatch. The protocol fixes the algorithm to SHA-1, which
//! is why ring's legacy-use constant appears here.

use ring::digest;

/// Computes the lowercase hex checksum for one request.
///
/// `query` is the already-serialized parameter string, possibly empty.
/// Identical inputs always produce identical output.
#[must_use]
pub fn compute(operation: &str, query: &str, secret: &str) -> String {
    let mut input = String::with_capacity(operation.len() + query.len() + secret.len());
    input.push_str(operation);
    input.push_str(query);
    input.push_str(secret);

    let digest = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, input.as_bytes());
    hex::encode(digest.as_ref())
}
