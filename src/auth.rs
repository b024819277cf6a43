use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Alphabet used for nonce generation: digits, lowercase, uppercase.
/// The server expects exactly this 62-symbol set; do not change it.
pub const NONCE_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Nonce length used when the caller has no reason to pick another.
pub const DEFAULT_NONCE_LENGTH: usize = 10;

/// Generate a random alphanumeric nonce of `length` characters, drawing
/// entropy from the supplied RNG. Each character is chosen independently and
/// uniformly from [`NONCE_ALPHABET`]. A `length` of 0 yields the empty string.
///
/// Nonces are per-request salts that vary the signature and let the server
/// reject naive replays. They are not secrets, so any `Rng` will do; tests
/// pass a seeded `StdRng` for reproducible sequences.
pub fn generate_nonce_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..NONCE_ALPHABET.len());
            NONCE_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a random alphanumeric nonce of `length` characters using the
/// thread-local RNG.
pub fn generate_nonce(length: usize) -> String {
    generate_nonce_with(&mut rand::thread_rng(), length)
}

/// Compute the HMAC-SHA1 request signature for the wavepipe API.
///
/// The signing string is `"<identifier>-<nonce>-<method>-<resource>"`:
/// literal hyphen separators, no escaping. `identifier` is the session's
/// public key, or a numeric user ID in decimal. `method` is the uppercase
/// HTTP verb; `resource` is the request path without query string or host.
/// The HMAC key is `secret` taken as raw bytes.
///
/// Returns the digest as 40 lowercase hex characters.
///
/// Any inputs are accepted, including empty strings; the reference scheme
/// performs no validation and neither do we. Note that a hyphen inside a
/// field cannot be told apart from a separator, so distinct input tuples can
/// produce the same signing string. That ambiguity is part of the wire
/// contract and is preserved as-is.
pub fn api_signature(
    identifier: &str,
    nonce: &str,
    method: &str,
    resource: &str,
    secret: &str,
) -> String {
    let sign_string = format!("{identifier}-{nonce}-{method}-{resource}");

    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(sign_string.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
