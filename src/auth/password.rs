use rand::distributions::{Alphanumeric, DistString};
use sha256::digest;

const METHOD: &str = "sha256";
const SALT_LENGTH: usize = 16;

/// Hashes a password with a fresh random salt.
///
/// The stored form is `sha256$<salt>$<hex digest of salt + password>`, the
/// plaintext never leaves this module.
///
/// # Example
/// ```
/// let stored = hash_password("hunter22");
/// assert!(verify_password(&stored, "hunter22"));
/// ```
pub fn hash_password(password: &str) -> String {
    let salt = Alphanumeric.sample_string(&mut rand::thread_rng(), SALT_LENGTH);

    format!("{}${}${}", METHOD, salt, salted_digest(&salt, password))
}

/// Checks a submitted password against a value produced by [hash_password].
/// Anything that isn't in the expected format never verifies.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(METHOD), Some(salt), Some(expected)) if !salt.is_empty() => {
            constant_time_eq(salted_digest(salt, password).as_bytes(), expected.as_bytes())
        }
        _ => false,
    }
}

fn salted_digest(salt: &str, password: &str) -> String {
    digest(format!("{}{}", salt, password))
}

/// Looks at every byte no matter where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let stored = hash_password("hunter22");

        assert_ne!(stored, "hunter22");
        assert!(!stored.contains("hunter22"));
        assert!(stored.starts_with("sha256$"));
    }

    #[test]
    fn test_verify() {
        let stored = hash_password("hunter22");

        assert!(verify_password(&stored, "hunter22"));
        assert!(!verify_password(&stored, "hunter23"));
        assert!(!verify_password(&stored, ""));
    }

    #[test]
    fn test_salt_differs_between_hashes() {
        assert_ne!(hash_password("same password"), hash_password("same password"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("hunter22", "hunter22"));
        assert!(!verify_password("md5$salt$abc", "hunter22"));
        assert!(!verify_password("sha256$$abc", "hunter22"));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abcdef", b"abcdef"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"abcdef", b"abcdeg"));
        assert!(!constant_time_eq(b"abcdef", b"xbcdef"));
        assert!(!constant_time_eq(b"abcdef", b"abcde"));
    }
}
