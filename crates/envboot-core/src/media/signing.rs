//! Request signing for the media API
//!
//! Parameters are sorted by name, empty values dropped, joined as
//! `k=v&k=v`, the API secret appended, and the whole string hashed with
//! SHA-256 (sent alongside `signature_algorithm=sha256`).

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Parameters the service leaves out of the signature
const UNSIGNED_PARAMS: &[&str] = &["file", "cloud_name", "resource_type", "api_key"];

pub fn string_to_sign(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .filter(|(k, v)| !v.is_empty() && !UNSIGNED_PARAMS.contains(&k.as_str()))
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Hex SHA-256 signature of `params` under `api_secret`
pub fn sign_params(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_string_to_sign_sorted_and_filtered() {
        let p = params(&[
            ("timestamp", "1315060510"),
            ("public_id", "sample_image"),
            ("file", "https://example.com/a.png"),
            ("api_key", "abc123"),
            ("folder", ""),
        ]);
        assert_eq!(string_to_sign(&p), "public_id=sample_image&timestamp=1315060510");
    }

    #[test]
    fn test_known_signature() {
        let p = params(&[("timestamp", "1315060510"), ("public_id", "sample_image")]);
        assert_eq!(
            sign_params(&p, "abcd"),
            "e3c44b54e67a3ecc918f5d7236ca5faa36250ea8a8cd6cbabfd2d6bb2453acac"
        );
    }

    #[test]
    fn test_empty_params_sign_secret_only() {
        assert_eq!(
            sign_params(&BTreeMap::new(), "abcd"),
            "88d4266fd4e6338d13b845fcf289579d209c897823b9217da3e161936f031589"
        );
    }
}
