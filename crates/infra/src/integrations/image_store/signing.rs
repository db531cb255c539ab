//! Request signing for the image provider
//!
//! The signature is the hex SHA-256 digest of the signed parameters, sorted
//! by name and joined as `k=v&k=v`, with the API secret appended.

use sha2::{Digest, Sha256};

/// Compute the upload signature for `params`.
///
/// Parameters with empty values are skipped.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut signed: Vec<&(&str, &str)> =
        params.iter().filter(|(_, value)| !value.is_empty()).collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    let joined = signed
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_order_independent() {
        let a = sign_params(&[("timestamp", "1700000000"), ("folder", "cards")], "secret");
        let b = sign_params(&[("folder", "cards"), ("timestamp", "1700000000")], "secret");
        assert_eq!(a, b);
    }

    #[test]
    fn signature_matches_manual_digest() {
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(b"folder=cards&timestamp=1700000000secret");
            hex::encode(hasher.finalize())
        };

        assert_eq!(
            sign_params(&[("timestamp", "1700000000"), ("folder", "cards")], "secret"),
            expected
        );
    }

    #[test]
    fn empty_values_are_not_signed() {
        assert_eq!(
            sign_params(&[("timestamp", "1"), ("folder", "")], "s"),
            sign_params(&[("timestamp", "1")], "s")
        );
    }

    #[test]
    fn secret_changes_signature() {
        let params = [("timestamp", "1")];
        assert_ne!(sign_params(&params, "one"), sign_params(&params, "two"));
        assert_eq!(sign_params(&params, "one").len(), 64);
    }
}
