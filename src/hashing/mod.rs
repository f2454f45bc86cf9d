/// Length of [`mention_key`] output in hex characters.
pub const MENTION_KEY_LEN: usize = 64;

/// Raw 32-byte BLAKE3 digest of a mention (in-memory key form).
#[inline]
pub fn hash_mention(mention: &str) -> [u8; 32] {
    *blake3::hash(mention.as_bytes()).as_bytes()
}

/// Computes the cache key of a mention as a lowercase hex BLAKE3 digest.
///
/// The key is taken over the raw bytes of the mention exactly as it was
/// extracted upstream. Whitespace, case and Unicode form all matter: `"Paris"`,
/// `" Paris"` and `"paris"` address three different records. Normalized ladder
/// variants are never hashed.
///
/// # Key Length
///
/// The full 256-bit output is kept. Records are content-addressed on disk, so a
/// collision would silently return another mention's identifier; truncating the
/// digest is not worth that risk for a key that is only computed once per call.
#[inline]
pub fn mention_key(mention: &str) -> String {
    key_to_hex(&hash_mention(mention))
}

/// Renders a raw digest as the lowercase hex form used on disk.
#[inline]
pub fn key_to_hex(hash: &[u8; 32]) -> String {
    blake3::Hash::from_bytes(*hash).to_hex().to_string()
}

/// Returns `true` if `key` has the shape produced by [`mention_key`].
#[inline]
pub fn is_mention_key(key: &str) -> bool {
    key.len() == MENTION_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mention_key_determinism() {
        let mention = "Eiffel Tower";

        let key1 = mention_key(mention);
        let key2 = mention_key(mention);
        let key3 = mention_key(mention);

        assert_eq!(key1, key2);
        assert_eq!(key2, key3);
    }

    #[test]
    fn test_mention_key_uses_raw_text() {
        let mentions = ["Paris", " Paris", "paris", "Paris ", "  tHe EIFFEL tower "];

        let keys: Vec<_> = mentions.iter().map(|m| mention_key(m)).collect();
        let unique: HashSet<_> = keys.iter().collect();

        assert_eq!(unique.len(), mentions.len());
    }

    #[test]
    fn test_mention_key_fixed_length() {
        for mention in ["", "a", "Tour Eiffel", &"x".repeat(10_000)] {
            let key = mention_key(mention);
            assert_eq!(key.len(), MENTION_KEY_LEN);
            assert!(is_mention_key(&key));
        }
    }

    #[test]
    fn test_mention_key_matches_raw_hash() {
        let key = mention_key("Rome");
        let raw = hash_mention("Rome");
        let hex: String = raw.iter().map(|b| format!("{:02x}", b)).collect();

        assert_eq!(key, hex);
    }

    #[test]
    fn test_mention_key_unicode() {
        assert_ne!(mention_key("München"), mention_key("Munchen"));
        assert_eq!(mention_key("東京").len(), MENTION_KEY_LEN);
    }

    #[test]
    fn test_is_mention_key_rejects_other_shapes() {
        assert!(!is_mention_key(""));
        assert!(!is_mention_key("abc"));
        assert!(!is_mention_key(&"G".repeat(MENTION_KEY_LEN)));
        assert!(!is_mention_key(&"A".repeat(MENTION_KEY_LEN)));
    }
}
