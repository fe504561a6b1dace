use rand::Rng;

const PREFIX: &str = "session_";
const SUFFIX_LEN: usize = 13;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build a token of the form `session_<unix-millis>_<base36 suffix>`.
///
/// Uniqueness comes from the timestamp plus the random suffix; the token is
/// an identifier, not a secret.
pub fn generate_session_id<R: Rng + ?Sized>(now_millis: i64, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}_{}", PREFIX, now_millis, suffix)
}

/// Check that a stored value still looks like a token we issued.
pub fn is_valid_session_id(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };
    !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && (1..=SUFFIX_LEN).contains(&suffix.len())
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_token_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let token = generate_session_id(1_735_689_600_000, &mut rng);

        assert!(token.starts_with("session_1735689600000_"));
        assert_eq!(token.len(), "session_1735689600000_".len() + SUFFIX_LEN);
        assert!(is_valid_session_id(&token));
    }

    #[test]
    fn test_tokens_differ_within_same_millisecond() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = generate_session_id(1000, &mut rng);
        let b = generate_session_id(1000, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_garbled_values() {
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id("session_"));
        assert!(!is_valid_session_id("session_123"));
        assert!(!is_valid_session_id("session_12a_abc"));
        assert!(!is_valid_session_id("session_123_"));
        assert!(!is_valid_session_id("session_123_ABC"));
        assert!(!is_valid_session_id("user_123_abc"));
        assert!(!is_valid_session_id("session_123_abcdefghijklmn"));
    }

    #[test]
    fn test_accepts_short_suffix() {
        // Older tokens could carry a shorter suffix
        assert!(is_valid_session_id("session_1699999999999_k3j9x"));
    }
}
