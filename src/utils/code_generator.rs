//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly from `[A-Za-z0-9]`, giving
//! 62^6 (about 56.8 billion) possible values. Uniqueness is checked against
//! storage by [`crate::application::services::LinkService`].

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Codes that would shadow fixed routes and are never issued.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Generates a random short code using the thread-local RNG.
///
/// The RNG is not required to be cryptographically secure.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a short code from the given RNG.
///
/// Each character is sampled independently from the 62-character alphabet.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
///
/// Anything else cannot exist in storage, so callers may answer "not found"
/// without a lookup.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `code` is reserved for a system route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..500 {
            let code = generate_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample: String = (0..200).map(|_| generate_code_with(&mut rng)).collect();

        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_with_seed_is_deterministic() {
        let first = generate_code_with(&mut StdRng::seed_from_u64(42));
        let second = generate_code_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generated_codes_are_valid() {
        for _ in 0..100 {
            assert!(is_valid_code(&generate_code()));
        }
    }

    #[test]
    fn test_is_valid_code_rejects_wrong_length() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abc1234"));
    }

    #[test]
    fn test_is_valid_code_rejects_symbols() {
        assert!(!is_valid_code("abc-12"));
        assert!(!is_valid_code("abc_12"));
        assert!(!is_valid_code("abc 12"));
        assert!(!is_valid_code("ábc123"));
    }

    #[test]
    fn test_is_valid_code_accepts_mixed_case() {
        assert!(is_valid_code("aB3xY9"));
        assert!(is_valid_code("000000"));
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("health"));
        assert!(!is_reserved("Health"));
        assert!(!is_reserved("abc123"));
    }
}
