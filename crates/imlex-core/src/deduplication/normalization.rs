//! Text normalization for duplicate comparison

/// Project a sentence onto its canonical comparison key.
///
/// Lowercases (Unicode-aware), then keeps only ASCII lowercase letters
/// and digits: `"No pain, no gain!"` -> `"nopainnogain"`. Characters
/// outside the class are dropped, not folded to a base letter. Total:
/// any input, including the empty string, produces a key.
pub fn canonical_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("No pain, no gain!", "nopainnogain")]
    #[test_case("I love dogs", "ilovedogs")]
    #[test_case("  Already clean  ", "alreadyclean")]
    #[test_case("3 eggs, please.", "3eggsplease")]
    #[test_case("", "" ; "empty string")]
    #[test_case("?!...", "" ; "only punctuation")]
    fn canonical_key_cases(input: &str, expected: &str) {
        assert_eq!(canonical_key(input), expected);
    }

    #[test]
    fn drops_non_ascii_rather_than_folding() {
        // Turkish letters outside ASCII disappear; dotted capital I
        // lowercases to an ASCII i plus a combining mark.
        assert_eq!(canonical_key("Çok güzel"), "okgzel");
        assert_eq!(canonical_key("İstanbul"), "istanbul");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let once = canonical_key("Where is the station?");
        assert_eq!(canonical_key(&once), once);
    }
}
