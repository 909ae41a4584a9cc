use rand::seq::SliceRandom;
use rand::Rng;

/// Substrings that force the crisis reply, checked before anything else.
pub const CRISIS_KEYWORDS: &[&str] = &["suicide", "kill", "die", "end it"];

/// Keyword of the knowledge row used as the crisis reply.
pub const CRISIS_ENTRY: &str = "suicide";

pub const NAME_PHRASE: &str = "my name is";

pub const DEFAULT_NAME: &str = "friend";

/// True if the lowercased text contains any crisis keyword.
pub fn is_crisis(text: &str) -> bool {
    let text = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Pull a name out of "... my name is X". Returns None when the phrase
/// is absent. The name is whatever follows the last standalone "is".
pub fn extract_name(text: &str) -> Option<String> {
    let text = text.to_lowercase();
    if !text.contains(NAME_PHRASE) {
        return None;
    }

    let after = last_word_is(&text)
        .map(|idx| &text[idx + 2..])
        .unwrap_or("");
    Some(capitalize(after.trim()))
}

fn last_word_is(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    text.rmatch_indices("is")
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let before_ok = idx == 0 || !is_word(bytes[idx - 1]);
            let after_ok = idx + 2 >= bytes.len() || !is_word(bytes[idx + 2]);
            before_ok && after_ok
        })
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Uniform choice among matches.
pub fn choose_match<R: Rng + ?Sized>(
    matches: &[(String, String)],
    rng: &mut R,
) -> Option<(String, String)> {
    matches.choose(rng).cloned()
}

/// Name to greet the user with; empty stored names count as unset.
pub fn display_name(stored: Option<String>) -> String {
    stored
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn crisis_keywords_any_case() {
        assert!(is_crisis("I want to KILL myself"));
        assert!(is_crisis("thinking about suicide"));
        assert!(is_crisis("I just want to end it all"));
        assert!(is_crisis("I could die"));
        assert!(!is_crisis("I have anxiety"));
        assert!(!is_crisis(""));
    }

    #[test]
    fn crisis_is_plain_substring() {
        // "die" inside "diet" still trips the check
        assert!(is_crisis("my diet is bad"));
        assert!(is_crisis("skills"));
    }

    #[test]
    fn extract_name_basic() {
        assert_eq!(extract_name("my name is Alex").as_deref(), Some("Alex"));
        assert_eq!(extract_name("Hi, MY NAME IS   sam  ").as_deref(), Some("Sam"));
        assert_eq!(extract_name("hello"), None);
    }

    #[test]
    fn extract_name_ignores_is_inside_words() {
        assert_eq!(extract_name("my name is Chris").as_deref(), Some("Chris"));
        assert_eq!(extract_name("my name is Isla").as_deref(), Some("Isla"));
    }

    #[test]
    fn extract_name_takes_text_after_last_is() {
        assert_eq!(
            extract_name("my name is jo and this is fun").as_deref(),
            Some("Fun")
        );
        assert_eq!(extract_name("my name is mary ann").as_deref(), Some("Mary ann"));
        assert_eq!(extract_name("my name is").as_deref(), Some(""));
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("aLEX"), "Alex");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn choose_match_is_member() {
        let matches = vec![
            ("a".to_string(), "A".to_string()),
            ("b".to_string(), "B".to_string()),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = choose_match(&matches, &mut rng).unwrap();
            assert!(matches.contains(&picked));
        }
        assert_eq!(choose_match(&[], &mut rng), None);
    }

    #[test]
    fn display_name_defaults_to_friend() {
        assert_eq!(display_name(None), "friend");
        assert_eq!(display_name(Some("".into())), "friend");
        assert_eq!(display_name(Some("Alex".into())), "Alex");
    }
}
