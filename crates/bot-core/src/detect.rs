//! Effective-language resolution.
//!
//! Decides which language a turn is answered in: the stored preference when
//! auto-detect is off, otherwise the detector's verdict collapsed onto the
//! closed set. Detection is statistical (trigram-based, no RNG), so the same
//! input always resolves the same way across runs.

use crate::lang::Language;

/// Resolve the effective language for one turn.
///
/// With `auto_detect` off the stored preference wins regardless of input.
/// With it on, the text is detected and collapsed by prefix; empty input,
/// detector failure, or any out-of-set verdict all fall back to English.
pub fn resolve(text: &str, preferred: Language, auto_detect: bool) -> Language {
    if !auto_detect {
        return preferred;
    }
    detect(text)
}

/// Detect the language of a text, collapsed onto the closed set.
pub fn detect(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::En;
    }
    match whatlang::detect_lang(text) {
        Some(lang) => Language::collapse(lang.code()),
        None => Language::En,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_wins_when_auto_detect_off() {
        // Input content is irrelevant with auto-detect disabled.
        assert_eq!(resolve("hello there", Language::Fr, false), Language::Fr);
        assert_eq!(resolve("مرحبا بالعالم", Language::Fr, false), Language::Fr);
        assert_eq!(resolve("", Language::Ar, false), Language::Ar);
    }

    #[test]
    fn test_detects_arabic() {
        assert_eq!(
            resolve("السلام عليكم، كيف حالك اليوم؟", Language::En, true),
            Language::Ar
        );
    }

    #[test]
    fn test_detects_french() {
        assert_eq!(
            resolve(
                "Bonjour, pourriez-vous m'expliquer comment fonctionne ceci ?",
                Language::En,
                true
            ),
            Language::Fr
        );
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(
            resolve(
                "Hello, could you please explain how this works?",
                Language::Ar,
                true
            ),
            Language::En
        );
    }

    #[test]
    fn test_empty_input_falls_back_to_english() {
        assert_eq!(detect(""), Language::En);
        assert_eq!(detect("   \n\t"), Language::En);
    }

    #[test]
    fn test_out_of_set_language_collapses_to_english() {
        // German is outside the closed set.
        assert_eq!(
            detect("Guten Morgen, wie geht es Ihnen heute? Ich hätte gerne etwas Kaffee."),
            Language::En
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let text = "Merci beaucoup pour votre aide précieuse aujourd'hui";
        let first = detect(text);
        for _ in 0..10 {
            assert_eq!(detect(text), first);
        }
    }
}
