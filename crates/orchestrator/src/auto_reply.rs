//! Pattern-based canned replies.
//!
//! An ordered rule list per language, matched case-insensitively against
//! the raw text. The first matching rule wins; there is no scoring and no
//! cross-language fallback. Three categories per language: greeting,
//! gratitude, and identity. Pure - logging and delivery belong to the
//! pipeline.

use bot_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Regex,
    reply: &'static str,
}

fn rule(pattern: &str, reply: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("hard-coded auto-reply pattern"),
        reply,
    }
}

static AR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(
            r"(?i)^(sal[aā]m|سلام|السلام عليكم)\b",
            "وعليكم السلام! كيف نقدر نعاونك؟",
        ),
        rule(r"(?i)(شكرا|يعطيك الصحة|بارك الله فيك)", "على الرحب والسعة! ✨"),
        rule(
            r"(?i)(من (.*)انت|شنو هاد|واش انت)",
            "أنا مساعد ذكي جاهز لمساعدتك 😄",
        ),
    ]
});

static FR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(
            r"(?i)^(salut|bonjour|bonsoir)\b",
            "Salut ! Comment puis-je t’aider ?",
        ),
        rule(r"(?i)(merci|thanks)", "Avec plaisir ! ✨"),
        rule(
            r"(?i)(tu es qui|c'est quoi ce bot)",
            "Je suis un assistant IA, ravi de t’aider 😄",
        ),
    ]
});

static EN_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)^(hi|hello|hey)\b", "Hey! How can I help?"),
        rule(r"(?i)(thanks|thank you)", "You're welcome! ✨"),
        rule(
            r"(?i)(who are you|what are you)",
            "I'm an AI assistant, happy to help 😄",
        ),
    ]
});

fn rules_for(lang: Language) -> &'static [Rule] {
    match lang {
        Language::Ar => &AR_RULES,
        Language::Fr => &FR_RULES,
        Language::En => &EN_RULES,
    }
}

/// Try to produce a canned reply for the text in the given language.
///
/// Returns the first matching rule's reply, or `None` to hand the turn to
/// the AI backend.
pub fn try_auto_reply(text: &str, lang: Language) -> Option<&'static str> {
    for rule in rules_for(lang) {
        if rule.pattern.is_match(text) {
            return Some(rule.reply);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_greeting() {
        let reply = try_auto_reply("hello there", Language::En);
        assert_eq!(reply, Some("Hey! How can I help?"));
    }

    #[test]
    fn test_greeting_anchored_at_start() {
        // The greeting rule is anchored; mid-sentence greetings fall through
        // to the gratitude/identity rules or the AI.
        assert_eq!(try_auto_reply("I came to say hello", Language::En), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(try_auto_reply("HELLO", Language::En).is_some());
        assert!(try_auto_reply("Bonjour tout le monde", Language::Fr).is_some());
    }

    #[test]
    fn test_first_match_wins() {
        // "hey thanks" matches both the greeting and the gratitude rule;
        // list order decides.
        let reply = try_auto_reply("hey thanks", Language::En);
        assert_eq!(reply, Some("Hey! How can I help?"));
    }

    #[test]
    fn test_no_cross_language_fallback() {
        // An English greeting resolved as French matches nothing.
        assert_eq!(try_auto_reply("hello there", Language::Fr), None);
    }

    #[test]
    fn test_arabic_greeting() {
        assert!(try_auto_reply("السلام عليكم", Language::Ar).is_some());
        assert!(try_auto_reply("salam alikum", Language::Ar).is_some());
    }

    #[test]
    fn test_gratitude() {
        assert_eq!(
            try_auto_reply("ok thank you so much", Language::En),
            Some("You're welcome! ✨")
        );
        assert_eq!(
            try_auto_reply("merci beaucoup", Language::Fr),
            Some("Avec plaisir ! ✨")
        );
    }

    #[test]
    fn test_identity() {
        assert!(try_auto_reply("so who are you exactly?", Language::En).is_some());
        assert!(try_auto_reply("tu es qui ?", Language::Fr).is_some());
    }

    #[test]
    fn test_unmatched_text_returns_none() {
        assert_eq!(try_auto_reply("explain recursion", Language::En), None);
        assert_eq!(try_auto_reply("", Language::En), None);
    }
}
