//! Command and callback-payload parsing.

use bot_core::Language;

/// Prefix carried by the language-choice button payloads.
const LANG_CALLBACK_PREFIX: &str = "lang_";

/// An explicit bot command, parsed from a leading-slash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` - welcome message plus language-choice buttons.
    Start,
    /// `/help` - localized command reference.
    Help,
    /// `/language` - re-offer the language-choice buttons.
    Language,
    /// `/auto` - toggle automatic language detection.
    Auto,
    /// `/clear` - wipe the conversation history.
    Clear,
    /// `/history` - show the most recent turns.
    History,
    /// `/about` - localized bot description.
    About,
    /// `/voice` - last bot reply, read out via the TTS boundary.
    Voice,
    /// `/details` - re-answer the last question thoroughly.
    Details,
}

impl Command {
    /// Parse a command from message text.
    ///
    /// Accepts the `/cmd@BotName` form Telegram uses in group chats.
    /// Returns `None` for regular text and unknown commands.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let word = rest.split_whitespace().next()?;
        let name = word.split('@').next()?;

        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "language" => Some(Self::Language),
            "auto" => Some(Self::Auto),
            "clear" => Some(Self::Clear),
            "history" => Some(Self::History),
            "about" => Some(Self::About),
            "voice" => Some(Self::Voice),
            "details" => Some(Self::Details),
            _ => None,
        }
    }
}

/// Parse a language-choice callback payload (`lang_<code>`).
///
/// This is the validation boundary for button inputs: codes outside the
/// closed set are rejected, not collapsed.
pub fn parse_language_callback(payload: &str) -> Option<Language> {
    Language::from_code(payload.strip_prefix(LANG_CALLBACK_PREFIX)?)
}

/// The `(label, payload)` pairs for the language-choice buttons.
pub fn language_buttons() -> Vec<(String, String)> {
    Language::ALL
        .iter()
        .map(|lang| {
            (
                lang.display_name().to_string(),
                format!("{}{}", LANG_CALLBACK_PREFIX, lang.code()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/details"), Some(Command::Details));
        assert_eq!(Command::parse("  /clear  "), Some(Command::Clear));
    }

    #[test]
    fn test_parse_group_form() {
        assert_eq!(Command::parse("/history@MarhabaBot"), Some(Command::History));
    }

    #[test]
    fn test_parse_rejects_plain_text_and_unknown() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("/unknown"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("/"), None);
    }

    #[test]
    fn test_language_callback_round_trip() {
        for (_, payload) in language_buttons() {
            assert!(parse_language_callback(&payload).is_some());
        }
    }

    #[test]
    fn test_language_callback_rejects_out_of_set() {
        assert_eq!(parse_language_callback("lang_de"), None);
        assert_eq!(parse_language_callback("lang_"), None);
        assert_eq!(parse_language_callback("other_ar"), None);
    }

    #[test]
    fn test_buttons_cover_all_languages() {
        let buttons = language_buttons();
        assert_eq!(buttons.len(), Language::ALL.len());
        assert!(buttons.iter().any(|(_, p)| p == "lang_ar"));
        assert!(buttons.iter().any(|(_, p)| p == "lang_fr"));
        assert!(buttons.iter().any(|(_, p)| p == "lang_en"));
    }
}
