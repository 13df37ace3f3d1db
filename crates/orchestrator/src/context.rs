//! Completion-context assembly.
//!
//! Shapes the request payload for the AI backend: one leading localized
//! system instruction, then up to `max_turns` logged turns in oldest-first
//! order, re-tagged `user`/`assistant`. Assembly never calls the backend.

use bot_core::{lexicon, ChatMessage, Language, Role};
use database::{history, Database};

use crate::error::OrchestratorError;

/// Number of prior turns included in a completion request.
pub const DEFAULT_MAX_TURNS: i64 = 18;

/// Build the message list for a regular completion.
pub async fn build(
    db: &Database,
    user_id: i64,
    lang: Language,
    max_turns: i64,
) -> Result<Vec<ChatMessage>, OrchestratorError> {
    assemble(db, user_id, lang, max_turns, false).await
}

/// Build the message list for a `/details` completion.
///
/// Identical to [`build`] except the system instruction gains a localized
/// clause asking for a thorough answer; the history portion is untouched.
pub async fn build_detailed(
    db: &Database,
    user_id: i64,
    lang: Language,
    max_turns: i64,
) -> Result<Vec<ChatMessage>, OrchestratorError> {
    assemble(db, user_id, lang, max_turns, true).await
}

async fn assemble(
    db: &Database,
    user_id: i64,
    lang: Language,
    max_turns: i64,
    detailed: bool,
) -> Result<Vec<ChatMessage>, OrchestratorError> {
    let instruction = if detailed {
        format!(
            "{}{}",
            lexicon::SYSTEM_PROMPT.get(lang),
            lexicon::DETAIL_CLAUSE.get(lang)
        )
    } else {
        lexicon::SYSTEM_PROMPT.get(lang).to_string()
    };

    let mut messages = vec![ChatMessage::system(instruction)];

    for (role, text) in history::get_history(db.pool(), user_id, max_turns).await? {
        let message = match Role::from_str(&role) {
            Some(Role::User) => ChatMessage::user(text),
            // Bot turns become assistant turns downstream; an out-of-set
            // tag cannot occur past the table's CHECK constraint.
            _ => ChatMessage::assistant(text),
        };
        messages.push(message);
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_system_instruction_leads_and_is_localized() {
        let db = test_db().await;

        let messages = build(&db, 1, Language::Fr, 10).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, *lexicon::SYSTEM_PROMPT.get(Language::Fr));
    }

    #[tokio::test]
    async fn test_history_is_retagged_oldest_first() {
        let db = test_db().await;
        history::append(db.pool(), 1, "user", "q1").await.unwrap();
        history::append(db.pool(), 1, "bot", "a1").await.unwrap();
        history::append(db.pool(), 1, "user", "q2").await.unwrap();

        let messages = build(&db, 1, Language::En, 10).await.unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "q1");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "a1");
        assert_eq!(messages[3].content, "q2");
    }

    #[tokio::test]
    async fn test_max_turns_keeps_most_recent() {
        let db = test_db().await;
        for i in 0..5 {
            history::append(db.pool(), 1, "user", &format!("m{i}"))
                .await
                .unwrap();
        }

        let messages = build(&db, 1, Language::En, 2).await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "m3");
        assert_eq!(messages[2].content, "m4");
    }

    #[tokio::test]
    async fn test_detailed_variant_only_touches_instruction() {
        let db = test_db().await;
        history::append(db.pool(), 1, "user", "q1").await.unwrap();

        let plain = build(&db, 1, Language::En, 10).await.unwrap();
        let detailed = build_detailed(&db, 1, Language::En, 10).await.unwrap();

        assert!(detailed[0]
            .content
            .starts_with(*lexicon::SYSTEM_PROMPT.get(Language::En)));
        assert!(detailed[0].content.len() > plain[0].content.len());
        assert_eq!(&plain[1..], &detailed[1..]);
    }
}
