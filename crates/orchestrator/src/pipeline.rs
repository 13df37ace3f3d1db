//! Per-message conversation pipeline.
//!
//! Each incoming message walks the same path: resolve the effective
//! language, log the user turn, try the auto-reply rules, and only then
//! fall through to the AI backend with assembled context. The user turn
//! is logged before any branching and the bot turn before any delivery,
//! so history always reflects what was actually answered - even when
//! delivery itself fails afterwards.

use bot_core::{detect, lexicon, ChatBackend, Language, Role};
use database::{history, Database};
use tracing::{debug, info, warn};

use crate::auto_reply;
use crate::chunking;
use crate::commands::{self, Command};
use crate::context;
use crate::error::OrchestratorError;
use crate::preferences::PreferenceStore;
use crate::sender::Transport;

/// Tunables for a pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Prior turns included in a completion request.
    pub max_context_turns: i64,
    /// Turns shown by `/history`.
    pub history_display_limit: i64,
    /// Chunk limit for outgoing messages.
    pub chunk_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_context_turns: context::DEFAULT_MAX_TURNS,
            history_display_limit: 10,
            chunk_limit: chunking::MAX_CHUNK_LEN,
        }
    }
}

/// The conversation pipeline.
///
/// Generic over the AI backend and the transport so tests can substitute
/// doubles for both. Concurrent pipelines for different users are fully
/// independent; for the same user, store writes are single atomic
/// statements, and two in-flight AI calls simply log their bot turns in
/// completion order (accepted, documented behavior).
pub struct Pipeline<B: ChatBackend, T: Transport> {
    db: Database,
    backend: B,
    transport: T,
    preferences: PreferenceStore,
    config: PipelineConfig,
}

impl<B: ChatBackend, T: Transport> Pipeline<B, T> {
    /// Create a pipeline with default configuration.
    pub fn new(db: Database, backend: B, transport: T) -> Self {
        Self::with_config(db, backend, transport, PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(db: Database, backend: B, transport: T, config: PipelineConfig) -> Self {
        let preferences = PreferenceStore::new(db.clone());
        Self {
            db,
            backend,
            transport,
            preferences,
            config,
        }
    }

    /// Get the preference store.
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Process one incoming text message end-to-end.
    pub async fn handle_message(&self, user_id: i64, text: &str) -> Result<(), OrchestratorError> {
        let (preferred, auto_detect) = self.preferences.get(user_id).await?;
        let lang = detect::resolve(text, preferred, auto_detect);
        debug!("Resolved language {} for user {}", lang.code(), user_id);

        // Log the user turn before branching so history is consistent
        // with whatever gets delivered afterwards.
        history::append(self.db.pool(), user_id, Role::User.as_str(), text).await?;

        if let Some(reply) = auto_reply::try_auto_reply(text, lang) {
            history::append(self.db.pool(), user_id, Role::Bot.as_str(), reply).await?;
            self.transport.send_message(user_id, reply).await?;
            info!("Delivered auto-reply to {}", user_id);
            return Ok(());
        }

        self.respond_with_ai(user_id, lang, false).await
    }

    /// Handle an explicit command.
    pub async fn handle_command(
        &self,
        user_id: i64,
        command: Command,
    ) -> Result<(), OrchestratorError> {
        info!("Handling {:?} for user {}", command, user_id);

        match command {
            Command::Start => self.handle_start(user_id, None).await?,

            Command::Help => {
                let (lang, _) = self.preferences.get(user_id).await?;
                self.transport
                    .send_message(user_id, lexicon::HELP.get(lang))
                    .await?;
            }

            Command::About => {
                let (lang, _) = self.preferences.get(user_id).await?;
                self.transport
                    .send_message(user_id, lexicon::ABOUT.get(lang))
                    .await?;
            }

            Command::Language => {
                let (lang, _) = self.preferences.get(user_id).await?;
                self.transport
                    .send_with_buttons(
                        user_id,
                        lexicon::CHOOSE_LANGUAGE.get(lang),
                        &commands::language_buttons(),
                    )
                    .await?;
            }

            Command::Auto => {
                let (lang, auto_detect) = self.preferences.get(user_id).await?;
                let enabled = !auto_detect;
                self.preferences.set_auto_detect(user_id, enabled).await?;
                let confirmation = if enabled {
                    lexicon::AUTO_ENABLED
                } else {
                    lexicon::AUTO_DISABLED
                };
                self.transport
                    .send_message(user_id, confirmation.get(lang))
                    .await?;
            }

            Command::Clear => {
                let (lang, _) = self.preferences.get(user_id).await?;
                history::clear(self.db.pool(), user_id).await?;
                self.transport
                    .send_message(user_id, lexicon::CLEARED.get(lang))
                    .await?;
            }

            Command::History => {
                let (lang, _) = self.preferences.get(user_id).await?;
                let rows =
                    history::get_history(self.db.pool(), user_id, self.config.history_display_limit)
                        .await?;

                if rows.is_empty() {
                    self.transport
                        .send_message(user_id, lexicon::NO_HISTORY.get(lang))
                        .await?;
                } else {
                    let lines: Vec<String> = rows
                        .iter()
                        .map(|(role, text)| match Role::from_str(role) {
                            Some(Role::Bot) => format!("🤖 Bot: {text}"),
                            _ => format!("👤 You: {text}"),
                        })
                        .collect();
                    for chunk in chunking::split(&lines.join("\n"), self.config.chunk_limit) {
                        self.transport.send_message(user_id, &chunk).await?;
                    }
                }
            }

            Command::Voice => {
                // Audio synthesis happens in the transport glue via
                // `voice_text`; handling the command directly only emits
                // the empty-state notice.
                let _ = self.voice_text(user_id).await?;
            }

            Command::Details => {
                let (lang, _) = self.preferences.get(user_id).await?;
                let last_question =
                    history::last_by_role(self.db.pool(), user_id, Role::User.as_str()).await?;

                match last_question {
                    Some(_) => self.respond_with_ai(user_id, lang, true).await?,
                    None => {
                        self.transport
                            .send_message(user_id, lexicon::NO_QUESTION.get(lang))
                            .await?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle `/start`, greeting by name when the transport knows one.
    pub async fn handle_start(
        &self,
        user_id: i64,
        name: Option<&str>,
    ) -> Result<(), OrchestratorError> {
        // Language is still unchosen at /start; greet in English.
        self.transport
            .send_with_buttons(
                user_id,
                &lexicon::welcome(Language::En, name),
                &commands::language_buttons(),
            )
            .await?;
        Ok(())
    }

    /// Handle an inline-button callback carrying an opaque payload.
    ///
    /// Only `lang_<code>` payloads are recognized; anything else is
    /// logged and ignored. The confirmation replaces the button message
    /// in place, falling back to a fresh send when editing fails.
    pub async fn handle_callback(
        &self,
        user_id: i64,
        message_id: crate::sender::MessageId,
        payload: &str,
    ) -> Result<(), OrchestratorError> {
        let Some(lang) = commands::parse_language_callback(payload) else {
            debug!("Ignoring unrecognized callback payload: {}", payload);
            return Ok(());
        };

        self.preferences.set_language(user_id, lang).await?;
        info!("User {} selected language {}", user_id, lang.code());

        let confirmation = lexicon::LANGUAGE_SET.get(lang);
        if let Err(err) = self
            .transport
            .edit_message(user_id, message_id, confirmation)
            .await
        {
            warn!("Confirmation edit failed, sending fresh: {}", err);
            self.transport.send_message(user_id, confirmation).await?;
        }
        Ok(())
    }

    /// Fetch the text for the `/voice` feature: the most recent bot reply.
    ///
    /// Speech synthesis lives at the transport boundary; the pipeline only
    /// guarantees this text equals the last delivered answer. When the
    /// user has no bot turn yet, the localized notice is sent and `None`
    /// returned.
    pub async fn voice_text(&self, user_id: i64) -> Result<Option<String>, OrchestratorError> {
        let (lang, _) = self.preferences.get(user_id).await?;
        match history::last_by_role(self.db.pool(), user_id, Role::Bot.as_str()).await? {
            Some(text) => Ok(Some(text)),
            None => {
                self.transport
                    .send_message(user_id, lexicon::NO_VOICE.get(lang))
                    .await?;
                Ok(None)
            }
        }
    }

    /// Answer through the AI backend: placeholder, context, completion,
    /// bot-turn log, chunked delivery.
    async fn respond_with_ai(
        &self,
        user_id: i64,
        lang: Language,
        detailed: bool,
    ) -> Result<(), OrchestratorError> {
        let placeholder = self
            .transport
            .send_message(user_id, lexicon::LOADING.get(lang))
            .await?;

        let messages = if detailed {
            context::build_detailed(&self.db, user_id, lang, self.config.max_context_turns).await?
        } else {
            context::build(&self.db, user_id, lang, self.config.max_context_turns).await?
        };

        // Any backend failure becomes the localized apology; it is logged
        // and delivered exactly like a normal reply.
        let reply = match self.backend.complete(messages).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("AI call failed, substituting apology: {}", err);
                lexicon::APOLOGY.get(lang).to_string()
            }
        };

        // The bot turn lands before delivery so a delivery failure cannot
        // leave history behind what the user saw.
        history::append(self.db.pool(), user_id, Role::Bot.as_str(), &reply).await?;

        self.deliver(user_id, placeholder, &reply).await
    }

    /// Deliver text via the placeholder-then-chunks protocol.
    ///
    /// The first chunk replaces the placeholder; the rest go out as fresh
    /// messages. If the edit fails, every chunk - the first included - is
    /// resent fresh, so nothing is dropped.
    async fn deliver(
        &self,
        user_id: i64,
        placeholder: crate::sender::MessageId,
        text: &str,
    ) -> Result<(), OrchestratorError> {
        let chunks = chunking::split(text, self.config.chunk_limit);
        let Some((first, rest)) = chunks.split_first() else {
            return Ok(()); // split always yields at least one chunk
        };

        match self.transport.edit_message(user_id, placeholder, first).await {
            Ok(()) => {
                for chunk in rest {
                    self.transport.send_message(user_id, chunk).await?;
                }
            }
            Err(err) => {
                warn!("Placeholder edit failed, resending all chunks: {}", err);
                for chunk in &chunks {
                    self.transport.send_message(user_id, chunk).await?;
                }
            }
        }

        info!("Delivered {} chunk(s) to {}", chunks.len(), user_id);
        Ok(())
    }
}
