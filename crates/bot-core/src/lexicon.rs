//! Localized UI strings and system prompts.
//!
//! Every user-visible string the pipeline emits lives here, one
//! [`Localized`] table per string, so no component hard-codes a language.

use crate::lang::{Language, Localized};

/// Welcome message shown by `/start`, before a language is chosen.
pub fn welcome(lang: Language, name: Option<&str>) -> String {
    let name = name.unwrap_or("there");
    match lang {
        Language::Ar => format!("🤖 مرحبًا {name}! اختَر لغتك لبدء الاستخدام:"),
        Language::Fr => format!("🤖 Bonjour {name} ! Choisissez votre langue pour démarrer :"),
        Language::En => format!("🤖 Hello {name}! Choose your language to start:"),
    }
}

/// Command reference shown by `/help`.
pub const HELP: Localized<&str> = Localized::new(
    "📌 الأوامر:\n\
     /start اختيار اللغة\n\
     /language تغيير اللغة\n\
     /auto تفعيل/تعطيل كشف اللغة\n\
     /clear مسح المحادثة\n\
     /history آخر الرسائل\n\
     /about عن البوت\n\
     /voice آخر رد صوتيًا\n\
     /details شرح مُفصّل لآخر سؤال",
    "📌 Commandes :\n\
     /start choisir la langue\n\
     /language changer la langue\n\
     /auto activer/désactiver détection automatique\n\
     /clear effacer la conversation\n\
     /history derniers messages\n\
     /about à propos\n\
     /voice dernier message en audio\n\
     /details détailler la dernière question",
    "📌 Commands:\n\
     /start choose language\n\
     /language change language\n\
     /auto toggle auto language detection\n\
     /clear clear conversation\n\
     /history recent messages\n\
     /about about the bot\n\
     /voice last reply as audio\n\
     /details expand the last question",
);

/// Description shown by `/about`.
pub const ABOUT: Localized<&str> = Localized::new(
    "بوت مساعد متعدد اللغات. يستخدم Mistral API مع سياق المحادثة وردود تلقائية منظمة.",
    "Assistant multilingue. Utilise l'API Mistral avec contexte de conversation et réponses automatiques.",
    "Multilingual assistant bot. Uses the Mistral API with conversation context and structured auto-replies.",
);

/// Placeholder shown while a completion is in flight.
pub const LOADING: Localized<&str> = Localized::new(
    "⏳ جاري المعالجة...",
    "⏳ Traitement...",
    "⏳ Processing...",
);

/// Confirmation after `/clear`.
pub const CLEARED: Localized<&str> = Localized::new(
    "🗑️ تم مسح المحادثة.",
    "🗑️ Conversation effacée.",
    "🗑️ Conversation cleared.",
);

/// Notice when `/history` finds nothing.
pub const NO_HISTORY: Localized<&str> = Localized::new(
    "📭 لا يوجد سجل.",
    "📭 Aucun historique.",
    "📭 No history found.",
);

/// Notice when `/voice` has no bot reply to read out.
pub const NO_VOICE: Localized<&str> = Localized::new(
    "⚠ لا يوجد رد لإرساله صوتيًا.",
    "⚠ Aucun message vocal.",
    "⚠ No voice message.",
);

/// Notice when `/details` has no prior question to expand.
pub const NO_QUESTION: Localized<&str> = Localized::new(
    "لا يوجد سؤال سابق.",
    "Aucun message précédent.",
    "No previous message.",
);

/// Confirmation after `/auto` turns detection on.
pub const AUTO_ENABLED: Localized<&str> = Localized::new(
    "✅ تم تفعيل الكشف التلقائي.",
    "✅ Détection auto activée.",
    "✅ Auto-detect enabled.",
);

/// Confirmation after `/auto` turns detection off.
pub const AUTO_DISABLED: Localized<&str> = Localized::new(
    "⛔ تم تعطيل الكشف التلقائي.",
    "⛔ Détection auto désactivée.",
    "⛔ Auto-detect disabled.",
);

/// Confirmation after a language button is pressed, in the chosen language.
pub const LANGUAGE_SET: Localized<&str> = Localized::new(
    "✅ تم ضبط اللغة العربية.",
    "✅ Le français est sélectionné.",
    "✅ English selected.",
);

/// Prompt shown with the language-choice buttons.
pub const CHOOSE_LANGUAGE: Localized<&str> = Localized::new(
    "🌐 اختر لغة:",
    "🌐 Choisissez une langue :",
    "🌐 Choose a language:",
);

/// Fixed apology substituted for any AI-call failure.
pub const APOLOGY: Localized<&str> = Localized::new(
    "عذرًا، خدمة الذكاء الاصطناعي غير متاحة حاليًا. حاول مرة أخرى لاحقًا.",
    "Désolé, le service IA est indisponible pour le moment. Veuillez réessayer plus tard.",
    "Sorry, the AI service is unavailable right now. Please try again later.",
);

/// System instruction that leads every completion payload.
pub const SYSTEM_PROMPT: Localized<&str> = Localized::new(
    "أنت مساعد مختصر ودقيق بالعربية. استعمل سياق المحادثة عند الحاجة.",
    "Tu es un assistant concis en français. Utilise le contexte si pertinent.",
    "You are a concise English assistant. Use conversation context when relevant.",
);

/// Clause appended to the system instruction for `/details`.
pub const DETAIL_CLAUSE: Localized<&str> = Localized::new(
    " قدم شرحًا مفصلًا مع أمثلة عند اللزوم.",
    " Donne une explication détaillée avec exemples si pertinent.",
    " Provide a detailed explanation with examples when relevant.",
);
