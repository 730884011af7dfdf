//! Invitation localization
//!
//! Languages the application ships translations for, and the invitation
//! strings for each of them.

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-us")]
    EnUs,
    #[serde(rename = "fr-fr")]
    FrFr,
    #[serde(rename = "de-de")]
    DeDe,
}

/// Translated strings of an invitation email
///
/// `{site}` in `invited` is replaced with the site name.
#[derive(Debug)]
pub struct InvitationStrings {
    pub subject: &'static str,
    pub greeting: &'static str,
    pub invited: &'static str,
    pub open_document: &'static str,
    pub copy_link: &'static str,
    pub signature: &'static str,
}

static EN_US: InvitationStrings = InvitationStrings {
    subject: "Invitation to join Docs!",
    greeting: "Hello,",
    invited: "You have been invited to collaborate on a document on {site}.",
    open_document: "Open the document",
    copy_link: "Or copy and paste this link in your browser:",
    signature: "The Docs team",
};

static FR_FR: InvitationStrings = InvitationStrings {
    subject: "Invitation à rejoindre Docs !",
    greeting: "Bonjour,",
    invited: "Vous avez été invité(e) à collaborer sur un document sur {site}.",
    open_document: "Ouvrir le document",
    copy_link: "Ou copiez-collez ce lien dans votre navigateur :",
    signature: "L'équipe Docs",
};

static DE_DE: InvitationStrings = InvitationStrings {
    subject: "Einladung, Docs beizutreten!",
    greeting: "Hallo,",
    invited: "Sie wurden eingeladen, an einem Dokument auf {site} mitzuarbeiten.",
    open_document: "Dokument öffnen",
    copy_link: "Oder kopieren Sie diesen Link in Ihren Browser:",
    signature: "Das Docs-Team",
};

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::FrFr, Locale::DeDe];

    /// Parse a language tag such as `fr`, `fr-FR` or `fr_fr`
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or_default();

        Self::ALL.into_iter().find(|locale| {
            locale.as_str() == normalized || locale.language() == language
        })
    }

    /// Resolve a language tag, falling back to the default locale
    pub fn from_language(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|| {
            tracing::debug!(language = tag, "Unsupported language, using default locale");
            Self::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-us",
            Locale::FrFr => "fr-fr",
            Locale::DeDe => "de-de",
        }
    }

    /// Primary language subtag
    pub fn language(&self) -> &'static str {
        match self {
            Locale::EnUs => "en",
            Locale::FrFr => "fr",
            Locale::DeDe => "de",
        }
    }

    pub fn invitation(&self) -> &'static InvitationStrings {
        match self {
            Locale::EnUs => &EN_US,
            Locale::FrFr => &FR_FR,
            Locale::DeDe => &DE_DE,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
