/// The content surfaces Muse generates marketing assets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    WebsiteSeo,
    ContentBrief,
    LocalSeo,
    YouTube,
    LinkedIn,
    Instagram,
    Facebook,
}

impl Platform {
    /// Display name used in history and calendar records.
    pub fn name(self) -> &'static str {
        match self {
            Self::WebsiteSeo => "Website SEO",
            Self::ContentBrief => "Content Brief",
            Self::LocalSeo => "Google Maps SEO",
            Self::YouTube => "YouTube",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
        }
    }

    /// Short display glyph stored alongside records.
    pub fn icon(self) -> &'static str {
        match self {
            Self::WebsiteSeo => "🌐",
            Self::ContentBrief => "📝",
            Self::LocalSeo => "📍",
            Self::YouTube => "📺",
            Self::LinkedIn => "💼",
            Self::Instagram => "📸",
            Self::Facebook => "👍",
        }
    }
}

/// Output languages the generators can be asked for.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Dutch",
    "Russian",
    "Japanese",
    "Chinese (Simplified)",
    "Korean",
    "Arabic",
    "Hindi",
    "Hinglish",
];
