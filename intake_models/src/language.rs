/// ISO 639-3 language code as produced by the language identifier, or the
/// `und` sentinel when no language could be determined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const ENGLISH: &'static str = "eng";
    pub const UNDETERMINED: &'static str = "und";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn undetermined() -> Self {
        Self::new(Self::UNDETERMINED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }

    pub fn is_undetermined(&self) -> bool {
        self.0 == Self::UNDETERMINED
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the identifier's ranking. `score` is a confidence in `[0, 1]`
/// relative to the best match, which scores `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLanguage {
    pub code: LanguageCode,
    pub score: f64,
}

impl RankedLanguage {
    pub fn new(code: impl Into<String>, score: f64) -> Self {
        Self {
            code: LanguageCode::new(code),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageClassification {
    pub is_english: bool,
    pub top_language: LanguageCode,
}

impl LanguageClassification {
    /// Result used whenever classification is skipped or impossible. Such
    /// messages are never filtered.
    pub fn undetermined() -> Self {
        Self {
            is_english: true,
            top_language: LanguageCode::undetermined(),
        }
    }
}
