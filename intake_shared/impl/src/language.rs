use intake_di::Build;
use intake_extern_contracts::language::LanguageDetectorService;
use intake_models::language::{LanguageClassification, RankedLanguage};
use intake_shared_contracts::language::LanguageService;
use tracing::warn;

#[derive(Debug, Clone, Build)]
pub struct LanguageServiceImpl<LanguageDetector> {
    language_detector: LanguageDetector,
    config: LanguageServiceConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageServiceConfig {
    /// Texts with fewer characters are not classified at all.
    pub min_text_length: usize,
    /// Minimum number of letters the detector needs to rank a text.
    pub min_segment_length: usize,
    /// English must score strictly above this to count.
    pub english_threshold: f64,
    /// Number of top ranked languages searched for English.
    pub top_candidates: usize,
}

impl<LanguageDetector> LanguageService for LanguageServiceImpl<LanguageDetector>
where
    LanguageDetector: LanguageDetectorService,
{
    fn classify(&self, text: &str) -> LanguageClassification {
        if text.chars().count() < self.config.min_text_length {
            return LanguageClassification::undetermined();
        }

        let ranking = match self
            .language_detector
            .rank(text, self.config.min_segment_length)
        {
            Ok(ranking) => ranking,
            Err(err) => {
                warn!("Language detection failed, treating message as English: {err:#}");
                return LanguageClassification::undetermined();
            }
        };

        let Some(top) = ranking.first() else {
            return LanguageClassification::undetermined();
        };

        if top.code.is_undetermined() {
            return LanguageClassification::undetermined();
        }

        LanguageClassification {
            is_english: self.is_english(top)
                || ranking
                    .iter()
                    .take(self.config.top_candidates)
                    .any(|entry| self.is_english(entry)),
            top_language: top.code.clone(),
        }
    }
}

impl<LanguageDetector> LanguageServiceImpl<LanguageDetector> {
    fn is_english(&self, entry: &RankedLanguage) -> bool {
        entry.code.is_english() && entry.score > self.config.english_threshold
    }
}
