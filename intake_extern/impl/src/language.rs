use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

use anyhow::anyhow;
use intake_di::Build;
use intake_extern_contracts::language::LanguageDetectorService;
use intake_models::language::RankedLanguage;
use lingua::{LanguageDetector, LanguageDetectorBuilder};

const SCORE_SCALE: f64 = 1e9;

/// Statistical language identification backed by lingua's n-gram models.
///
/// Scores are relative to the best match, which always scores `1.0`.
#[derive(Debug, Clone, Build)]
pub struct LinguaLanguageDetectorServiceImpl {
    #[state]
    state: State,
}

#[derive(Clone)]
struct State(Arc<LanguageDetector>);

impl Default for State {
    fn default() -> Self {
        // Trigram models only, which keeps memory usage bounded when all
        // languages are loaded.
        let detector = LanguageDetectorBuilder::from_all_languages()
            .with_low_accuracy_mode()
            .build();
        Self(detector.into())
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LanguageDetector")
    }
}

impl LanguageDetectorService for LinguaLanguageDetectorServiceImpl {
    fn rank(&self, text: &str, min_length: usize) -> anyhow::Result<Vec<RankedLanguage>> {
        if text.chars().filter(|c| c.is_alphabetic()).count() < min_length {
            return Ok(Vec::new());
        }

        let detector = &self.state.0;
        let values = catch_unwind(AssertUnwindSafe(|| {
            detector.compute_language_confidence_values(text)
        }))
        .map_err(|_| anyhow!("Language detector panicked"))?;

        let top = values.iter().map(|&(_, score)| score).fold(0.0, f64::max);
        if top <= 0.0 {
            return Ok(Vec::new());
        }

        // lingua sums in hash map order, so the last bits vary between calls.
        let mut ranking = values
            .into_iter()
            .map(|(language, score)| (language, round(score / top)))
            .filter(|&(_, score)| score > 0.0)
            .map(|(language, score)| {
                RankedLanguage::new(language.iso_code_639_3().to_string().to_lowercase(), score)
            })
            .collect::<Vec<_>>();
        ranking.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
        });

        Ok(ranking)
    }
}

fn round(score: f64) -> f64 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}
