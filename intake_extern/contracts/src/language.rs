use intake_models::language::RankedLanguage;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LanguageDetectorService: Send + Sync + 'static {
    /// Rank the candidate languages of `text` by confidence, most likely
    /// first.
    ///
    /// Texts with fewer than `min_length` letters are too short to say
    /// anything about and yield an empty ranking.
    fn rank(&self, text: &str, min_length: usize) -> anyhow::Result<Vec<RankedLanguage>>;
}

#[cfg(feature = "mock")]
impl MockLanguageDetectorService {
    pub fn with_rank(mut self, text: String, min_length: usize, result: Vec<RankedLanguage>) -> Self {
        self.expect_rank()
            .once()
            .with(
                mockall::predicate::eq(text),
                mockall::predicate::eq(min_length),
            )
            .return_once(move |_, _| Ok(result));
        self
    }

    pub fn with_rank_error(mut self, text: String) -> Self {
        self.expect_rank()
            .once()
            .with(mockall::predicate::eq(text), mockall::predicate::always())
            .return_once(|_, _| Err(anyhow::anyhow!("language detector failed")));
        self
    }
}
