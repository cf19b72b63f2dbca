use intake_models::language::LanguageClassification;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LanguageService: Send + Sync + 'static {
    /// Decide whether `text` is English.
    ///
    /// Never fails. Short texts and classifier faults count as English.
    fn classify(&self, text: &str) -> LanguageClassification;
}

#[cfg(feature = "mock")]
impl MockLanguageService {
    pub fn with_classify(mut self, text: String, result: LanguageClassification) -> Self {
        self.expect_classify()
            .once()
            .with(mockall::predicate::eq(text))
            .return_once(|_| result);
        self
    }
}
