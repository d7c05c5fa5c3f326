use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// English analyzer used for both documents and queries.
///
/// The text is lowercased, split into runs of two or more letters, numbers
/// or underscores, and filtered through the 318-word English stop list.
#[derive(Clone)]
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("english");

        Ok(Self { inner: analyzer })
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        let terms = analyzer.terms("Cats and DOGS, a bird & the Fish!").unwrap();

        // "and", "the" are stop words; "a" is too short for the token pattern
        assert_eq!(terms, vec!["cats", "dogs", "bird", "fish"]);
    }

    #[test]
    fn test_english_analyzer_splits_at_combining_marks() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        let terms = analyzer.terms("NAI\u{0308}VE हिन्दी").unwrap();

        assert_eq!(terms, vec!["nai", "ve"]);
    }

    #[test]
    fn test_english_analyzer_only_stop_words() {
        let analyzer = EnglishAnalyzer::new().unwrap();
        assert!(analyzer.terms("the and of it").unwrap().is_empty());
    }

    #[test]
    fn test_english_analyzer_name() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "english");
    }
}
