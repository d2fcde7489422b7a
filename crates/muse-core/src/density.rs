//! Keyword-density annotation.
//!
//! The one purely local computation on the generation path: how often a
//! keyword occurs in user-supplied analysis text, as a percentage of the
//! text's whitespace-delimited word count. Matching is whole-word and
//! case-insensitive.

use regex::RegexBuilder;

use crate::domain::KeywordWithMetadata;

/// Density of `keyword` in `analysis_text`: 100 * occurrences / total_words.
///
/// Returns 0.0 when the text has no words or the keyword is blank.
pub fn keyword_density(analysis_text: &str, keyword: &str) -> f64 {
    let total_words = analysis_text.split_whitespace().count();
    let keyword = keyword.trim();
    if total_words == 0 || keyword.is_empty() {
        return 0.0;
    }

    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    let Ok(matcher) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return 0.0;
    };

    let count = matcher.find_iter(analysis_text).count();
    count as f64 / total_words as f64 * 100.0
}

/// Fill in `density` for every keyword against the same analysis text.
pub fn annotate(keywords: &mut [KeywordWithMetadata], analysis_text: &str) {
    for kw in keywords.iter_mut() {
        kw.density = Some(keyword_density(analysis_text, &kw.keyword));
    }
}
