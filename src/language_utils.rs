//! Language utilities for ISO language code handling
//!
//! The subtitle tool takes a language code as given; these helpers only
//! check that the configured code names a real language before the tool
//! is started.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2/T code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    // Check for ISO 639-1 (2-letter) code
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    }
    // Check for ISO 639-2/T (3-letter) code
    else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part2T);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();
    let lang = match validate_language_code(&normalized)? {
        LanguageCodeType::Part1 => Language::from_639_1(&normalized),
        LanguageCodeType::Part2T => Language::from_639_3(&normalized),
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
