use crate::error::{AppError, Result};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Language codes offered by the filter menu
pub const LANGUAGES: &[&str] = &["en", "es", "fr", "de", "hi"];

/// Topics offered by the filter menu; any free text is accepted as a category
pub const CATEGORIES: &[&str] = &["technology", "games", "sports", "business", "health"];

/// Country codes offered by the filter menu
pub const COUNTRIES: &[&str] = &["us", "in", "gb", "de", "fr"];

/// The current query intent: topic, language and country.
///
/// Language is never empty. Category and country are independently optional;
/// an empty category and an absent country mean "unrestricted".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParameters {
    category: String,
    language: String,
    country: Option<String>,
}

impl FilterParameters {
    pub fn new(category: &str, language: &str, country: Option<&str>) -> Result<Self> {
        let language = language.trim().to_lowercase();
        if language.is_empty() {
            return Err(AppError::InvalidFilter(
                "language code must not be empty".to_string(),
            ));
        }

        Ok(Self {
            category: category.trim().to_string(),
            language,
            country: normalize_country(country),
        })
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.trim().to_string();
        self
    }

    pub fn with_language(self, language: &str) -> Result<Self> {
        Self::new(&self.category, language, self.country.as_deref())
    }

    pub fn with_country(mut self, country: Option<&str>) -> Self {
        self.country = normalize_country(country);
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Free-text query to send upstream, `None` when unrestricted
    pub fn query(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(&self.category)
        }
    }

    pub fn category_label(&self) -> &str {
        self.query().unwrap_or("ALL")
    }

    pub fn country_label(&self) -> String {
        self.country
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "ALL".to_string())
    }
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self {
            category: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            country: None,
        }
    }
}

fn normalize_country(country: Option<&str>) -> Option<String> {
    country
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
}
