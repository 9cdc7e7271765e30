//! Field extraction from directory profile pages
//!
//! The directory serves person profiles as HTML. Which element holds which
//! attribute is a property of the page layout, so it lives behind
//! [`ProfileFieldExtractor`] rather than in the directory client.

use std::collections::HashMap;

use scraper::{Html, Selector};

use crate::error::{ConfigError, Result};

/// Profile attributes the report knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    HomeDepartment,
}

impl ProfileField {
    /// Selector for the layout served by the identity v2 `full` resource
    pub fn default_selector(&self) -> &'static str {
        match self {
            Self::HomeDepartment => "span.EmployeeHomeDepartment",
        }
    }
}

/// Pulls a single field out of a profile document
pub trait ProfileFieldExtractor: Send + Sync {
    /// Return the field's text, or `None` if the page does not contain it.
    fn extract(&self, html: &str, field: ProfileField) -> Option<String>;
}

/// CSS-selector backed extractor
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    selectors: HashMap<ProfileField, Selector>,
}

impl SelectorExtractor {
    /// Override the selector for one field
    pub fn with_selector(mut self, field: ProfileField, css: &str) -> Result<Self> {
        let selector = Selector::parse(css).map_err(|e| {
            ConfigError::Invalid(format!("Invalid selector '{}': {}", css, e))
        })?;
        self.selectors.insert(field, selector);
        Ok(self)
    }
}

impl Default for SelectorExtractor {
    fn default() -> Self {
        let selectors = [ProfileField::HomeDepartment]
            .into_iter()
            .map(|field| {
                let selector = Selector::parse(field.default_selector())
                    .expect("built-in selectors are valid");
                (field, selector)
            })
            .collect();
        Self { selectors }
    }
}

impl ProfileFieldExtractor for SelectorExtractor {
    fn extract(&self, html: &str, field: ProfileField) -> Option<String> {
        let selector = self.selectors.get(&field)?;
        let document = Html::parse_document(html);

        // Text of every match, concatenated, like a jQuery-style .text()
        let mut matches = document.select(selector).peekable();
        matches.peek()?;
        let text: String = matches.flat_map(|el| el.text()).collect();

        Some(text.trim().to_string())
    }
}
