//! Country name to ISO 3166-1 alpha-3 resolution.

use std::collections::HashMap;

use sku_model::CountryPolicy;
use tracing::warn;

use crate::error::{ConversionError, Result};

/// Misspellings seen in supplier data, with the code they stand for.
pub const DEFAULT_CORRECTIONS: [(&str, &str); 2] = [("Phillipines", "PHL"), ("Vietnam", "VNM")];

/// Resolves free-text country names through an explicit name -> alpha-3 map.
///
/// Lookup order: exact name, known correction, then the same two lookups
/// ignoring case. Names are never guessed.
#[derive(Debug, Clone, Default)]
pub struct CountryResolver {
    codes: HashMap<String, String>,
    folded: HashMap<String, String>,
    corrections: HashMap<String, String>,
    folded_corrections: HashMap<String, String>,
    policy: CountryPolicy,
}

impl CountryResolver {
    /// Build from `(country name, alpha-3)` pairs with the default corrections.
    pub fn new<N, C>(codes: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        let mut resolver = Self::default();
        for (name, code) in codes {
            let name = name.into();
            let code = code.into();
            resolver.folded.insert(fold(&name), code.clone());
            resolver.codes.insert(name, code);
        }
        resolver.with_corrections(DEFAULT_CORRECTIONS)
    }

    /// Add corrections for known misspellings.
    pub fn with_corrections<N, C>(mut self, corrections: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        for (name, code) in corrections {
            let name = name.into();
            let code = code.into();
            self.folded_corrections.insert(fold(&name), code.clone());
            self.corrections.insert(name, code);
        }
        self
    }

    pub fn with_policy(mut self, policy: CountryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CountryPolicy {
        self.policy
    }

    /// Number of country names in the map (corrections excluded).
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Resolve a country name to its alpha-3 code.
    ///
    /// Empty input resolves to an empty code. Unknown names fail under
    /// [`CountryPolicy::Strict`] and resolve to an empty code under
    /// [`CountryPolicy::Lenient`].
    pub fn resolve_alpha_code(&self, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        if let Some(code) = self.lookup(trimmed) {
            return Ok(code.to_string());
        }
        match self.policy {
            CountryPolicy::Strict => Err(ConversionError::UnknownCountry {
                value: name.to_string(),
            }),
            CountryPolicy::Lenient => {
                warn!(country = %trimmed, "unknown country name left blank");
                Ok(String::new())
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        if let Some(code) = self.codes.get(name).or_else(|| self.corrections.get(name)) {
            return Some(code.as_str());
        }
        let key = fold(name);
        self.folded
            .get(&key)
            .or_else(|| self.folded_corrections.get(&key))
            .map(String::as_str)
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> CountryResolver {
        CountryResolver::new([
            ("United States", "USA"),
            ("China", "CHN"),
            ("Philippines", "PHL"),
            ("Viet Nam", "VNM"),
        ])
    }

    #[test]
    fn resolves_exact_and_case_folded_names() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_alpha_code("China").unwrap(), "CHN");
        assert_eq!(resolver.resolve_alpha_code(" united states ").unwrap(), "USA");
        assert_eq!(resolver.len(), 4);
    }

    #[test]
    fn corrects_known_typos() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_alpha_code("Phillipines").unwrap(), "PHL");
        assert_eq!(resolver.resolve_alpha_code("Vietnam").unwrap(), "VNM");
        assert_eq!(resolver.resolve_alpha_code("VIETNAM").unwrap(), "VNM");
    }

    #[test]
    fn empty_name_resolves_empty() {
        assert_eq!(resolver().resolve_alpha_code("").unwrap(), "");
    }

    #[test]
    fn strict_policy_rejects_unknown_names() {
        let error = resolver().resolve_alpha_code("Atlantis").unwrap_err();
        assert_eq!(
            error,
            ConversionError::UnknownCountry {
                value: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn lenient_policy_blanks_unknown_names() {
        let resolver = resolver().with_policy(CountryPolicy::Lenient);
        assert_eq!(resolver.resolve_alpha_code("Atlantis").unwrap(), "");
        assert_eq!(resolver.resolve_alpha_code("China").unwrap(), "CHN");
    }
}
