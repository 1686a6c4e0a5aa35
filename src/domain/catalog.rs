use crate::utils::error::{KeyDomain, MatrixError, Result};
use crate::utils::validation::validate_non_empty_string;

/// Immutable ordered mapping from string key to record.
///
/// Both datasets are small (single digits), so lookup is a linear scan over
/// a vector, which also keeps iteration in authoring order for free.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    domain: KeyDomain,
    entries: Vec<(String, T)>,
}

impl<T> Catalog<T> {
    /// Build a catalog from pre-authored entries, rejecting empty or
    /// duplicate keys instead of silently deduplicating.
    pub fn from_entries(domain: KeyDomain, entries: Vec<(String, T)>) -> Result<Self> {
        for (idx, (key, _)) in entries.iter().enumerate() {
            validate_non_empty_string(&format!("{} key", domain), key)?;
            if entries[..idx].iter().any(|(prior, _)| prior == key) {
                return Err(MatrixError::ConfigError {
                    message: format!("duplicate {} key: {}", domain, key),
                });
            }
        }
        Ok(Self { domain, entries })
    }

    /// Construct from compiled-in literals. Key uniqueness is guaranteed by
    /// authorship and pinned by the dataset tests.
    pub(crate) fn from_authored(domain: KeyDomain, entries: Vec<(String, T)>) -> Self {
        Self { domain, entries }
    }

    pub fn domain(&self) -> KeyDomain {
        self.domain
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Like `get`, but reports a missing key as `InvalidKey`.
    pub fn lookup(&self, key: &str) -> Result<(&str, &T)> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| MatrixError::InvalidKey {
                domain: self.domain,
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Position of `key` in authoring order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog<u32> {
        Catalog::from_entries(
            KeyDomain::Sector,
            vec![
                ("alpha".to_string(), 1),
                ("beta".to_string(), 2),
                ("gamma".to_string(), 3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let c = catalog();
        assert_eq!(c.get("beta"), Some(&2));
        assert_eq!(c.get("delta"), None);
        assert_eq!(c.keys().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(c.position("gamma"), Some(2));
        assert_eq!(c.key_at(0), Some("alpha"));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Catalog::from_entries(
            KeyDomain::Tier,
            vec![("hustle".to_string(), 1), ("hustle".to_string(), 2)],
        );
        assert!(matches!(result, Err(MatrixError::ConfigError { .. })));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = Catalog::from_entries(KeyDomain::Tier, vec![("  ".to_string(), 1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_key_reports_domain() {
        let c = catalog();
        match c.lookup("delta") {
            Err(MatrixError::InvalidKey { domain, key }) => {
                assert_eq!(domain, KeyDomain::Sector);
                assert_eq!(key, "delta");
            }
            other => panic!("expected InvalidKey, got {:?}", other.map(|_| ())),
        }
    }
}
