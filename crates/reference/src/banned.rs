use std::collections::HashSet;

/// Products that may not be imported under any circumstances.
///
/// Matching is a case-insensitive substring scan against the free-text
/// description. The backing set is unordered, so when several banned entries
/// appear in one description the order of the resulting matches is
/// unspecified — callers must treat the matches as a set.
#[derive(Debug, Clone)]
pub struct BannedProducts {
    entries: HashSet<String>,
}

impl BannedProducts {
    /// Build from an explicit list of banned product names.
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in prohibition list.
    pub fn builtin() -> Self {
        Self::new([
            "Tiger Skin",
            "Ivory",
            "Snake Venom",
            "Peacock Feathers",
            "Opium",
            "Cocaine",
            "Heroin",
            "Red Sandalwood",
            "Indian Currency (in bulk)",
            "Certain E-waste",
            "Antiques over 100 years old",
            "Organs",
            "Tissues",
            "Blood",
            "Bones",
            "Methylamine",
            "Red Phosphorus",
            "Acetic Anhydride",
            "Old laptops",
            "batteries",
        ])
    }

    /// Every banned entry that appears (case-insensitively) as a substring of
    /// `description`. Match order across entries is unspecified.
    pub fn matches_in<'a>(&'a self, description: &str) -> Vec<&'a str> {
        let haystack = description.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| haystack.contains(&entry.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Number of banned entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the prohibition list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Origin countries imports are restricted from. Membership is an exact
/// match on the country name as sourced.
#[derive(Debug, Clone)]
pub struct BannedCountries {
    entries: HashSet<String>,
}

impl BannedCountries {
    /// Build from an explicit list of country names.
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in restricted-origin list.
    pub fn builtin() -> Self {
        Self::new(["North Korea", "Pakistan", "Iran", "China"])
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, country: &str) -> bool {
        self.entries.contains(country)
    }
}
