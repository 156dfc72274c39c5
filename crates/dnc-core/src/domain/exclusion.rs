use crate::domain::phone::canonical_match_key;
use std::collections::HashSet;

/// Numbers that must not appear in cleaned output.
///
/// Entries are stored exactly as given; lookups go through
/// [`ExclusionSet::matches_token`], which only consults the set for tokens
/// that look like phone numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    numbers: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number)
    }

    pub fn matches_token(&self, token: &str) -> bool {
        match canonical_match_key(token) {
            Some(key) => self.numbers.contains(&key),
            None => false,
        }
    }
}

impl From<HashSet<String>> for ExclusionSet {
    fn from(numbers: HashSet<String>) -> Self {
        Self { numbers }
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
