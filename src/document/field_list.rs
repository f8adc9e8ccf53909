use std::fmt;

use crate::constants::FIELD_LIST_WILDCARD;

/// Ordered, de-duplicated field names requested by the client (`fl`).
///
/// The wildcard `*` selects all *stored* fields. Pseudo-fields such as the
/// relevance score are only returned when named explicitly, so
/// [`wants_score`](RequestedFieldList::wants_score) ignores the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestedFieldList {
    entries: Vec<String>,
}

impl RequestedFieldList {
    /// Parses an `fl` value. Entries are separated by commas and/or whitespace.
    pub fn parse(raw: &str) -> Self {
        let mut list = Self::default();
        for entry in raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
        {
            list.push(entry);
        }
        list
    }

    /// A list holding only the wildcard.
    pub fn wildcard() -> Self {
        Self::from_entries([FIELD_LIST_WILDCARD])
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for entry in entries {
            list.push(entry.as_ref());
        }
        list
    }

    fn push(&mut self, entry: &str) {
        if !self.contains(entry) {
            self.entries.push(entry.to_string());
        }
    }

    /// Returns `true` if `name` was requested explicitly.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn has_wildcard(&self) -> bool {
        self.contains(FIELD_LIST_WILDCARD)
    }

    /// Returns `true` if the score pseudo-field is part of the response.
    pub fn wants_score(&self, score_field: &str) -> bool {
        self.contains(score_field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for RequestedFieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join(","))
    }
}
