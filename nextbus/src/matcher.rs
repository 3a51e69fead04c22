//! Fuzzy matching of user patterns against NexTrip records.
//!
//! Users type fragments like `lake st`, `#21` or `#any`. A pattern is
//! compared case-insensitively against one text field of each record after
//! collapsing runs of whitespace (NexTrip labels often contain doubled
//! spaces). Three modes are selected by the pattern's syntax:
//!
//! - `#any` (any case) keeps every record
//! - `#<text>` keeps records whose field starts with `<text>` as a whole
//!   leading word, so `#4` matches `4 - Lyndale` but not `14 - Bloomington`
//! - anything else keeps records whose field contains the pattern

/// Pattern that matches every record.
pub const WILDCARD: &str = "#any";

/// Marker that switches a pattern to leading-word matching.
pub const PREFIX_MARKER: char = '#';

/// Collapse every run of whitespace to a single space.
///
/// Leading and trailing whitespace is collapsed but not removed.
///
/// # Examples
///
/// ```
/// use nextbus::matcher::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("Cat       Dog    Rat"), "Cat Dog Rat");
/// assert_eq!(collapse_whitespace("  Cat Dog"), " Cat Dog");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Case-fold and collapse whitespace.
fn normalize(s: &str) -> String {
    collapse_whitespace(&s.to_uppercase())
}

/// A parsed user pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches everything.
    Any,
    /// Normalized leading word, including its trailing space.
    Prefix(String),
    /// Normalized substring.
    Contains(String),
}

impl Pattern {
    /// Parse a raw user pattern.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(WILDCARD) {
            return Pattern::Any;
        }

        match raw.strip_prefix(PREFIX_MARKER) {
            Some(word) if !word.is_empty() => Pattern::Prefix(normalize(&format!("{word} "))),
            _ => Pattern::Contains(normalize(raw)),
        }
    }

    /// Whether a record's field value satisfies this pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Prefix(word) => normalize(value).starts_with(word.as_str()),
            Pattern::Contains(needle) => normalize(value).contains(needle.as_str()),
        }
    }
}

/// Keep the records whose `field` matches `pattern`, in input order.
pub fn extract_matches<T, F>(records: Vec<T>, field: F, pattern: &str) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let pattern = Pattern::parse(pattern);
    if pattern == Pattern::Any {
        return records;
    }

    records
        .into_iter()
        .filter(|record| pattern.matches(field(record)))
        .collect()
}

/// Classification of a match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    /// Exactly one record matched.
    Unique(T),
    /// Nothing matched.
    NoMatch,
    /// Two or more records matched, in input order.
    Multiple(Vec<T>),
}

impl<T> MatchOutcome<T> {
    /// Classify the result of [`extract_matches`].
    pub fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => MatchOutcome::NoMatch,
            1 => match matches.pop() {
                Some(only) => MatchOutcome::Unique(only),
                None => MatchOutcome::NoMatch,
            },
            _ => MatchOutcome::Multiple(matches),
        }
    }
}
