use std::str::FromStr;

/// A scraped value that may be missing or fail to parse
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The markup held a value that parsed cleanly
    Parsed(T),

    /// The markup held text that could not be parsed; the raw text is kept
    Unparsable(String),

    /// The markup held nothing for this field
    Missing,
}

impl<T: FromStr> Field<T> {
    /// Parses trimmed text into a field
    ///
    /// Empty text is [`Field::Missing`]; text that `T::from_str` rejects is
    /// [`Field::Unparsable`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Field::Missing;
        }

        match trimmed.parse::<T>() {
            Ok(value) => Field::Parsed(value),
            Err(_) => Field::Unparsable(trimmed.to_string()),
        }
    }
}

impl<T> Field<T> {
    /// Returns the parsed value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Parsed(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this field will fall back to a default
    pub fn is_defaulted(&self) -> bool {
        !matches!(self, Field::Parsed(_))
    }

    /// Unwraps the parsed value or returns `default`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Field::Parsed(value) => value,
            Field::Unparsable(_) | Field::Missing => default,
        }
    }

    /// Demotes a parsed value that fails `keep` to [`Field::Unparsable`]
    pub fn filter(self, keep: impl FnOnce(&T) -> bool, raw: &str) -> Self {
        match self {
            Field::Parsed(value) if !keep(&value) => Field::Unparsable(raw.trim().to_string()),
            other => other,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}
