//! FieldUpdate - One field of a partial update

/// A single field of a partial update.
///
/// `Omitted` keeps whatever the existing record holds; `Provided` replaces it.
/// A JSON `null` and a missing key both map to `Omitted`, so an optional field
/// cannot be cleared back to absent through a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Provided(T),
    #[default]
    Omitted,
}

impl<T> FieldUpdate<T> {
    /// Resolve against the current value
    pub fn resolve(self, current: T) -> T {
        match self {
            Self::Provided(value) => value,
            Self::Omitted => current,
        }
    }

    /// Resolve against an optional current value
    pub fn resolve_option(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Provided(value) => Some(value),
            Self::Omitted => current,
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Provided(v),
            None => Self::Omitted,
        }
    }
}
