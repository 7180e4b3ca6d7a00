//! Single-or-many text input and the matching result shape.

/// Text passed to `translate` or `detect`.
///
/// Whether the caller handed over one string or a list decides the shape
/// of the result (see [`Echo`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Single(String),
    Many(Vec<String>),
}

/// Shape of the original input, recorded once when an operation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Many,
}

impl TextInput {
    pub const fn cardinality(&self) -> Cardinality {
        match self {
            Self::Single(_) => Cardinality::Single,
            Self::Many(_) => Cardinality::Many,
        }
    }

    /// Number of strings that will be sent as `q` values.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wraps a single string into a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Many(items) => items,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<&String> for TextInput {
    fn from(text: &String) -> Self {
        Self::Single(text.clone())
    }
}

impl From<Vec<String>> for TextInput {
    fn from(items: Vec<String>) -> Self {
        Self::Many(items)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(items: Vec<&str>) -> Self {
        Self::Many(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TextInput {
    fn from(items: &[&str]) -> Self {
        Self::Many(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextInput {
    fn from(items: [&str; N]) -> Self {
        Self::Many(items.iter().map(|s| (*s).to_string()).collect())
    }
}

/// A result that mirrors the cardinality of the input: one value for a
/// single string, a list aligned by index for a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Echo<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Echo<T> {
    /// Shapes `items` after `cardinality`.
    ///
    /// Returns `None` for a single-shaped result with no items.
    pub fn from_vec(cardinality: Cardinality, items: Vec<T>) -> Option<Self> {
        match cardinality {
            Cardinality::Single => items.into_iter().next().map(Self::Single),
            Cardinality::Many => Some(Self::Many(items)),
        }
    }

    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value of a single-shaped result.
    pub fn into_single(self) -> Option<T> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(value) => vec![value],
            Self::Many(items) => items,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Echo<U> {
        match self {
            Self::Single(value) => Echo::Single(f(value)),
            Self::Many(items) => Echo::Many(items.into_iter().map(f).collect()),
        }
    }
}

impl<'a, T> IntoIterator for &'a Echo<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_cardinality() {
        assert_eq!(TextInput::from("Hello").cardinality(), Cardinality::Single);
        assert_eq!(
            TextInput::from(["Hello", "Bye"]).cardinality(),
            Cardinality::Many
        );
        // A one-element list is still a list
        assert_eq!(TextInput::from(vec!["Hello"]).cardinality(), Cardinality::Many);
    }

    #[test]
    fn test_text_input_into_vec_wraps_single() {
        assert_eq!(TextInput::from("Hello").into_vec(), vec!["Hello"]);
        assert_eq!(
            TextInput::from(vec!["a".to_string(), "b".to_string()]).into_vec(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_echo_from_vec_single_takes_first() {
        let echo = Echo::from_vec(Cardinality::Single, vec!["a", "b"]).unwrap();
        assert_eq!(echo, Echo::Single("a"));
        assert!(Echo::<&str>::from_vec(Cardinality::Single, vec![]).is_none());
    }

    #[test]
    fn test_echo_from_vec_many_keeps_order() {
        let echo = Echo::from_vec(Cardinality::Many, vec![1, 2, 3]).unwrap();
        assert_eq!(echo.as_slice(), &[1, 2, 3]);
        assert!(!echo.is_single());
        assert_eq!(echo.len(), 3);
    }

    #[test]
    fn test_echo_map_preserves_shape() {
        assert_eq!(Echo::Single(2).map(|n| n * 10), Echo::Single(20));
        assert_eq!(Echo::Many(vec![1, 2]).map(|n| n + 1), Echo::Many(vec![2, 3]));
    }

    #[test]
    fn test_echo_into_single() {
        assert_eq!(Echo::Single("x").into_single(), Some("x"));
        assert_eq!(Echo::Many(vec!["x"]).into_single(), None);
    }
}
