//! Placeholder values and the ordered mapping handed to [`TemplateString`].
//!
//! [`TemplateString`]: super::TemplateString

/// A value bound to a placeholder name.
///
/// Scalars substitute identically wherever their placeholder appears. Sequences
/// only substitute inside a `${BEGIN}`/`${END}` block, one element per repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// A single value.
    Scalar(String),
    /// An ordered list of values, one per block repetition.
    Sequence(Vec<String>),
}

impl TemplateValue {
    /// Returns the scalar text, or `None` for a sequence.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the sequence elements, or `None` for a scalar.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }

    /// Value seen by repetition `index` of a block.
    ///
    /// Scalars ignore the index; sequences yield their element at `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(values) => values.get(index).map(String::as_str),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<String>> From<Vec<T>> for TemplateValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered placeholder mapping.
///
/// Names are unique: inserting an existing name replaces its value but keeps its
/// original position. Iteration follows insertion order, which decides which key
/// is reported when list lengths in a block disagree.
///
/// ```rust
/// use basetools::templating::{Placeholders, TemplateValue};
///
/// let vars = Placeholders::new()
///     .with("NAME", vec!["A", "B"])
///     .with("TAG", "X");
///
/// assert_eq!(vars.scalar("TAG"), Some("X"));
/// assert_eq!(vars.get("NAME"), Some(&TemplateValue::Sequence(vec!["A".into(), "B".into()])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, TemplateValue)>,
}

impl Placeholders {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<TemplateValue>,
    ) -> Option<TemplateValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Overlays `other` onto this mapping; its values win on conflicts.
    pub fn merge(&mut self, other: Placeholders) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    /// Scalar value for `name`; sequences and unknown names yield `None`.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TemplateValue::as_scalar)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Placeholders
where
    K: Into<String>,
    V: Into<TemplateValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut placeholders = Self::new();
        for (name, value) in iter {
            placeholders.insert(name, value);
        }
        placeholders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut vars = Placeholders::new().with("A", "1").with("B", "2");
        let previous = vars.insert("A", "3");

        assert_eq!(previous, Some(TemplateValue::Scalar("1".to_string())));
        let names: Vec<&str> = vars.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(vars.scalar("A"), Some("3"));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_scalar_ignores_sequences() {
        let vars = Placeholders::new().with("LIST", vec!["x", "y"]);
        assert_eq!(vars.scalar("LIST"), None);
        assert_eq!(vars.scalar("MISSING"), None);
        assert!(vars.get("LIST").is_some());
    }

    #[test]
    fn test_value_at_index() {
        let scalar = TemplateValue::from("s");
        let sequence = TemplateValue::from(vec!["a", "b"]);

        assert_eq!(scalar.at(7), Some("s"));
        assert_eq!(sequence.at(1), Some("b"));
        assert_eq!(sequence.at(2), None);
        assert_eq!(sequence.as_sequence().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_merge_overlays_values() {
        let mut base = Placeholders::new().with("A", "1").with("B", "2");
        base.merge(Placeholders::new().with("B", vec!["x"]).with("C", "3"));

        assert_eq!(base.scalar("A"), Some("1"));
        assert!(base.get("B").and_then(TemplateValue::as_sequence).is_some());
        assert_eq!(base.scalar("C"), Some("3"));
    }

    #[test]
    fn test_from_iterator() {
        let vars: Placeholders = vec![("A", "1"), ("B", "2"), ("A", "9")].into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.scalar("A"), Some("9"));
        assert!(!vars.is_empty());
    }
}
