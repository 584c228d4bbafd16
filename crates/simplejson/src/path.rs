//! Path steps for nested navigation.

use std::fmt;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathStep {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for PathStep {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<&String> for PathStep {
    fn from(value: &String) -> Self {
        Self::Key(value.clone())
    }
}

impl From<usize> for PathStep {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Builds a fixed-size array of [`PathStep`]s from keys and indices.
///
/// ```
/// use simplejson::{path, PathStep};
///
/// let steps = path!["users", 0, "name"];
/// assert_eq!(steps[1], PathStep::Index(0));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        {
            let steps: [$crate::PathStep; 0] = [];
            steps
        }
    };
    ($($step:expr),+ $(,)?) => {
        [$($crate::PathStep::from($step)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_mixes_keys_and_indices() {
        let steps = path!["a", 3, String::from("b")];
        assert_eq!(
            steps,
            [
                PathStep::Key("a".into()),
                PathStep::Index(3),
                PathStep::Key("b".into()),
            ]
        );
    }

    #[test]
    fn empty_macro_is_empty() {
        let steps: [PathStep; 0] = path![];
        assert!(steps.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(PathStep::from("k").to_string(), "k");
        assert_eq!(PathStep::from(7usize).to_string(), "7");
    }
}
