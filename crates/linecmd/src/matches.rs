use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A value bound to a key of [`ParsedArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An option that takes no argument was given.
    Flag,
    /// An option argument or a positional argument.
    Text(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Options and arguments extracted from one matched line.
///
/// Keys are option short letters (`l` for `-l`), option long names (`loud`
/// for `--loud`) and argument names. A key that was not bound is absent;
/// there is no placeholder value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedArgs {
    values: IndexMap<String, Value>,
}

impl ParsedArgs {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Text value for `key`; `None` for flags and absent keys.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether `key` is bound, either as a flag or with a value.
    pub fn is_present(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in the order they were bound.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl ParsedArgs {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }
}
