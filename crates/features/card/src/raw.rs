use crate::error::{ConfigError, ConfigErrorExt, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Untyped configuration payload as received from the host bridge.
///
/// All accessors are total: a missing key or a value of the wrong type yields `None`
/// (or the supplied default) and is only reported at `debug` level.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig {
    entries: Map<String, Value>,
}

impl RawConfig {
    #[must_use]
    pub const fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Parses a JSON document whose root is an object.
    ///
    /// # Errors
    /// * [`ConfigError::Json`] if the text is not valid JSON.
    /// * [`ConfigError::NotAnObject`] if the root is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Failed to parse card configuration")?;
        Self::try_from(value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the object nested under `key`, or `self` unchanged when there is none.
    #[must_use]
    pub fn into_nested_or_self(mut self, key: &str) -> Self {
        match self.entries.get_mut(key) {
            Some(Value::Object(inner)) => {
                debug!(key, "Unwrapping nested card configuration");
                Self::new(std::mem::take(inner))
            },
            _ => self,
        }
    }

    /// Boolean under `key`, or `default` when absent or not a boolean.
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.typed(key, "boolean", Value::as_bool).unwrap_or(default)
    }

    /// String under `key`, if present and a string.
    #[must_use]
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.typed(key, "string", Value::as_str)
    }

    /// Non-empty list of strings under `key`.
    ///
    /// An empty list is treated exactly like a missing key. A list holding anything other
    /// than strings is rejected as a whole.
    #[must_use]
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.typed(key, "array", Value::as_array)?;
        let strings: Option<Vec<String>> =
            items.iter().map(|item| item.as_str().map(str::to_owned)).collect();

        match strings {
            Some(strings) if !strings.is_empty() => Some(strings),
            Some(_) => {
                debug!(key, "Empty list treated as unset");
                None
            },
            None => {
                debug!(key, expected = "array of strings", "Ignoring mistyped configuration value");
                None
            },
        }
    }

    fn typed<'v, T>(
        &'v self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&'v Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.entries.get(key)?;
        let typed = extract(value);
        if typed.is_none() {
            debug!(key, expected, found = value_kind(value), "Ignoring mistyped configuration value");
        }
        typed
    }
}

impl From<Map<String, Value>> for RawConfig {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

impl TryFrom<Value> for RawConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self::new(entries)),
            other => Err(ConfigError::NotAnObject { found: value_kind(&other).into(), context: None }),
        }
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
