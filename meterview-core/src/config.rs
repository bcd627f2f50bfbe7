//! # Configuration
//!
//! A minimal string key/value store, set once at startup and read
//! through snapshots. Loaders (environment, `.env`) live in the
//! application crate; the core only knows keys and values.
//!
//! ```rust
//! use meterview_core::MeterConfig;
//! let mut cfg = MeterConfig::new();
//!
//! cfg.set("http.port", "3000");
//! assert_eq!(cfg.snapshot().get_u16("http.port"), Some(3000));
//! ```
//!
//! Environment overrides use a prefix and `__` as the separator:
//! `MV__METRONOME__BASEURL=http://localhost:9000` becomes
//! `metronome.baseurl`.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MeterConfig {
    values: HashMap<String, String>,
}

impl MeterConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Set a key only if nothing set it before.
    pub fn set_default<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Copy every `PREFIX__A__B=value` pair into `a.b = value`.
    pub fn merge_prefixed<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{prefix}__");
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(&prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                if !normalized.is_empty() {
                    self.set(normalized, value);
                }
            }
        }
    }

    pub fn snapshot(&self) -> MeterConfigSnapshot {
        MeterConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeterConfigSnapshot {
    map: HashMap<String, String>,
}

impl MeterConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key).and_then(|v| v.parse::<u16>().ok())
    }
}
