//! JSON Value Extension
//!
//! Accessors with default fallbacks for JSON metadata maps.

use std::collections::HashMap;

/// Extension trait for JSON containers with convenient accessor methods
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use repochat_providers::utils::JsonExt;
///
/// let meta = json!({"file_path": "src/lib.rs", "chunk_index": 2});
/// assert_eq!(meta.str_or("file_path", "unknown"), "src/lib.rs");
/// assert_eq!(meta.u64_or("chunk_index", 0), 2);
/// assert_eq!(meta.str_or("missing", "unknown"), "unknown");
/// ```
pub trait JsonExt {
    /// Get string value or default
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;

    /// Get owned string value or default
    fn string_or(&self, key: &str, default: &str) -> String;

    /// Get u64 value or default
    fn u64_or(&self, key: &str, default: u64) -> u64;

    /// Get optional string
    fn opt_str(&self, key: &str) -> Option<&str>;
}

/// Internal trait for types that can be used as JSON-like containers
trait JsonContainer {
    fn get_value(&self, key: &str) -> Option<&serde_json::Value>;
}

impl JsonContainer for serde_json::Value {
    #[inline]
    fn get_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key)
    }
}

impl JsonContainer for HashMap<String, serde_json::Value> {
    #[inline]
    fn get_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key)
    }
}

/// Macro to implement JsonExt for types that implement JsonContainer
macro_rules! impl_json_ext {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl JsonExt for $ty {
                #[inline]
                fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
                    self.get_value(key).and_then(|v| v.as_str()).unwrap_or(default)
                }

                #[inline]
                fn string_or(&self, key: &str, default: &str) -> String {
                    self.str_or(key, default).to_string()
                }

                #[inline]
                fn u64_or(&self, key: &str, default: u64) -> u64 {
                    self.get_value(key).and_then(|v| v.as_u64()).unwrap_or(default)
                }

                #[inline]
                fn opt_str(&self, key: &str) -> Option<&str> {
                    self.get_value(key).and_then(|v| v.as_str())
                }
            }
        )+
    };
}

impl_json_ext!(serde_json::Value, HashMap<String, serde_json::Value>);
