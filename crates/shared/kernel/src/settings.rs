//! Read-only key lookup over a structured settings document.

use serde::de::DeserializeOwned;
use tracing::debug;

/// A settings document that answers `section.key` lookups.
///
/// Lookups never fail: an absent key, or a value that does not deserialize into `T`,
/// yields `default`.
pub trait SettingsView {
    fn lookup_or_default<T: DeserializeOwned>(&self, section: &str, key: &str, default: T) -> T;
}

impl<S: SettingsView + ?Sized> SettingsView for &S {
    fn lookup_or_default<T: DeserializeOwned>(&self, section: &str, key: &str, default: T) -> T {
        (**self).lookup_or_default(section, key, default)
    }
}

impl SettingsView for config::Config {
    fn lookup_or_default<T: DeserializeOwned>(&self, section: &str, key: &str, default: T) -> T {
        let path = format!("{section}.{key}");
        // Environment overrides arrive with lowercased keys and take precedence over files,
        // which keep keys as written.
        self.get::<T>(&path.to_lowercase()).or_else(|_| self.get::<T>(&path)).unwrap_or_else(
            |e| {
                debug!(key = %path, reason = %e, "Settings key not usable, falling back to default");
                default
            },
        )
    }
}

impl SettingsView for serde_json::Value {
    fn lookup_or_default<T: DeserializeOwned>(&self, section: &str, key: &str, default: T) -> T {
        let Some(value) = self.get(section).and_then(|s| s.get(key)) else {
            return default;
        };
        T::deserialize(value).unwrap_or_else(|e| {
            debug!(key = %format!("{section}.{key}"), reason = %e, "Settings key not usable, falling back to default");
            default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};
    use serde_json::json;

    #[test]
    fn test_json_lookup_hits_and_misses() {
        let doc = json!({ "VV": { "nameT": "Theta" } });

        assert_eq!(doc.lookup_or_default("VV", "nameT", "T".to_owned()), "Theta");
        assert_eq!(doc.lookup_or_default("VV", "solverType", String::new()), "");
        assert_eq!(doc.lookup_or_default("FF", "nameT", "T".to_owned()), "T");
    }

    #[test]
    fn test_json_type_mismatch_yields_default() {
        let doc = json!({ "VV": { "nameT": 42 } });
        assert_eq!(doc.lookup_or_default("VV", "nameT", "T".to_owned()), "T");
    }

    #[test]
    fn test_config_lookup() {
        let cfg = Config::builder()
            .add_source(File::from_str("[VV]\nnameT = \"Theta\"\n", FileFormat::Toml))
            .build()
            .unwrap();

        assert_eq!(cfg.lookup_or_default("VV", "nameT", "T".to_owned()), "Theta");
        assert_eq!(
            cfg.lookup_or_default("VV", "nameTransportProperties", "transportProperties".to_owned()),
            "transportProperties"
        );
    }

    #[test]
    fn test_lowercase_key_overrides_exact_key() {
        let cfg = Config::builder()
            .add_source(File::from_str("[VV]\nnameT = \"FromFile\"\n", FileFormat::Toml))
            .add_source(File::from_str("[vv]\nnamet = \"Override\"\n", FileFormat::Toml))
            .build()
            .unwrap();

        assert_eq!(cfg.lookup_or_default("VV", "nameT", "T".to_owned()), "Override");
    }

    fn solver_type(view: impl SettingsView) -> String {
        view.lookup_or_default("VV", "solverType", String::new())
    }

    #[test]
    fn test_lookup_through_reference() {
        let doc = json!({ "VV": { "solverType": "basic" } });
        assert_eq!(solver_type(&doc), "basic");
        assert_eq!(solver_type(&doc), "basic");
    }
}
