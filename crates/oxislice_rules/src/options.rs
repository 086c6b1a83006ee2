use serde::Deserialize;

use crate::layer::Layer;

/// Rule options, deserialized from the project's `oxislice.json`.
///
/// Key names follow the camelCase option names of the ESLint FSD plugins
/// these rules replace, so existing configurations can be copied over.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RuleOptions {
    /// Path alias prefix, e.g. `@` for `@/shared/ui`.
    pub alias: String,
    /// First segments ordered as their own group after the public layers.
    pub other_import: Vec<String>,
    /// Layers whose public entry sits one directory below the slice.
    pub layers_plus_one: Vec<Layer>,
    pub shared_enclosure: Vec<String>,
    pub entities_enclosure: Vec<String>,
    pub features_enclosure: Vec<String>,
    #[serde(alias = "widgetEnclosure")]
    pub widgets_enclosure: Vec<String>,
    #[serde(alias = "pageEnclosure")]
    pub pages_enclosure: Vec<String>,
    /// Name of the restricted public entry (`index.testing.ts` style surfaces).
    pub other_public_import: String,
    /// Globs of files allowed to import the restricted entry.
    pub other_public_patterns: Vec<String>,
    /// Layers exempt from the public-api depth check inside restricted-entry files.
    #[serde(alias = "otherIgnoreLayer")]
    pub other_ignore_layers: Vec<Layer>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            alias: String::new(),
            other_import: Vec::new(),
            layers_plus_one: Vec::new(),
            shared_enclosure: Vec::new(),
            entities_enclosure: Vec::new(),
            features_enclosure: Vec::new(),
            widgets_enclosure: Vec::new(),
            pages_enclosure: Vec::new(),
            other_public_import: "testing".to_string(),
            other_public_patterns: Vec::new(),
            other_ignore_layers: Vec::new(),
        }
    }
}

impl RuleOptions {
    /// Slices of `layer` allowed one extra directory before their public entry.
    pub fn enclosures(&self, layer: Layer) -> &[String] {
        match layer {
            Layer::Shared => &self.shared_enclosure,
            Layer::Entities => &self.entities_enclosure,
            Layer::Features => &self.features_enclosure,
            Layer::Widgets => &self.widgets_enclosure,
            Layer::Pages => &self.pages_enclosure,
            Layer::App => &[],
        }
    }

    pub fn is_plus_one(&self, layer: Layer) -> bool {
        self.layers_plus_one.contains(&layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RuleOptions::default();
        assert_eq!(options.alias, "");
        assert_eq!(options.other_public_import, "testing");
        assert!(options.enclosures(Layer::Features).is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RuleOptions = serde_json::from_str(
            r#"{
                "alias": "@",
                "layersPlusOne": ["shared"],
                "featuresEnclosure": ["Article"],
                "pageEnclosure": ["Profile"],
                "widgetEnclosure": ["Sidebar"],
                "otherPublicPatterns": ["**/*.stories.tsx"]
            }"#,
        )
        .unwrap();
        assert_eq!(options.alias, "@");
        assert!(options.is_plus_one(Layer::Shared));
        assert!(!options.is_plus_one(Layer::Entities));
        assert_eq!(options.enclosures(Layer::Features), ["Article".to_string()]);
        assert_eq!(options.enclosures(Layer::Pages), ["Profile".to_string()]);
        assert_eq!(options.enclosures(Layer::Widgets), ["Sidebar".to_string()]);
        assert_eq!(options.other_public_import, "testing");
    }

    #[test]
    fn test_rejects_unknown_keys_and_layers() {
        assert!(serde_json::from_str::<RuleOptions>(r#"{ "aliaz": "@" }"#).is_err());
        assert!(serde_json::from_str::<RuleOptions>(r#"{ "layersPlusOne": ["core"] }"#).is_err());
    }
}
