use crate::layer::Layer;

/// Strips `"<alias>/"` from the front of an import target.
///
/// An empty alias, or a target that does not start with the alias prefix,
/// leaves the target untouched.
pub fn normalize<'a>(raw: &'a str, alias: &str) -> &'a str {
    if alias.is_empty() {
        return raw;
    }
    raw.strip_prefix(alias).and_then(|rest| rest.strip_prefix('/')).unwrap_or(raw)
}

pub fn is_relative(target: &str) -> bool {
    target == "." || target == ".." || target.starts_with("./") || target.starts_with("../")
}

/// An import target broken down by what the layer conventions care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget<'a> {
    /// `./x`, `../x`
    Relative(&'a str),
    /// First segment is a layer name.
    Layered(LayeredTarget<'a>),
    /// Anything else: packages, unknown roots, the empty string.
    External(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredTarget<'a> {
    pub layer: Layer,
    pub slice: Option<&'a str>,
    pub rest: Vec<&'a str>,
}

impl<'a> ImportTarget<'a> {
    /// Normalizes `raw` against `alias` and decomposes the result.
    pub fn parse(raw: &'a str, alias: &str) -> Self {
        let normalized = normalize(raw, alias);
        if is_relative(normalized) {
            return ImportTarget::Relative(normalized);
        }

        let mut segments = normalized.split('/');
        let head = segments.next().unwrap_or_default();
        match Layer::from_name(head) {
            Some(layer) => ImportTarget::Layered(LayeredTarget {
                layer,
                slice: segments.next(),
                rest: segments.collect(),
            }),
            None => ImportTarget::External(normalized),
        }
    }

    /// The first path segment after alias stripping (`""` for relative targets).
    pub fn head(&self) -> &'a str {
        match self {
            ImportTarget::Relative(_) => "",
            ImportTarget::Layered(t) => t.layer.as_str(),
            ImportTarget::External(path) => path.split('/').next().unwrap_or_default(),
        }
    }
}

impl<'a> LayeredTarget<'a> {
    pub fn depth(&self) -> usize {
        1 + usize::from(self.slice.is_some()) + self.rest.len()
    }

    pub fn last_segment(&self) -> &'a str {
        self.rest.last().copied().or(self.slice).unwrap_or_else(|| self.layer.as_str())
    }

    /// All segments joined back in order, layer first.
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = Vec::with_capacity(self.depth());
        segments.push(self.layer.as_str());
        segments.extend(self.slice);
        segments.extend(self.rest.iter().copied());
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_alias_prefix() {
        assert_eq!(normalize("@/entities/Article", "@"), "entities/Article");
        assert_eq!(normalize("entities/Article", "@"), "entities/Article");
        assert_eq!(normalize("@/entities/Article", ""), "@/entities/Article");
        // Scoped packages are not aliased paths.
        assert_eq!(normalize("@reduxjs/toolkit", "@"), "@reduxjs/toolkit");
        assert_eq!(normalize("~app/shared/ui", "~app"), "shared/ui");
    }

    #[test]
    fn test_is_relative() {
        assert!(is_relative("./Button"));
        assert!(is_relative("../model/types"));
        assert!(is_relative("."));
        assert!(!is_relative(".storybook/config"));
        assert!(!is_relative("shared/ui"));
    }

    #[test]
    fn test_parse_layered() {
        let target = ImportTarget::parse("@/features/Auth/model/selectors", "@");
        let ImportTarget::Layered(t) = target else { panic!("expected layered target") };
        assert_eq!(t.layer, Layer::Features);
        assert_eq!(t.slice, Some("Auth"));
        assert_eq!(t.rest, vec!["model", "selectors"]);
        assert_eq!(t.depth(), 4);
        assert_eq!(t.last_segment(), "selectors");
        assert_eq!(t.segments(), vec!["features", "Auth", "model", "selectors"]);
    }

    #[test]
    fn test_parse_layer_only() {
        let ImportTarget::Layered(t) = ImportTarget::parse("shared", "") else {
            panic!("expected layered target")
        };
        assert_eq!(t.slice, None);
        assert_eq!(t.depth(), 1);
        assert_eq!(t.last_segment(), "shared");
    }

    #[test]
    fn test_parse_relative_and_external() {
        assert_eq!(ImportTarget::parse("../ui/Card", "@"), ImportTarget::Relative("../ui/Card"));
        assert_eq!(ImportTarget::parse("react-dom/client", ""), ImportTarget::External("react-dom/client"));
        assert_eq!(ImportTarget::parse("", ""), ImportTarget::External(""));
    }

    #[test]
    fn test_head() {
        assert_eq!(ImportTarget::parse("react-dom/client", "").head(), "react-dom");
        assert_eq!(ImportTarget::parse("@/pages/Main", "@").head(), "pages");
        assert_eq!(ImportTarget::parse("./x", "").head(), "");
    }
}
