use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

/// One tier of the Feature-Sliced Design hierarchy.
///
/// Variants are declared bottom-up so the derived ordering matches the
/// dependency direction: a layer may depend on every layer that compares
/// less than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Shared,
    Entities,
    Features,
    Widgets,
    Pages,
    App,
}

impl Layer {
    pub const ALL: [Layer; 6] =
        [Layer::Shared, Layer::Entities, Layer::Features, Layer::Widgets, Layer::Pages, Layer::App];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Shared => "shared",
            Layer::Entities => "entities",
            Layer::Features => "features",
            Layer::Widgets => "widgets",
            Layer::Pages => "pages",
            Layer::App => "app",
        }
    }

    /// Whether the layer is split into slices with their own public entry.
    ///
    /// `app` is a single composition root: it takes part in layer checks but
    /// has no slices, so public-api, relative-path and ordering treat it as an
    /// ordinary package path.
    pub fn is_sliced(self) -> bool {
        self != Layer::App
    }

    /// A file on `self` may import from `other`.
    pub fn allows(self, other: Layer) -> bool {
        other <= self
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a source file sits inside the layer hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    pub layer: Layer,
    pub slice: Option<String>,
    /// Directory of the file, starting at the layer segment
    /// (`["entities", "Article", "ui"]` for `src/entities/Article/ui/Card.tsx`).
    pub dir_segments: Vec<String>,
}

impl FileLocation {
    /// Locates a file by scanning its directories from the deepest one upward
    /// for the first recognized layer name. The directory right after the
    /// layer is the slice.
    ///
    /// Both `/` and `\` are accepted as separators. Returns `None` when no
    /// directory is a layer name.
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split(['/', '\\']).filter(|s| !s.is_empty()).collect();
        // The last segment is the file name itself.
        let dirs: &[&str] = match segments.split_last() {
            Some((_, dirs)) => dirs,
            None => &[],
        };

        let (index, layer) = dirs
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, dir)| Layer::from_name(dir).map(|layer| (i, layer)))?;

        let location = FileLocation {
            layer,
            slice: dirs.get(index + 1).map(|s| s.to_string()),
            dir_segments: dirs[index..].iter().map(|s| s.to_string()).collect(),
        };
        trace!("Located {} on layer {} slice {:?}", path, layer, location.slice);
        Some(location)
    }
}
