use std::path::{Component, Path, PathBuf};

use log::debug;
use path_clean::clean;

use crate::{
    layer::FileLocation,
    target::{ImportTarget, normalize},
    types::{Fix, ImportStatement, RuleId, Violation},
};

pub(crate) const MESSAGE: &str = "Within one slice all paths must be relative";

/// The target points into the importing file's own slice through an
/// absolute or aliased path.
pub fn must_be_relative(file: &FileLocation, target: &ImportTarget<'_>) -> bool {
    if !file.layer.is_sliced() {
        return false;
    }
    let (Some(file_slice), ImportTarget::Layered(t)) = (file.slice.as_deref(), target) else {
        return false;
    };
    t.layer.is_sliced() && t.layer == file.layer && t.slice == Some(file_slice)
}

/// Path from the importing file's directory to `normalized_target`, both
/// taken relative to the source root. Always starts with `.`.
pub fn relative_target(file: &FileLocation, normalized_target: &str) -> String {
    let from: PathBuf = Path::new("/").join(file.dir_segments.join("/"));
    let to = clean(Path::new("/").join(normalized_target));

    let relative = make_relative(&to, &from).to_string_lossy().replace('\\', "/");
    if relative.starts_with('.') { relative } else { format!("./{relative}") }
}

/// Relative path from directory `base` to `target`. Both must be absolute.
fn make_relative(target: &Path, base: &Path) -> PathBuf {
    let mut target_components = target.components().peekable();
    let mut base_components = base.components().peekable();

    // Skip the common prefix
    while let (Some(t), Some(b)) = (target_components.peek(), base_components.peek()) {
        if t != b {
            break;
        }
        target_components.next();
        base_components.next();
    }

    let mut result = PathBuf::new();
    for component in base_components {
        if let Component::Normal(_) = component {
            result.push("..");
        }
    }
    for component in target_components {
        if let Component::Normal(part) = component {
            result.push(part);
        }
    }

    if result.as_os_str().is_empty() { PathBuf::from(".") } else { result }
}

pub(crate) fn check(
    file: &FileLocation,
    stmt: &ImportStatement,
    target: &ImportTarget<'_>,
    alias: &str,
) -> Option<Violation> {
    if !must_be_relative(file, target) {
        return None;
    }
    let normalized = normalize(&stmt.target, alias);
    let relative = relative_target(file, normalized);
    debug!("'{}' stays inside its slice, rewriting to '{}'", stmt.target, relative);

    Some(Violation {
        rule: RuleId::RelativePath,
        span: stmt.span,
        message: MESSAGE.to_string(),
        fix: Some(Fix { span: stmt.source_span, replacement: format!("'{relative}'") }),
    })
}
