//! Layout path resolution

use std::path::{Path, PathBuf};

/// Resolve a declared layout path against the template that declared it.
///
/// A declared path with no file-extension component gets `default_extension`
/// appended, then the result is joined onto the declaring template's
/// directory. A layout can therefore name its own parent relative to itself,
/// regardless of where the entry template lives.
pub(crate) fn resolve_layout_path(
    current: &Path,
    declared: &str,
    default_extension: &str,
) -> PathBuf {
    let mut layout = PathBuf::from(declared);
    if layout.extension().is_none() {
        layout.set_extension(default_extension);
    }
    match current.parent() {
        Some(dir) => dir.join(layout),
        None => layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_default_extension() {
        let resolved = resolve_layout_path(Path::new("views/home.jinja"), "layout", "jinja");
        assert_eq!(resolved, PathBuf::from("views/layout.jinja"));
    }

    #[test]
    fn test_keeps_existing_extension() {
        let resolved = resolve_layout_path(Path::new("views/home.jinja"), "layout.html", "jinja");
        assert_eq!(resolved, PathBuf::from("views/layout.html"));
    }

    #[test]
    fn test_resolves_against_current_directory() {
        let resolved = resolve_layout_path(
            Path::new("views/pages/child.jinja"),
            "../partials/base",
            "jinja",
        );
        assert_eq!(resolved, PathBuf::from("views/pages/../partials/base.jinja"));
    }

    #[test]
    fn test_nested_declared_path() {
        let resolved = resolve_layout_path(Path::new("views/home.jinja"), "partials/base", "jinja");
        assert_eq!(resolved, PathBuf::from("views/partials/base.jinja"));
    }

    #[test]
    fn test_absolute_declared_path_untouched() {
        let resolved = resolve_layout_path(
            Path::new("views/home.jinja"),
            "/srv/layouts/base.jinja",
            "jinja",
        );
        assert_eq!(resolved, PathBuf::from("/srv/layouts/base.jinja"));
    }

    #[test]
    fn test_bare_current_filename() {
        let resolved = resolve_layout_path(Path::new("home.jinja"), "layout", "jinja");
        assert_eq!(resolved, PathBuf::from("layout.jinja"));
    }
}
