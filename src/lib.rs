//! Nested layout composition for file-based templates
//!
//! This library renders a template file and, when that template declares a
//! parent layout, folds the rendered output into the parent before producing
//! the final string. A template opts in by calling the injected `extend`
//! function while it renders:
//!
//! ```text
//! {# views/home.jinja #}
//! {{ extend("layouts/page", {"title": "Welcome"}) }}
//! <h1>Hello {{ name }}</h1>
//! ```
//!
//! The declared layout is rendered next, with the child's output bound to
//! the reserved `content` variable; layouts may extend further layouts, and
//! composition continues until a template declares no parent. Only the last
//! `extend` call in a file is honored, and cyclic chains are not detected.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use nested_layouts::compose;
//! use serde_json::json;
//!
//! let mut data = HashMap::new();
//! data.insert("name".to_string(), json!("Dear User"));
//!
//! let html = compose("views/home.jinja", &data).unwrap();
//! assert!(html.contains("Hello Dear User"));
//! ```

pub mod composer;
pub mod config;
pub mod engine;
pub mod error;

pub use composer::{ExtendDeclaration, LayoutComposer, CONTENT_KEY, EXTEND_FN};
pub use config::{ComposeConfig, ConfigError};
pub use engine::{JinjaEngine, TemplateEngine, TemplateFunction};
pub use error::ComposeError;

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

/// Compose a template with default engine and configuration
///
/// This is the main entry point for the library: it renders the template at
/// `template_path` with MiniJinja and follows the chain of layouts it
/// declares.
pub fn compose(
    template_path: impl AsRef<Path>,
    data: &HashMap<String, Value>,
) -> Result<String, ComposeError> {
    LayoutComposer::new().compose(template_path, data)
}

/// Compose a template with custom configuration
pub fn compose_with_config(
    template_path: impl AsRef<Path>,
    data: &HashMap<String, Value>,
    config: ComposeConfig,
) -> Result<String, ComposeError> {
    LayoutComposer::new()
        .with_config(config)
        .compose(template_path, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compose_plain_template() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        std::fs::write(dir.path().join("home.jinja"), "<h1>{{ title }}</h1>")
            .expect("Should write template");

        let mut data = HashMap::new();
        data.insert("title".to_string(), json!("Welcome"));

        let html = compose(dir.path().join("home.jinja"), &data).expect("Should compose");
        assert_eq!(html, "<h1>Welcome</h1>");
    }

    #[test]
    fn test_compose_with_layout() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        std::fs::write(
            dir.path().join("home.jinja"),
            r#"{{ extend("page") }}<h1>{{ title }}</h1>"#,
        )
        .expect("Should write template");
        std::fs::write(dir.path().join("page.jinja"), "<body>{{ content }}</body>")
            .expect("Should write template");

        let mut data = HashMap::new();
        data.insert("title".to_string(), json!("Welcome"));

        let html = compose(dir.path().join("home.jinja"), &data).expect("Should compose");
        assert_eq!(html, "<body><h1>Welcome</h1></body>");
    }

    #[test]
    fn test_compose_with_config_views_dir() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        std::fs::write(dir.path().join("home.jinja"), "plain").expect("Should write template");

        let config = ComposeConfig::new().with_views_dir(dir.path());
        let html =
            compose_with_config("home.jinja", &HashMap::new(), config).expect("Should compose");
        assert_eq!(html, "plain");
    }

    #[test]
    fn test_compose_missing_template() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        let result = compose(dir.path().join("ghost.jinja"), &HashMap::new());
        assert!(matches!(result, Err(ComposeError::Read { .. })));
    }
}
