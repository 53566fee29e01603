//! Template evaluation backends
//!
//! The composer treats template evaluation as an opaque capability behind the
//! [`TemplateEngine`] trait: given a template file, a set of variable
//! bindings, and host functions to expose in the template's scope, produce
//! the evaluated output string. The expression language, escaping rules, and
//! control constructs all belong to the backend.
//!
//! [`JinjaEngine`] is the default backend, built on MiniJinja.

mod jinja;

pub use jinja::JinjaEngine;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ComposeError;

/// A host-provided function callable from inside a template
///
/// Arguments arrive as the evaluated call-site values. A returned
/// `Value::Null` renders as an empty string at the call site, so functions
/// invoked purely for their side effect produce no visible output.
pub trait TemplateFunction: Send + Sync {
    fn call(&self, args: &[Value]) -> Result<Value, String>;
}

/// Template evaluation backend
pub trait TemplateEngine: Send + Sync {
    /// Evaluate the template file at `path` with the given variable bindings
    ///
    /// Each entry in `functions` is exposed to the template's scope under its
    /// map key. An error returned by a function aborts the evaluation and
    /// surfaces as a [`ComposeError::Render`].
    fn render_file(
        &self,
        path: &Path,
        variables: &HashMap<String, Value>,
        functions: &HashMap<String, Arc<dyn TemplateFunction>>,
    ) -> Result<String, ComposeError>;

    /// Engine name, used in diagnostics
    fn engine_name(&self) -> &str;
}
