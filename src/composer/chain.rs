//! The recursive composition chain

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ComposeConfig;
use crate::engine::{JinjaEngine, TemplateEngine, TemplateFunction};
use crate::error::ComposeError;

use super::extend::{ExtendDeclaration, ExtendFn, ExtendSlot, CONTENT_KEY, EXTEND_FN};
use super::path::resolve_layout_path;

/// Outcome of rendering one level of the chain: the evaluated output plus
/// the layout request the template declared, if any.
struct RenderPass {
    output: String,
    extend: Option<ExtendDeclaration>,
}

/// Composes a template with the chain of layouts it declares
///
/// Each level renders with an `extend` function in scope; calling it marks
/// the current template as a child of the named layout. The composer then
/// renders that layout with the child's output bound to `content` and
/// repeats until a template declares no layout.
///
/// There is no depth limit and no cycle detection: a chain in which a layout
/// extends one of its own descendants recurses until resources are
/// exhausted. Only one layout is honored per template; when `extend` is
/// called more than once in a file, the last call wins.
pub struct LayoutComposer {
    engine: Box<dyn TemplateEngine>,
    config: ComposeConfig,
}

impl LayoutComposer {
    /// Composer over the default MiniJinja engine
    pub fn new() -> Self {
        Self::with_engine(JinjaEngine::new())
    }

    /// Composer over a custom template engine
    pub fn with_engine(engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            config: ComposeConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ComposeConfig) -> Self {
        self.config = config;
        self
    }

    /// Render `template_path` and fold it into every layout it declares.
    ///
    /// Yields the final output once a template in the chain declares no
    /// further layout, or the first error any level produced; never both.
    /// A relative `template_path` resolves under the configured views
    /// directory, when one is set.
    pub fn compose(
        &self,
        template_path: impl AsRef<Path>,
        data: &HashMap<String, Value>,
    ) -> Result<String, ComposeError> {
        let template_path = template_path.as_ref();
        let entry = match &self.config.views_dir {
            Some(root) if template_path.is_relative() => root.join(template_path),
            _ => template_path.to_path_buf(),
        };

        // Working copy local to this call; templates never see the caller's
        // map. `extend` is reserved for the injected capability - a caller
        // binding under that name would shadow it in the template scope.
        let mut bindings = data.clone();
        bindings.remove(EXTEND_FN);

        self.compose_level(&entry, bindings)
    }

    fn compose_level(
        &self,
        path: &Path,
        bindings: HashMap<String, Value>,
    ) -> Result<String, ComposeError> {
        let pass = self.render_level(path, &bindings)?;

        let Some(declaration) = pass.extend else {
            debug!(template = %path.display(), "composition chain complete");
            return Ok(pass.output);
        };

        debug!(
            template = %path.display(),
            layout = %declaration.layout_path,
            "template extends a layout"
        );

        let layout_path =
            resolve_layout_path(path, &declaration.layout_path, &self.config.default_extension);

        // Shallow merge: layout data overrides the current bindings, and the
        // rendered child always lands under the reserved `content` key.
        let mut next = bindings;
        for (key, value) in declaration.layout_data {
            next.insert(key, value);
        }
        next.insert(CONTENT_KEY.to_string(), Value::String(pass.output));

        self.compose_level(&layout_path, next)
    }

    /// One render pass: evaluate a single template with the extend capability
    /// in scope and report the layout request it captured.
    fn render_level(
        &self,
        path: &Path,
        bindings: &HashMap<String, Value>,
    ) -> Result<RenderPass, ComposeError> {
        let slot = ExtendSlot::new();

        let mut functions: HashMap<String, Arc<dyn TemplateFunction>> = HashMap::new();
        functions.insert(
            EXTEND_FN.to_string(),
            Arc::new(ExtendFn::new(Arc::clone(&slot))),
        );

        trace!(
            template = %path.display(),
            engine = self.engine.engine_name(),
            "rendering template"
        );
        let output = self.engine.render_file(path, bindings, &functions)?;

        Ok(RenderPass {
            output,
            extend: slot.take(),
        })
    }
}

impl Default for LayoutComposer {
    fn default() -> Self {
        Self::new()
    }
}
