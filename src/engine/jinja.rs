//! MiniJinja-backed template evaluation

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use minijinja::value::Rest;
use minijinja::Environment;
use serde_json::Value;

use super::{TemplateEngine, TemplateFunction};
use crate::error::ComposeError;

/// Template engine backed by MiniJinja
///
/// Each call evaluates one file in a fresh environment, so functions
/// registered for one render never leak into another. Undefined variables
/// render as empty output rather than failing.
#[derive(Debug, Default)]
pub struct JinjaEngine;

impl JinjaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for JinjaEngine {
    fn render_file(
        &self,
        path: &Path,
        variables: &HashMap<String, Value>,
        functions: &HashMap<String, Arc<dyn TemplateFunction>>,
    ) -> Result<String, ComposeError> {
        let source = std::fs::read_to_string(path).map_err(|e| ComposeError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut env = Environment::new();
        register_functions(&mut env, functions);

        let template = env
            .template_from_str(&source)
            .map_err(|e| ComposeError::Render {
                path: path.to_path_buf(),
                message: describe(e),
            })?;

        let ctx = minijinja::Value::from_serialize(variables);
        template.render(ctx).map_err(|e| ComposeError::Render {
            path: path.to_path_buf(),
            message: describe(e),
        })
    }

    fn engine_name(&self) -> &str {
        "minijinja"
    }
}

fn register_functions(
    env: &mut Environment<'_>,
    functions: &HashMap<String, Arc<dyn TemplateFunction>>,
) {
    for (name, function) in functions {
        let function = Arc::clone(function);
        env.add_function(name.clone(), move |args: Rest<minijinja::Value>| {
            let json_args = args
                .iter()
                .map(|v| serde_json::to_value(v).unwrap_or(Value::Null))
                .collect::<Vec<_>>();
            let result = function
                .call(&json_args)
                .map_err(|e| minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e))?;
            if result.is_null() {
                // Null means "no inline output"; undefined renders as empty.
                return Ok(minijinja::Value::UNDEFINED);
            }
            Ok(minijinja::Value::from_serialize(&result))
        });
    }
}

/// Flatten an error and its causes into one message
fn describe(err: minijinja::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
