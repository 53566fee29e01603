//! Capture of `extend` declarations made during a render pass

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use tracing::trace;

use crate::engine::TemplateFunction;

/// Name under which the extend capability is exposed to templates
pub const EXTEND_FN: &str = "extend";

/// Reserved binding carrying a child's rendered output into its layout
pub const CONTENT_KEY: &str = "content";

/// A layout request captured from a template
///
/// Produced when a template calls `extend(path, data)` during its render and
/// consumed right after that render completes; never persisted beyond the
/// pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendDeclaration {
    /// Declared layout path, resolved relative to the declaring template
    pub layout_path: String,
    /// Extra bindings for the layout
    pub layout_data: Map<String, Value>,
}

/// Per-pass slot the injected `extend` function writes into
///
/// One slot exists per render pass. The last call wins when a template calls
/// `extend` more than once; earlier recordings are silently discarded.
#[derive(Debug, Default)]
pub(crate) struct ExtendSlot {
    declaration: Mutex<Option<ExtendDeclaration>>,
}

impl ExtendSlot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take the captured declaration, leaving the slot empty
    pub fn take(&self) -> Option<ExtendDeclaration> {
        self.declaration
            .lock()
            .expect("extend slot lock poisoned")
            .take()
    }

    fn record(&self, declaration: ExtendDeclaration) {
        *self
            .declaration
            .lock()
            .expect("extend slot lock poisoned") = Some(declaration);
    }
}

/// The `extend` function exposed to a template's scope during one pass
pub(crate) struct ExtendFn {
    slot: Arc<ExtendSlot>,
}

impl ExtendFn {
    pub fn new(slot: Arc<ExtendSlot>) -> Self {
        Self { slot }
    }
}

impl TemplateFunction for ExtendFn {
    fn call(&self, args: &[Value]) -> Result<Value, String> {
        let layout_path = args.first().and_then(|v| v.as_str()).unwrap_or_default();
        if layout_path.is_empty() {
            return Err("extend() requires a non-empty layout path".to_string());
        }

        let layout_data = match args.get(1) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        trace!(layout = layout_path, "extend declared");
        self.slot.record(ExtendDeclaration {
            layout_path: layout_path.to_string(),
            layout_data,
        });

        // No inline output where the call was placed.
        Ok(Value::Null)
    }
}
