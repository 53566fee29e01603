//! Layout composition
//!
//! A template opts into a layout by calling `extend(path, data)` while it
//! renders. The composer re-renders the declared layout with the template's
//! output bound to the reserved `content` variable, and keeps going for as
//! long as each layout declares a parent of its own.
//!
//! # Example
//!
//! ```text
//! {# views/home.jinja #}
//! {{ extend("layouts/page", {"title": "Welcome"}) }}
//! <h1>Hello {{ name }}</h1>
//!
//! {# views/layouts/page.jinja #}
//! <html><head><title>{{ title }}</title></head>
//! <body>{{ content }}</body></html>
//! ```

mod chain;
mod extend;
mod path;

pub use chain::LayoutComposer;
pub use extend::{ExtendDeclaration, CONTENT_KEY, EXTEND_FN};
