use serde::{Deserialize, Serialize};

/// How type names and clauses are written out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Write classes by their nested name only, leaving imports to the caller.
    /// Classes from Kotlin's default imports are always written this way.
    pub simple_names: bool,
    /// Put the `where` block on its own indented line.
    pub where_on_new_line: bool,
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            simple_names: false,
            where_on_new_line: false,
            indent: "  ".into(),
        }
    }
}

impl RenderOptions {
    pub fn simple_names() -> RenderOptions {
        RenderOptions {
            simple_names: true,
            ..RenderOptions::default()
        }
    }
}
