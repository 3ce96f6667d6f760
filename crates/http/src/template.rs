//! Page templates, compiled into the binary.

use askama::Template;

/// The counter page.
#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct IndexTemplate {
    pub(crate) hits: i64,
}
