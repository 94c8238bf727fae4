use crate::errors::AppResult;
use crate::view::builder::Page;

/// Pretty-printed JSON of a page, for scripting and front-ends.
pub fn render_json(page: &Page) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(page)?)
}
