//! Fragment routing: `#year` and `#month/<id>`.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Which page is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "month", rename_all = "lowercase")]
pub enum View {
    #[default]
    Year,
    Month(u32),
}

fn month_route() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#?month/(.*)$").expect("static regex"))
}

impl View {
    /// Resolve a fragment. Anything that is not a month route shows the
    /// year; a month route with a non-numeric id resolves to month 0,
    /// which no dataset contains.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.trim();
        match month_route().captures(fragment) {
            Some(caps) => {
                // Strict integer id: "#month/ 3" and "#month/3.0" are not
                // month 3, unlike a browser's Number() coercion.
                let id = caps
                    .get(1)
                    .and_then(|m| m.as_str().split('/').next())
                    .and_then(|s| s.parse::<u32>().ok())
                    .unwrap_or(0);
                View::Month(id)
            }
            None => View::Year,
        }
    }

    pub fn fragment(&self) -> String {
        match self {
            View::Year => "#year".to_string(),
            View::Month(id) => format!("#month/{id}"),
        }
    }

    pub fn month_id(&self) -> Option<u32> {
        match self {
            View::Year => None,
            View::Month(id) => Some(*id),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
