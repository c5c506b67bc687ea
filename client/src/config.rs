//! Build-time public configuration.
//!
//! Values come from `option_env!` so the server render and the WASM bundle
//! embed the same strings and hydration never disagrees about a link.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Placeholder href when a docs URL was not configured at build time.
pub const UNSET_URL: &str = "#";

/// External documentation targets for the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsLinks {
    pub api: String,
    pub websocket: String,
}

impl DocsLinks {
    /// Read `BOARDS_API_DOCS_URL` and `BOARDS_WS_DOCS_URL` as baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("BOARDS_API_DOCS_URL"), option_env!("BOARDS_WS_DOCS_URL"))
    }

    /// The websocket link falls back to the API docs URL, which falls back to
    /// [`UNSET_URL`]. Blank values count as unset.
    #[must_use]
    pub fn resolve(api: Option<&str>, websocket: Option<&str>) -> Self {
        let non_blank = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        let api = non_blank(api).unwrap_or_else(|| UNSET_URL.to_owned());
        let websocket = non_blank(websocket).unwrap_or_else(|| api.clone());
        Self { api, websocket }
    }
}
