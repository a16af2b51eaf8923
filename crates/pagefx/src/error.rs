//! Error types for pagefx.
//!
//! Optional page elements (a menu button, an anchor target, a chart parent)
//! are looked up as `Option`s and simply make a behavior inert when absent.
//! [`Error`] covers the rest: a missing browser environment, a browser call
//! that threw, or a configuration that could not be used.

use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur while wiring up the page.
///
/// # Example
///
/// ```rust
/// use pagefx::{Error, PageConfig};
///
/// match PageConfig::from_json(r#"{ "scrollDurationMs": -5 }"#) {
///     Err(Error::InvalidConfig(reason)) => assert!(reason.contains("scrollDurationMs")),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// There is no global `window` (not running in a browser main thread).
    #[error("no global window available")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// A browser API call threw.
    #[error("{op} failed: {message}")]
    Dom {
        /// The call that failed, e.g. `"appendChild"`.
        op: &'static str,
        /// The message carried by the thrown JavaScript value.
        message: String,
    },

    /// The configuration JSON could not be parsed.
    #[error("invalid configuration json: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized [`Result`](std::result::Result) for pagefx operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Maps a thrown `JsValue` into [`Error::Dom`] tagged with the failing call.
pub(crate) trait DomResultExt<T> {
    fn dom(self, op: &'static str) -> Result<T>;
}

impl<T> DomResultExt<T> for std::result::Result<T, JsValue> {
    fn dom(self, op: &'static str) -> Result<T> {
        self.map_err(|value| Error::Dom {
            op,
            message: js_message(&value),
        })
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::NoWindow.to_string(), "no global window available");
        assert_eq!(Error::NoBody.to_string(), "document has no body");

        let err = Error::Dom {
            op: "insertBefore",
            message: "HierarchyRequestError".into(),
        };
        assert_eq!(err.to_string(), "insertBefore failed: HierarchyRequestError");

        let err = Error::InvalidConfig("chartAspect must be positive".into());
        assert!(err.to_string().contains("chartAspect"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration json"));
    }
}
