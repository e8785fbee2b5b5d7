//! Error type for the few fallible edges of the filter: reading the cookie,
//! decoding page-supplied config, and talking to the DOM.

/// Errors raised while gathering filter input or wiring the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The filter cookie was present but could not be decoded.
    Cookie { name: String, reason: String },
    /// Page-supplied configuration was not a valid `FilterConfig`.
    Config(String),
    /// A required DOM object (window, document, head) was unavailable.
    Dom(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::Cookie { name, reason } => {
                write!(f, "invalid '{}' cookie: {}", name, reason)
            }
            FilterError::Config(reason) => write!(f, "invalid filter config: {}", reason),
            FilterError::Dom(reason) => write!(f, "dom unavailable: {}", reason),
        }
    }
}

impl std::error::Error for FilterError {}
