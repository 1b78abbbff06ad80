use thiserror::Error;

// Returned by the strict `FromStr` impls of the shared enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported {kind}: '{value}'")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKindError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
