use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode '{0}' (expected plain, en, greek or gr)")]
pub struct ParseModeError(pub String);
