use input_core::RangeError;

/// Errors raised by the script-facing API of a rich input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// The operation does not apply to the control in its current state
    /// (selection APIs on an email input).
    InvalidState(&'static str),
    /// Range arguments rejected by the text primitive.
    IndexSize(RangeError),
}

impl std::fmt::Display for ControlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlError::InvalidState(what) => write!(f, "invalid state: {what}"),
            ControlError::IndexSize(err) => write!(f, "index size: {err}"),
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControlError::InvalidState(_) => None,
            ControlError::IndexSize(err) => Some(err),
        }
    }
}

impl From<RangeError> for ControlError {
    fn from(err: RangeError) -> Self {
        ControlError::IndexSize(err)
    }
}
