/// Broad category of an [`AppError`].
///
/// Numerical degeneracy (singular systems, unreachable targets) is never an
/// error; it is absorbed by the fitting and solving code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid command-line values or options.
    Usage,
    /// File system or serialization failure at the I/O boundary.
    Io,
    /// No usable observations to project from.
    InsufficientData,
    /// A model name that is not one of the nine known kinds.
    UnknownModel,
}

impl ErrorKind {
    fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage | ErrorKind::Io | ErrorKind::UnknownModel => 2,
            ErrorKind::InsufficientData => 3,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code: kind.exit_code(),
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientData, message)
    }

    pub fn unknown_model(name: &str) -> Self {
        Self::new(
            ErrorKind::UnknownModel,
            format!("Unknown model '{name}'. Run `horizon models` for the list of names."),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::usage("x").exit_code(), 2);
        assert_eq!(AppError::insufficient_data("x").exit_code(), 3);
        assert_eq!(AppError::unknown_model("bogus").kind(), ErrorKind::UnknownModel);
        assert!(AppError::unknown_model("bogus").to_string().contains("bogus"));
    }
}
