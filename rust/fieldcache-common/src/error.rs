use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn ordinal_out_of_range(ordinal: u32, num_ords: usize) -> Error {
        Error(ErrorKind::OrdinalOutOfRange { ordinal, num_ords }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid field data for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("ordinal {ordinal} is outside of the dictionary (1..={num_ords})")]
    OrdinalOutOfRange { ordinal: u32, num_ords: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::invalid_arg("initial_values", "must be positive");
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "invalid argument initial_values: must be positive"
        );
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "initial_values"),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_ordinal_out_of_range_message() {
        let err = Error::ordinal_out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "ordinal 7 is outside of the dictionary (1..=3)"
        );
    }
}
