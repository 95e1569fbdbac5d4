use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Fails with `InvalidArgument` naming `name` unless `predicate` holds.
#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        return Ok(());
    }
    Err(failed_arg(name, condition))
}

/// Fails with `InvalidFormat` naming `element` unless `predicate` holds.
#[inline]
pub fn verify_data(predicate: bool, element: &str, condition: &str) -> Result<()> {
    if predicate {
        return Ok(());
    }
    Err(failed_data(element, condition))
}

#[cold]
fn failed_arg(name: &str, condition: &str) -> Error {
    Error::invalid_arg(name, format!("expected {condition}"))
}

#[cold]
fn failed_data(element: &str, condition: &str) -> Error {
    Error::invalid_format(element, format!("expected {condition}"))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_positive(capacity: usize) -> super::Result<usize> {
        verify_arg!(capacity, capacity > 0);
        Ok(capacity)
    }

    fn check_sorted(offsets: &[u32]) -> super::Result<()> {
        verify_data!(offsets, offsets.windows(2).all(|w| w[0] <= w[1]));
        Ok(())
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_positive(4).unwrap(), 4);
        let err = check_positive(0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "capacity");
                assert_eq!(message, "expected capacity > 0");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_verify_data() {
        assert!(check_sorted(&[0, 1, 1, 4]).is_ok());
        let err = check_sorted(&[0, 3, 2]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidFormat { .. }));
    }
}
