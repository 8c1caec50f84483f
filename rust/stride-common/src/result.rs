pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with an `InvalidArgument` error unless `$expr` holds.
///
/// The error names the argument and carries the stringified condition,
/// e.g. `invalid argument step: step != 0`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Unwraps `value`, or fails with an `InvalidArgument` error naming `name`.
#[inline]
pub fn verify_arg_some<T>(value: Option<T>, name: &str, condition: &str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => invalid_arg(name, condition),
    }
}

#[cold]
pub fn invalid_arg<T>(name: &str, condition: &str) -> Result<T> {
    log::debug!("rejected argument {name}: {condition}");
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}
