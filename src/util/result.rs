use std::error::Error;

/// Helpers for [`Result`]s where the error type is a proper [`Error`].
///
/// The crate treats [`Result`] as its success / failure carrier: `Ok` for success, `Err` holding a
/// typed error (with its message available through [`Display`](std::fmt::Display)) for failure,
/// with [`Result::is_ok`] and [`Result::is_err`] as the queries.
pub trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// Calling this on an [`Err`] is a contract violation, not a recoverable condition.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::ResultExtension;
    /// # use scratch_collections::collections::hash::LetterMap;
    /// let mut map = LetterMap::new();
    /// map.insert("cat", 1).throw();
    /// assert_eq!(*map.get("cat").throw(), 1);
    /// ```
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
