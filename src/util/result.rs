use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or panics using the [`Display`](std::fmt::Display) message of the
    /// contained error. Used for conditions that indicate a bug in the caller rather than something
    /// to recover from, such as indexing past the end of heap storage.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
