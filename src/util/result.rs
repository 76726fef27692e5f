use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value, or panics with the error's [`Display`](std::fmt::Display) message. Used
    /// by the convenience paths (such as indexing with `[]`) that mirror a fallible method, so
    /// that both report the same message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
