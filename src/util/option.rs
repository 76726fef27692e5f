pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Using it
    /// documents that None would mean an internal invariant has already been broken, rather than
    /// being a condition callers can trigger.
    ///
    /// No panics annotation is used here, to allow callers to pass the clippy lint. A panic from
    /// this method is always a bug in this crate.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("internal invariant broken"),
        }
    }
}
