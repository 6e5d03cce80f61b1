//! Literal constructors for the collections.

/// Build a [`Sequence`](crate::Sequence) from a list of values.
///
/// ```
/// use bedrock_core::{Sequence, sequence};
///
/// assert_eq!(sequence![1, 2, 2], Sequence::of([1, 2, 2]));
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Sequence::of([$($value),+])
    };
}

/// Build a [`Set`](crate::Set) from a list of values, dropping duplicates.
///
/// ```
/// use bedrock_core::set;
///
/// assert_eq!(set![1, 2, 2].len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Set::of([$($value),+])
    };
}
