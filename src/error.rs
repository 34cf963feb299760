use derive_more::Display;


/// Returned by [`OptionalValue::value`](crate::OptionalValue::value) on an empty instance.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "optional value is empty")]
pub struct NoValue;

impl std::error::Error for NoValue {}
