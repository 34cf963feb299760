use crate::error::NoValue;


/// A plain value type that can sit inside an [`OptionalValue`].
///
/// Implementors must be `Copy` and have a canonical `Default` (zero, `false`, epoch).
/// There is no blanket impl: types that already encode absence, like `Option<U>`,
/// are left out so presence always means exactly one thing.
///
/// ```compile_fail
/// let _ = optval::OptionalValue::new(Some(1i32));
/// ```
pub trait ValueLike: Copy + Default {
    #[inline(always)]
    fn some(self) -> OptionalValue<Self> {
        OptionalValue::new(self)
    }
}

macro_rules! value_like {
    ($($ty:ty),+ $(,)?) => {
        $(impl ValueLike for $ty {})+
    };
}

value_like!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char,
);


/// Zero or one value of a [`ValueLike`] type.
///
/// Immutable once built. Reading an empty instance through
/// [`value_or_default`](Self::value_or_default) yields `T::default()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalValue<T: ValueLike> {
    slot: Slot<T>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Empty,
    Present(T),
}

impl<T: ValueLike> OptionalValue<T> {
    pub const NONE: OptionalValue<T> = OptionalValue { slot: Slot::Empty };

    #[inline(always)]
    pub const fn empty() -> Self {
        Self::NONE
    }

    #[inline(always)]
    pub const fn new(value: T) -> Self {
        OptionalValue { slot: Slot::Present(value) }
    }

    #[inline(always)]
    pub fn has_value(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// The stored value, or `T::default()` when empty. Never fails.
    #[inline(always)]
    pub fn value_or_default(self) -> T {
        self.value_or(T::default())
    }

    #[inline(always)]
    pub fn value_or(self, fallback: T) -> T {
        match self.slot {
            Slot::Present(value) => value,
            Slot::Empty          => fallback,
        }
    }

    /// Strict read. Callers that treat absence as an error use this
    /// instead of checking [`has_value`](Self::has_value) first.
    #[inline(always)]
    pub fn value(self) -> Result<T, NoValue> {
        self.to_option().ok_or(NoValue)
    }

    #[inline(always)]
    pub fn to_option(self) -> Option<T> {
        match self.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty          => None,
        }
    }
}


impl<T: ValueLike> Default for OptionalValue<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::NONE
    }
}


impl<T: ValueLike> From<Option<T>> for OptionalValue<T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        if let Some(value) = value {
            OptionalValue::new(value)
        }
        else {
            OptionalValue::NONE
        }
    }
}

impl<T: ValueLike> From<OptionalValue<T>> for Option<T> {
    #[inline(always)]
    fn from(value: OptionalValue<T>) -> Self {
        value.to_option()
    }
}


impl<T: ValueLike + core::fmt::Debug> core::fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Slot::Present(value) = &self.slot {
            write!(f, "Some({:?})", value)
        }
        else { write!(f, "None") }
    }
}

impl<T: ValueLike + core::fmt::Display> core::fmt::Display for OptionalValue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Slot::Present(value) = &self.slot {
            write!(f, "{}", value)
        }
        else { write!(f, "<none>") }
    }
}


#[cfg(feature = "chrono")]
value_like!(
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
);


#[cfg(feature = "serde")]
impl<T: ValueLike + serde::Serialize> serde::Serialize for OptionalValue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_option(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: ValueLike + serde::Deserialize<'de>> serde::Deserialize<'de> for OptionalValue<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(OptionalValue::from)
    }
}
