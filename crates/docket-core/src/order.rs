use std::cmp::Ordering;
use std::sync::Arc;

/// Numerically smallest value, i.e. the highest precedence.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// Numerically largest value, i.e. the lowest precedence.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/// Precedence reported by an ordered object.
///
/// Lower values mean higher precedence. `Unspecified` is resolved by the
/// comparator in use: [`ordered_first`] treats it as [`LOWEST_PRECEDENCE`],
/// [`ordered_last`] as [`HIGHEST_PRECEDENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precedence {
    Explicit(i32),
    #[default]
    Unspecified,
}

impl Precedence {
    pub fn highest() -> Self {
        Self::Explicit(HIGHEST_PRECEDENCE)
    }

    pub fn lowest() -> Self {
        Self::Explicit(LOWEST_PRECEDENCE)
    }

    pub fn value_or(self, default: i32) -> i32 {
        match self {
            Self::Explicit(value) => value,
            Self::Unspecified => default,
        }
    }

    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl From<i32> for Precedence {
    fn from(value: i32) -> Self {
        Self::Explicit(value)
    }
}

/// Anything that may report a precedence.
pub trait Ordered {
    fn precedence(&self) -> Precedence {
        Precedence::Unspecified
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn precedence(&self) -> Precedence {
        (**self).precedence()
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    fn precedence(&self) -> Precedence {
        (**self).precedence()
    }
}

impl<T: Ordered + ?Sized> Ordered for Arc<T> {
    fn precedence(&self) -> Precedence {
        (**self).precedence()
    }
}

/// Ordered objects first; unordered ones count as lowest precedence.
pub fn ordered_first<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    let a = a.precedence().value_or(LOWEST_PRECEDENCE);
    let b = b.precedence().value_or(LOWEST_PRECEDENCE);
    a.cmp(&b)
}

/// Reverse of [`ordered_first`]: unordered objects first, highest precedence last.
pub fn reversed_ordered_first<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    ordered_first(a, b).reverse()
}

/// Ordered objects last; unordered ones count as highest precedence.
pub fn ordered_last<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    let a = a.precedence().value_or(HIGHEST_PRECEDENCE);
    let b = b.precedence().value_or(HIGHEST_PRECEDENCE);
    a.cmp(&b)
}

/// Reverse of [`ordered_last`].
pub fn reversed_ordered_last<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    ordered_last(a, b).reverse()
}

/// Order plugins for application: lowest precedence first, highest precedence last.
///
/// The sort is stable, so plugins with equal precedence keep their encounter
/// order. Plugins without a precedence are applied before every explicitly
/// ranked plugin.
pub fn order_plugins<P: Ordered>(mut plugins: Vec<P>) -> Vec<P> {
    plugins.sort_by(reversed_ordered_first);
    plugins
}
