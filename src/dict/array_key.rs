//! The key bound shared by every keyed result.

use std::borrow::Cow;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Types that may be used as keys of a [`Dict`](super::Dict).
///
/// Keys are restricted to integer-like and string-like values: they must be
/// hashable, comparable for equality, and cheap enough to clone that the
/// dictionary can keep one copy in its position index.
///
/// The trait is implemented for all primitive integers, `char`, the common
/// owned and shared string types, and shared references to any `ArrayKey`
/// (which is what borrowed keyed iteration produces).
///
/// # Examples
///
/// ```rust
/// use traverso::dict::ArrayKey;
///
/// fn assert_key<K: ArrayKey>() {}
///
/// assert_key::<u64>();
/// assert_key::<String>();
/// assert_key::<&str>();
/// assert_key::<&String>();
/// ```
pub trait ArrayKey: Hash + Eq + Clone {}

macro_rules! impl_array_key {
    ($($key:ty),+ $(,)?) => {
        $(impl ArrayKey for $key {})+
    };
}

impl_array_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String, Box<str>,
    Rc<str>, Arc<str>,
);

impl ArrayKey for &str {}

impl ArrayKey for Cow<'_, str> {}

impl<K: ArrayKey> ArrayKey for &K {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_key<K: ArrayKey>() {}

    #[test]
    fn integer_and_string_types_are_keys() {
        assert_key::<i8>();
        assert_key::<u128>();
        assert_key::<usize>();
        assert_key::<char>();
        assert_key::<String>();
        assert_key::<Box<str>>();
        assert_key::<Rc<str>>();
        assert_key::<Arc<str>>();
        assert_key::<&'static str>();
        assert_key::<Cow<'static, str>>();
    }

    #[test]
    fn references_to_keys_are_keys() {
        assert_key::<&i32>();
        assert_key::<&String>();
        assert_key::<&&str>();
    }
}
