//! The element trait shared by every engine.

use std::fmt;

/// An ordered numeric value the engines can sort.
///
/// The algorithm bodies only use `<`, `>` and `<=`, so a partial order is
/// enough for finite values. NaN is not supported: a NaN element makes
/// every comparison false and the resulting order is unspecified (though
/// every engine still terminates).
pub trait SortValue: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// A stable 64-bit image of the value, used for trace hashing.
    ///
    /// Integers are sign-extended; floats use their IEEE-754 bit pattern,
    /// so `0.0` and `-0.0` hash differently.
    fn hash_bits(self) -> u64;
}

macro_rules! impl_sort_value_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortValue for $t {
                #[inline]
                fn hash_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_sort_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl SortValue for f32 {
    #[inline]
    fn hash_bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl SortValue for f64 {
    #[inline]
    fn hash_bits(self) -> u64 {
        self.to_bits()
    }
}
