//! Canonical decimal text of primitive numeric values.
//!
//! Integers are written as base-10 digits with an optional leading `-`.
//! Floating point values are written as the shortest decimal text that parses
//! back to the same value of the same precision (`1.5f32` is `"1.5"`, not
//! `"1.5000000"`). Formatting goes through a caller-provided buffer, so no
//! allocation takes place.

/// A primitive element type with a canonical textual form.
pub trait CanonicalText: Copy + Default + Send + Sync + 'static {
    /// Reusable formatting buffer for this element type.
    type Buffer: Send + 'static;

    /// Name of the element type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Creates a fresh formatting buffer.
    fn new_buffer() -> Self::Buffer;

    /// Formats `self` into `buf` and returns the resulting text.
    fn to_canonical_text(self, buf: &mut Self::Buffer) -> &str;
}

macro_rules! impl_integer_text {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl CanonicalText for $ty {
                type Buffer = itoa::Buffer;

                const TYPE_NAME: &'static str = $name;

                #[inline]
                fn new_buffer() -> itoa::Buffer {
                    itoa::Buffer::new()
                }

                #[inline]
                fn to_canonical_text(self, buf: &mut itoa::Buffer) -> &str {
                    buf.format(self)
                }
            }
        )*
    };
}

macro_rules! impl_float_text {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl CanonicalText for $ty {
                type Buffer = dtoa::Buffer;

                const TYPE_NAME: &'static str = $name;

                #[inline]
                fn new_buffer() -> dtoa::Buffer {
                    dtoa::Buffer::new()
                }

                #[inline]
                fn to_canonical_text(self, buf: &mut dtoa::Buffer) -> &str {
                    buf.format(self)
                }
            }
        )*
    };
}

impl_integer_text!(
    i8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
);

impl_float_text!(
    f32 => "float",
    f64 => "double",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn text<T: CanonicalText>(value: T) -> String {
        let mut buf = T::new_buffer();
        value.to_canonical_text(&mut buf).to_string()
    }

    #[test]
    fn test_integers() {
        assert_eq!(text(5i8), "5");
        assert_eq!(text(i8::MIN), "-128");
        assert_eq!(text(-300i16), "-300");
        assert_eq!(text(i32::MAX), "2147483647");
        assert_eq!(text(0i64), "0");
        assert_eq!(text(i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn test_floats_round_trip() {
        assert_eq!(text(1.5f32), "1.5");
        assert_eq!(text(-0.25f64), "-0.25");
        for value in [0.1f32, 3.4028235e38, 1.0e-7, 123.456, -7.0] {
            let s = text(value);
            assert_eq!(s.parse::<f32>().unwrap(), value, "{s}");
        }
        for value in [0.1f64, 1.0 / 3.0, 6.02214076e23] {
            let s = text(value);
            assert_eq!(s.parse::<f64>().unwrap(), value, "{s}");
        }
    }

    #[test]
    fn test_float_uses_own_precision() {
        // 0.1f32 widened to f64 is 0.10000000149011612.
        assert_eq!(text(0.1f32), "0.1");
    }

    #[test]
    fn test_buffer_reuse() {
        let mut buf = itoa::Buffer::new();
        assert_eq!(12i32.to_canonical_text(&mut buf), "12");
        assert_eq!((-4i32).to_canonical_text(&mut buf), "-4");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<i8 as CanonicalText>::TYPE_NAME, "byte");
        assert_eq!(<f32 as CanonicalText>::TYPE_NAME, "float");
    }
}
