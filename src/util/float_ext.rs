pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// Performs a linear interpolation between `start` and `end` by `amount`.
    fn lerp(amount: Self, start: Self, end: Self) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn lerp(amount: Self, start: Self, end: Self) -> Self {
                start + (end - start) * amount
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);

#[cfg(test)]
mod tests {
    use super::FloatExt;

    #[test]
    fn epsilon_eq_and_lerp() {
        assert!(FloatExt::eq(0.1 + 0.2, 0.3_f64));
        assert!(!FloatExt::eq(0.3_f32, 0.31));
        assert_eq!(<f64 as FloatExt>::lerp(0.25, 2.0, 6.0), 3.0);
    }
}
