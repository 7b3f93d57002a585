//! Extensions for numbers that are not present in the stable standard library.

pub(crate) trait NumExt {
    /// Division with rounding up.
    fn div_ceil(self, other: Self) -> Self;

    /// Division with rounding down.
    ///
    /// Note this is different from truncating, which is rounding toward zero.
    fn div_floor(self, other: Self) -> Self;
}

impl NumExt for i64 {
    fn div_ceil(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other > 0) || (r < 0 && other < 0) {
            d + 1
        } else {
            d
        }
    }

    fn div_floor(self, other: Self) -> Self {
        let d = self / other;
        let r = self % other;
        if (r > 0 && other < 0) || (r < 0 && other > 0) {
            d - 1
        } else {
            d
        }
    }
}

/// Stepping to neighbouring representable floats.
pub(crate) trait FloatExt {
    /// The smallest float strictly larger than `self`.
    fn successor(self) -> Self;
}

impl FloatExt for f64 {
    fn successor(self) -> Self {
        if self.is_nan() || self == f64::INFINITY {
            return self;
        }
        if self == 0.0 {
            return f64::from_bits(1);
        }

        let bits = self.to_bits();
        if self > 0.0 {
            f64::from_bits(bits + 1)
        } else {
            f64::from_bits(bits - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FloatExt;
    use super::NumExt;

    #[test]
    fn division_rounds_towards_the_requested_side() {
        assert_eq!(2, <i64 as NumExt>::div_ceil(3, 2));
        assert_eq!(1, <i64 as NumExt>::div_floor(3, 2));
        assert_eq!(-1, <i64 as NumExt>::div_ceil(-3, 2));
        assert_eq!(-2, <i64 as NumExt>::div_floor(-3, 2));
        assert_eq!(-1, <i64 as NumExt>::div_ceil(3, -2));
        assert_eq!(-2, <i64 as NumExt>::div_floor(3, -2));
    }

    #[test]
    fn successor_is_strictly_larger_and_adjacent() {
        for value in [-1.5, -0.0, 0.0, 1.0, 1e300] {
            let next = value.successor();
            assert!(next > value);

            let midpoint = value / 2.0 + next / 2.0;
            assert!(midpoint == value || midpoint == next);
        }
    }
}
