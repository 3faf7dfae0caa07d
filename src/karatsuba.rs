use crate::low_level::mul_digit;
use crate::split::split_zero_padded;
use crate::DigitList;
use std::ops::{Mul, MulAssign};

/// Multiplies two digit lists with Karatsuba's three-product recursion.
///
/// Each operand is split at the same place value `m = ceil(max_len / 2)`:
/// `x = a·10^m + b`, `y = c·10^m + d`. Then `x·y = ac·10^2m + (ad + bc)·10^m + bd`, where the
/// middle term comes from `(a + b)(c + d) - ac - bd`.
pub fn karatsuba_mul(x: &DigitList, y: &DigitList) -> DigitList {
    if x.is_zero() || y.is_zero() {
        return DigitList::zero();
    }
    match (x.len(), y.len()) {
        (1, 1) => return DigitList::from_u64(x.lsd() as u64 * y.lsd() as u64),
        (1, _) => return DigitList::from_raw(mul_digit(&y.digits, x.lsd())),
        (_, 1) => return DigitList::from_raw(mul_digit(&x.digits, y.lsd())),
        _ => {}
    }
    let max_len = std::cmp::max(x.len(), y.len());
    let split_len = (max_len + 1) / 2;
    tracing::trace!(
        x_len = x.len(),
        y_len = y.len(),
        split_len,
        "karatsuba step"
    );
    let (a, b) = split_zero_padded(x, max_len - split_len, max_len);
    let (c, d) = split_zero_padded(y, max_len - split_len, max_len);
    let s1 = karatsuba_mul(&a, &c);
    let s2 = karatsuba_mul(&b, &d);
    let s1xs2 = karatsuba_mul(&(a + b), &(c + d));
    debug_assert!(s1xs2 >= &s1 + &s2, "cross product smaller than its parts");
    let s3 = s1xs2 - &s1 - &s2;

    let mut high = s1;
    high.shift_digits(2 * split_len);
    let mut middle = s3;
    middle.shift_digits(split_len);
    high + &s2 + middle
}

impl<'a, 'b> Mul<&'b DigitList> for &'a DigitList {
    type Output = DigitList;

    fn mul(self, other: &'b DigitList) -> DigitList {
        karatsuba_mul(self, other)
    }
}

impl<'a> Mul<&'a DigitList> for DigitList {
    type Output = Self;

    fn mul(self, other: &'a Self) -> Self {
        karatsuba_mul(&self, other)
    }
}

impl<'a> Mul<DigitList> for &'a DigitList {
    type Output = DigitList;

    fn mul(self, other: DigitList) -> DigitList {
        karatsuba_mul(self, &other)
    }
}

impl Mul for DigitList {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        karatsuba_mul(&self, &other)
    }
}

impl<'a> MulAssign<&'a DigitList> for DigitList {
    fn mul_assign(&mut self, other: &'a Self) {
        *self = karatsuba_mul(self, other);
    }
}
