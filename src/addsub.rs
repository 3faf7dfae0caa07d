use crate::error::{DigitError, Result};
use crate::low_level::{add_digits, sub_digits};
use crate::DigitList;
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub fn add(a: &DigitList, b: &DigitList) -> DigitList {
    DigitList::from_raw(add_digits(&a.digits, &b.digits))
}

/// Computes `a - b`, failing with [`DigitError::Underflow`] when `a < b`.
pub fn subtract(a: &DigitList, b: &DigitList) -> Result<DigitList> {
    if a < b {
        return Err(DigitError::Underflow {
            minuend: a.to_string(),
            subtrahend: b.to_string(),
        });
    }
    Ok(DigitList::from_raw(sub_digits(&a.digits, &b.digits)))
}

fn sub_or_panic(a: &DigitList, b: &DigitList) -> DigitList {
    match subtract(a, b) {
        Ok(diff) => diff,
        Err(e) => panic!("{}", e),
    }
}

impl Add for DigitList {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        add(&self, &other)
    }
}

impl<'a> Add<&'a DigitList> for DigitList {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        add(&self, other)
    }
}

impl<'a> Add<DigitList> for &'a DigitList {
    type Output = DigitList;

    fn add(self, other: DigitList) -> DigitList {
        add(self, &other)
    }
}

impl<'a, 'b> Add<&'b DigitList> for &'a DigitList {
    type Output = DigitList;

    fn add(self, other: &'b DigitList) -> DigitList {
        add(self, other)
    }
}

impl AddAssign for DigitList {
    fn add_assign(&mut self, other: Self) {
        *self = add(self, &other);
    }
}

impl<'a> AddAssign<&'a DigitList> for DigitList {
    fn add_assign(&mut self, other: &'a Self) {
        *self = add(self, other);
    }
}

// The operators panic on underflow, like the unsigned primitives. Use `subtract` for a Result.
impl Sub for DigitList {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        sub_or_panic(&self, &other)
    }
}

impl<'a> Sub<&'a DigitList> for DigitList {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        sub_or_panic(&self, other)
    }
}

impl<'a> Sub<DigitList> for &'a DigitList {
    type Output = DigitList;

    fn sub(self, other: DigitList) -> DigitList {
        sub_or_panic(self, &other)
    }
}

impl<'a, 'b> Sub<&'b DigitList> for &'a DigitList {
    type Output = DigitList;

    fn sub(self, other: &'b DigitList) -> DigitList {
        sub_or_panic(self, other)
    }
}

impl SubAssign for DigitList {
    fn sub_assign(&mut self, other: Self) {
        *self = sub_or_panic(self, &other);
    }
}

impl<'a> SubAssign<&'a DigitList> for DigitList {
    fn sub_assign(&mut self, other: &'a Self) {
        *self = sub_or_panic(self, other);
    }
}
