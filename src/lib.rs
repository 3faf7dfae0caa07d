//! Arbitrary-precision non-negative integers stored as base-10 digit lists, with Karatsuba
//! multiplication.
//!
//! ```
//! use digitlist::DigitList;
//!
//! let a = DigitList::from_u64(1234);
//! let b: DigitList = "5678".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "7006652");
//! ```
#[cfg(test)]
extern crate proptest;

pub mod addsub;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod schoolbook_mul;
pub mod split;
#[cfg(test)]
mod test_utils;

pub use addsub::{add, subtract};
pub use error::{DigitError, Result};
pub use karatsuba::karatsuba_mul;
pub use schoolbook_mul::schoolbook_mul;
pub use split::{split, split_zero_padded};

use low_level::strip_leading_zeros;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::str::FromStr;

/// A non-negative integer as a list of decimal digits, most significant first.
///
/// The list is never empty and never has leading zeros; zero is `[0]`.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct DigitList {
    digits: Vec<u8>,
}
impl std::fmt::Debug for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitList({})", self)
    }
}
impl std::fmt::Display for DigitList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits.iter().map(|&d| (b'0' + d) as char).collect();
        f.pad(&s)
    }
}

impl PartialOrd for DigitList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for DigitList {
    // Both sides are normalized, so more digits means a bigger number.
    fn cmp(&self, other: &Self) -> Ordering {
        let len_cmp = self.digits.len().cmp(&other.digits.len());
        if len_cmp != Ordering::Equal {
            return len_cmp;
        }
        for (s, o) in self.digits.iter().zip(other.digits.iter()) {
            let digit_cmp = s.cmp(o);
            if digit_cmp != Ordering::Equal {
                return digit_cmp;
            }
        }
        Ordering::Equal
    }
}

impl DigitList {
    pub fn zero() -> Self {
        DigitList { digits: vec![0] }
    }
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    // Builds from digits already known to be in 0..=9, trimming leading zeros.
    pub(crate) fn from_raw(mut digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        strip_leading_zeros(&mut digits);
        DigitList { digits }
    }
    fn normalize_in_place(&mut self) {
        strip_leading_zeros(&mut self.digits);
    }

    pub fn from_u64(mut x: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push((x % 10) as u8);
            x /= 10;
            if x == 0 {
                break;
            }
        }
        digits.reverse();
        DigitList { digits }
    }

    /// Validates and normalizes an explicit digit sequence.
    ///
    /// Leading zeros are dropped rather than rejected, so `[0, 0, 1, 2, 3]` is `123`.
    pub fn from_digits(digits: &[u32]) -> Result<Self> {
        if digits.is_empty() {
            return Err(DigitError::EmptyList);
        }
        let digits = digits
            .iter()
            .map(|&d| checked_digit(d))
            .collect::<Result<Vec<u8>>>()?;
        Ok(DigitList::from_raw(digits))
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digit `i` places above the ones place. Past the most significant digit this is 0.
    pub fn digit_at(&self, i: usize) -> u8 {
        low_level::digit_from_low(&self.digits, i)
    }

    /// Digit at position `i` counting from the most significant digit.
    pub fn get(&self, i: usize) -> Result<u8> {
        self.digits
            .get(i)
            .copied()
            .ok_or(DigitError::IndexOutOfRange {
                index: i,
                len: self.digits.len(),
            })
    }

    /// Overwrites the digit at position `i` counting from the most significant digit.
    ///
    /// Writing a zero over the leading digit shortens the number.
    pub fn set(&mut self, i: usize, digit: u32) -> Result<()> {
        let len = self.digits.len();
        let digit = checked_digit(digit)?;
        let slot = self
            .digits
            .get_mut(i)
            .ok_or(DigitError::IndexOutOfRange { index: i, len })?;
        *slot = digit;
        self.normalize_in_place();
        Ok(())
    }

    pub fn msd(&self) -> u8 {
        self.digits[0]
    }
    pub fn lsd(&self) -> u8 {
        self.digits[self.digits.len() - 1]
    }

    /// Appends `digit` below the ones place, i.e. computes `self * 10 + digit`.
    pub fn push_digit(&mut self, digit: u32) -> Result<()> {
        let digit = checked_digit(digit)?;
        self.digits.push(digit);
        self.normalize_in_place();
        Ok(())
    }

    // Multiplies by 10^count. Zero stays [0].
    pub(crate) fn shift_digits(&mut self, count: usize) {
        if !self.is_zero() {
            self.digits.resize(self.digits.len() + count, 0);
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.digits.iter().try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(d as u64))
                .ok_or_else(|| DigitError::Overflow(self.to_string()))
        })
    }

    pub fn checked_sub(&self, other: &DigitList) -> Result<DigitList> {
        subtract(self, other)
    }
}

fn checked_digit(d: u32) -> Result<u8> {
    if d <= 9 {
        Ok(d as u8)
    } else {
        Err(DigitError::InvalidDigit(d.to_string()))
    }
}

impl From<u64> for DigitList {
    fn from(x: u64) -> Self {
        DigitList::from_u64(x)
    }
}

impl TryFrom<&DigitList> for u64 {
    type Error = DigitError;

    fn try_from(x: &DigitList) -> Result<u64> {
        x.to_u64()
    }
}

impl FromStr for DigitList {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(DigitError::EmptyList);
        }
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| DigitError::InvalidDigit(c.to_string()))
            })
            .collect::<Result<Vec<u8>>>()
            .map_err(|e| {
                tracing::debug!(input = s, error = %e, "rejected decimal string");
                e
            })?;
        Ok(DigitList::from_raw(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    fn digits(ds: &[u32]) -> DigitList {
        DigitList::from_digits(ds).unwrap()
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        assert_eq!(digits(&[0, 0, 0, 1, 2, 3]), digits(&[1, 2, 3]));
        assert_eq!(digits(&[0, 0, 0, 1, 2, 3]).len(), 3);
        assert_eq!(digits(&[0, 0, 0, 0, 0]), DigitList::zero());
        assert_eq!(digits(&[0]).digits(), &[0]);
        assert_eq!(digits(&[0, 0, 1, 2, 3]).to_string(), "123");
    }
    #[test]
    fn test_from_digits_errors() {
        assert_eq!(DigitList::from_digits(&[]), Err(DigitError::EmptyList));
        assert_eq!(
            DigitList::from_digits(&[1, 10, 3]),
            Err(DigitError::InvalidDigit("10".to_string()))
        );
        let err = DigitList::from_digits(&[4, 2, 77]).unwrap_err();
        assert!(err.to_string().contains("77"));
    }
    #[test]
    fn test_from_u64() {
        assert_eq!(DigitList::from_u64(0).digits(), &[0]);
        assert_eq!(DigitList::from_u64(61587), digits(&[6, 1, 5, 8, 7]));
        assert_ne!(DigitList::from_u64(61587), digits(&[8, 6, 7, 5, 3]));
        assert_eq!(DigitList::from_u64(u64::MAX).to_string(), u64::MAX.to_string());
    }
    #[test]
    fn test_from_str() {
        let nsl: DigitList = "8675309".parse().unwrap();
        assert_eq!(nsl, digits(&[8, 6, 7, 5, 3, 0, 9]));
        assert_eq!("000".parse::<DigitList>(), Ok(DigitList::zero()));
        assert_eq!("".parse::<DigitList>(), Err(DigitError::EmptyList));
        assert_eq!(
            "12a4".parse::<DigitList>(),
            Err(DigitError::InvalidDigit("a".to_string()))
        );
        assert!("-12".parse::<DigitList>().is_err());
        assert!(" 12".parse::<DigitList>().is_err());
    }
    #[test]
    fn test_numeric_not_lexicographic() {
        let short = digits(&[9, 9, 9, 9]);
        let long = digits(&[4, 9, 9, 9, 9]);
        assert!(short < long);
        assert!(long > short);
        assert_eq!(short.cmp(&short.clone()), Ordering::Equal);
        assert!(DigitList::from_u64(1234) < DigitList::from_u64(1243));
        assert!(digits(&[0, 0, 1, 2]) < DigitList::from_u64(13));
    }
    #[test]
    fn test_accessors() {
        let x = DigitList::from_u64(12345);
        assert_eq!(x.len(), 5);
        assert_eq!(x.msd(), 1);
        assert_eq!(x.lsd(), 5);
        assert_eq!(x.digit_at(0), 5);
        assert_eq!(x.digit_at(4), 1);
        assert_eq!(x.digit_at(5), 0);
        assert_eq!(x.digit_at(1000), 0);
        assert_eq!(x.get(0), Ok(1));
        assert_eq!(x.get(4), Ok(5));
        assert_eq!(
            x.get(5),
            Err(DigitError::IndexOutOfRange { index: 5, len: 5 })
        );
        let zero = DigitList::zero();
        assert_eq!((zero.msd(), zero.lsd()), (0, 0));
    }
    #[test]
    fn test_set() {
        let mut x = DigitList::from_u64(12345);
        x.set(4, 9).unwrap();
        assert_eq!(x, DigitList::from_u64(12349));
        assert_eq!(
            x.set(5, 1),
            Err(DigitError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(x.set(1, 10), Err(DigitError::InvalidDigit("10".to_string())));
        assert_eq!(x, DigitList::from_u64(12349));
        x.set(0, 0).unwrap();
        assert_eq!(x, DigitList::from_u64(2349));
        assert_eq!(x.len(), 4);
    }
    #[test]
    fn test_push_digit() {
        let mut x = DigitList::zero();
        x.push_digit(0).unwrap();
        assert_eq!(x, DigitList::zero());
        for d in 1..=5 {
            x.push_digit(d).unwrap();
        }
        assert_eq!(x, DigitList::from_u64(12345));
        assert_eq!(x.push_digit(12), Err(DigitError::InvalidDigit("12".to_string())));
        assert_eq!(x, DigitList::from_u64(12345));
    }
    #[test]
    fn test_shift_digits() {
        let mut x = DigitList::from_u64(42);
        x.shift_digits(3);
        assert_eq!(x, DigitList::from_u64(42000));
        let mut zero = DigitList::zero();
        zero.shift_digits(3);
        assert_eq!(zero.digits(), &[0]);
    }
    #[test]
    fn test_clone_is_independent() {
        let x = DigitList::from_u64(123);
        let mut y = x.clone();
        y.set(2, 9).unwrap();
        assert_eq!(x, DigitList::from_u64(123));
        assert_eq!(y, DigitList::from_u64(129));
        assert_ne!(x.digits().as_ptr(), y.digits().as_ptr());
    }
    #[test]
    fn test_to_u64_overflow() {
        let max = DigitList::from_u64(u64::MAX);
        assert_eq!(max.to_u64(), Ok(u64::MAX));
        let too_big: DigitList = "18446744073709551616".parse().unwrap();
        assert_eq!(
            too_big.to_u64(),
            Err(DigitError::Overflow("18446744073709551616".to_string()))
        );
        assert!(u64::try_from(&too_big).is_err());
    }
    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", DigitList::from_u64(907)), "DigitList(907)");
    }
    proptest! {
        #[test]
        fn test_round_trip(n in any::<u64>()) {
            let x = DigitList::from_u64(n);
            assert_eq!(x.to_u64(), Ok(n));
            assert_eq!(x.to_string(), n.to_string());
            assert_eq!(x.to_string().parse::<DigitList>(), Ok(x.clone()));
        }
    }
    proptest! {
        #[test]
        fn test_normalization_idempotent(raw in proptest::collection::vec(0u32..10, 1..40)) {
            let x = DigitList::from_digits(&raw).unwrap();
            let extracted: Vec<u32> = x.digits().iter().map(|&d| d as u32).collect();
            let y = DigitList::from_digits(&extracted).unwrap();
            assert_eq!(&x, &y);
            assert!(x.msd() != 0 || x.len() == 1);
        }
    }
    proptest! {
        #[test]
        fn test_cmp_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            let (a_big, b_big) = (DigitList::from_u64(a), DigitList::from_u64(b));
            assert_eq!(a_big.cmp(&b_big), a.cmp(&b));
            assert_eq!(a_big == b_big, a == b);
        }
    }
    proptest! {
        #[test]
        fn test_cmp_antisymmetric(a in any_digit_list(1..30), b in any_digit_list(1..30)) {
            assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}
