extern crate proptest;
use crate::DigitList;
use proptest::prelude::*;
pub fn any_digit_list(range: std::ops::Range<usize>) -> impl Strategy<Value = DigitList> {
    proptest::collection::vec(0u8..10, range).prop_map(DigitList::from_raw)
}
pub fn positive_digit_list(range: std::ops::Range<usize>) -> impl Strategy<Value = DigitList> {
    any_digit_list(range).prop_map(|num| {
        if num.is_zero() {
            DigitList::from_u64(1)
        } else {
            num
        }
    })
}
// Pairs (a, b) with a >= b.
pub fn ordered_pair(
    range: std::ops::Range<usize>,
) -> impl Strategy<Value = (DigitList, DigitList)> {
    (any_digit_list(range.clone()), any_digit_list(range))
        .prop_map(|(a, b)| if a >= b { (a, b) } else { (b, a) })
}
