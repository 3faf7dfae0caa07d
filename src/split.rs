use crate::DigitList;

/// Splits `value` after its first `split_index` digits, counting from the most significant end.
///
/// Returns `(high, low)`. Either side may come out empty, in which case it is zero, so
/// `split(12345, 0)` is `(0, 12345)` and `split(12345, 9)` is `(12345, 0)`.
pub fn split(value: &DigitList, split_index: usize) -> (DigitList, DigitList) {
    let at = std::cmp::min(split_index, value.digits.len());
    let (high, low) = value.digits.split_at(at);
    (
        DigitList::from_raw(high.to_vec()),
        DigitList::from_raw(low.to_vec()),
    )
}

/// Like [`split`], but as if `value` were first left-padded with zeros to `total_digits` digits.
///
/// This lets two operands of different lengths be split at the same place value.
/// `total_digits` must be at least `value.len()`. Debug builds assert this; release builds apply
/// no padding when it is shorter.
pub fn split_zero_padded(
    value: &DigitList,
    split_index: usize,
    total_digits: usize,
) -> (DigitList, DigitList) {
    debug_assert!(
        total_digits >= value.len(),
        "cannot pad a {}-digit number to {} digits",
        value.len(),
        total_digits
    );
    let padding = total_digits.saturating_sub(value.len());
    split(value, split_index.saturating_sub(padding))
}
