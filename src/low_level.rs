// Digit slices here are big-endian (most significant first), matching DigitList storage. Results
// may carry leading zeros; callers normalize.

// Reads digit `i` counting from the least significant end, with zeros past the top.
pub fn digit_from_low(digits: &[u8], i: usize) -> u8 {
    if i < digits.len() {
        digits[digits.len() - 1 - i]
    } else {
        0
    }
}

pub fn add_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = std::cmp::max(a.len(), b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0;
    for i in 0..len {
        let sum = digit_from_low(a, i) + digit_from_low(b, i) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry != 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

// Precondition: a >= b numerically
pub fn sub_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut target = a.to_vec();
    let mut out = Vec::with_capacity(target.len());
    for i in (0..target.len()).rev() {
        let mut diff = target[i] as i8 - digit_from_low(b, target.len() - 1 - i) as i8;
        if diff < 0 {
            borrow_from(&mut target[..i]);
            diff += 10;
        }
        out.push(diff as u8);
    }
    out.reverse();
    out
}

// Takes one from the lowest digit of `digits`, rippling through zeros.
// Precondition: some digit of `digits` is nonzero.
fn borrow_from(digits: &mut [u8]) {
    for digit in digits.iter_mut().rev() {
        if *digit == 0 {
            *digit = 9;
        } else {
            *digit -= 1;
            return;
        }
    }
    debug_assert!(false, "borrow ran past the most significant digit");
}

pub fn mul_digit(digits: &[u8], d: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0;
    for &digit in digits.iter().rev() {
        let prod = digit * d + carry;
        out.push(prod % 10);
        carry = prod / 10;
    }
    if carry != 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

pub fn strip_leading_zeros(digits: &mut Vec<u8>) {
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let zeros = std::cmp::min(zeros, digits.len().saturating_sub(1));
    digits.drain(..zeros);
    if digits.is_empty() {
        digits.push(0);
    }
}
