use crate::DigitList;

/// Long multiplication, digit by digit. Quadratic; kept as the reference Karatsuba is checked
/// and benchmarked against.
pub fn schoolbook_mul(l: &DigitList, r: &DigitList) -> DigitList {
    // Little-endian accumulator: acc[i] holds the 10^i column.
    let mut acc = vec![0u32; l.len() + r.len()];
    for (i, &l_digit) in l.digits.iter().rev().enumerate() {
        let mut carry = 0;
        for (j, &r_digit) in r.digits.iter().rev().enumerate() {
            let column = acc[i + j] + l_digit as u32 * r_digit as u32 + carry;
            acc[i + j] = column % 10;
            carry = column / 10;
        }
        let mut k = i + r.len();
        while carry != 0 {
            let column = acc[k] + carry;
            acc[k] = column % 10;
            carry = column / 10;
            k += 1;
        }
    }
    let digits = acc.into_iter().rev().map(|d| d as u8).collect();
    DigitList::from_raw(digits)
}
