use crate::alphabet::{Alphabet, BITCOIN};
use num_bigint::BigUint;
use num_traits::Zero;

pub fn encode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> String {
    let input = input.as_ref();
    let radix = BigUint::from(58u32);
    let mut value = BigUint::from_bytes_be(input);
    let mut output = Vec::new();
    while !value.is_zero() {
        let remainder = &value % &radix;
        value /= &radix;
        let digit = remainder.to_u32_digits().first().copied().unwrap_or(0);
        output.push(alphabet.encode_symbol(digit as usize));
    }
    for _ in input.iter().take_while(|&&value| value == 0) {
        output.push(alphabet.zero());
    }
    output.iter().rev().map(|&character| character as char).collect()
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    encode_with_alphabet(input, &BITCOIN)
}
