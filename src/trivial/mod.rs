//! Arbitrary-precision base58 conversion. Slow, but simple enough to serve as
//! the oracle the fixed-width converters in [`crate::base58`] are checked
//! against.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_with_alphabet};
pub use encode::{encode, encode_with_alphabet};

#[cfg(test)]
mod tests {
    use crate::{alphabet::FLICKR, base58};
    use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

    #[test]
    fn fast_matches_trivial() {
        let mut rng = StdRng::seed_from_u64(0x58);
        for len in 0..=255 {
            for _ in 0..16 {
                let mut input = vec![0u8; len];
                rng.fill_bytes(&mut input);
                let zeros = rng.gen_range(0..=len.min(4));
                input[..zeros].fill(0);

                let encoded = super::encode(&input);
                assert_eq!(base58::encode(&input), encoded);
                assert_eq!(base58::encode_with_alphabet(&input, &FLICKR), super::encode_with_alphabet(&input, &FLICKR));

                if len > 0 {
                    assert_eq!(base58::decode(&encoded).ok(), super::decode(&encoded).ok());
                    assert_eq!(super::decode(&encoded), Ok(input));
                }
            }
        }
    }

    #[test]
    fn fast_matches_trivial_on_arbitrary_strings() {
        let mut rng = StdRng::seed_from_u64(0x3a);
        for len in 1..=64 {
            for _ in 0..16 {
                let input: Vec<u8> = (0..len).map(|_| FLICKR.encode_symbol(rng.gen_range(0..58))).collect();
                assert_eq!(base58::decode_with_alphabet(&input, &FLICKR).ok(), super::decode_with_alphabet(&input, &FLICKR).ok());
            }
        }
    }
}
