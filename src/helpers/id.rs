//! Short random identifiers.
//!
//! Ids are the base-36 digits of a random fraction. They are fine for
//! labelling things in logs and reports but are not unique and not secure.
use rand::Rng;

/// Number of characters in a generated id.
pub const ID_LEN: usize = 9;

const RADIX: u32 = 36;

/// Generates a short lowercase alphanumeric id from the thread-local RNG.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Generates an id from a caller-supplied RNG.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: f64 = rng.gen();
    fraction_to_base36(value, ID_LEN)
}

/// Writes the first `digits` base-36 digits after the radix point of `value`.
///
/// Only the fractional part is used (`-0.25` reads as `0.75`). The output is
/// zero-padded once the expansion terminates, and non-finite input yields zeros.
pub fn fraction_to_base36(value: f64, digits: usize) -> String {
    let mut frac = if value.is_finite() {
        value.rem_euclid(1.0)
    } else {
        0.0
    };

    let mut out = String::with_capacity(digits);
    for _ in 0..digits {
        frac *= RADIX as f64;
        let digit = (frac.floor() as u32).min(RADIX - 1);
        frac -= digit as f64;
        // digit < RADIX, so from_digit always succeeds.
        out.push(std::char::from_digit(digit, RADIX).unwrap_or('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_base36(id: &str) -> bool {
        id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[test]
    fn ids_have_fixed_length_and_alphabet() {
        for _ in 0..500 {
            let id = generate_id();
            assert_eq!(id.len(), ID_LEN, "bad length for {id}");
            assert!(is_base36(&id), "bad alphabet in {id}");
        }
    }

    #[test]
    fn ids_rarely_collide() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_id()).collect();
        assert!(ids.len() >= 999, "too many collisions: {}", ids.len());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_id_with(&mut a), generate_id_with(&mut b));
        assert_ne!(generate_id_with(&mut a), generate_id_with(&mut StdRng::seed_from_u64(7)));
    }

    #[test]
    fn base36_expansion() {
        assert_eq!(fraction_to_base36(0.0, 4), "0000");
        assert_eq!(fraction_to_base36(0.5, 3), "i00");
        assert_eq!(fraction_to_base36(0.25, 3), "900");
        assert_eq!(fraction_to_base36(0.75, 2), "r0");
        assert_eq!(fraction_to_base36(-0.25, 2), "r0");
        assert_eq!(fraction_to_base36(3.5, 1), "i");
        assert_eq!(fraction_to_base36(f64::NAN, 3), "000");
        assert_eq!(fraction_to_base36(0.999_999_999_999, ID_LEN).len(), ID_LEN);
    }
}
