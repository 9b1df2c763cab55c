//! Tests for Miller-Rabin primality testing and prime search

use super::*;
use crate::error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const ROUNDS: u32 = 20;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(42)
}

fn big(decimal: &str) -> BigUint {
    BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap()
}

#[test]
fn small_primes_pass() {
    let mut rng = rng();
    for p in [2u32, 3, 5, 7, 11, 13, 17, 19, 97, 7919] {
        assert!(
            is_probable_prime(&BigUint::from(p), ROUNDS, &mut rng),
            "{} should test prime",
            p
        );
    }
}

#[test]
fn small_composites_fail() {
    let mut rng = rng();
    for n in [0u32, 1, 4, 6, 9, 15, 21, 25, 27, 33, 35, 49, 100] {
        assert!(
            !is_probable_prime(&BigUint::from(n), ROUNDS, &mut rng),
            "{} should test composite",
            n
        );
    }
}

#[test]
fn carmichael_numbers_fail() {
    let mut rng = rng();
    // Fermat pseudoprimes to every coprime base; Miller-Rabin still
    // catches them.
    for n in [561u32, 1105, 1729, 2465, 2821, 6601, 8911, 41041] {
        assert!(
            !is_probable_prime(&BigUint::from(n), ROUNDS, &mut rng),
            "{} should test composite",
            n
        );
    }
}

#[test]
fn strong_pseudoprimes_fail_with_random_witnesses() {
    let mut rng = rng();
    // 2047 = 23 * 89 is a strong pseudoprime to base 2;
    // 3215031751 is one to bases 2, 3, 5 and 7.
    assert!(!is_probable_prime(&big("2047"), ROUNDS, &mut rng));
    assert!(!is_probable_prime(&big("3215031751"), ROUNDS, &mut rng));
}

#[test]
fn mersenne_primes_pass() {
    let mut rng = rng();
    for m in [
        "618970019642690137449562111",                 // 2^89 - 1
        "162259276829213363391578010288127",           // 2^107 - 1
        "170141183460469231731687303715884105727",     // 2^127 - 1
    ] {
        assert!(is_probable_prime(&big(m), ROUNDS, &mut rng));
    }
}

#[test]
fn product_of_two_primes_fails() {
    let mut rng = rng();
    let n = big("618970019642690137449562111") * big("162259276829213363391578010288127");
    assert!(!is_probable_prime(&n, ROUNDS, &mut rng));
}

#[test]
fn generated_prime_has_requested_size() {
    let mut rng = rng();
    let p = random_probable_prime(160, ROUNDS, &mut rng).unwrap();
    assert_eq!(p.bits(), 160);
    assert!(p.is_odd());
    assert!(is_probable_prime(&p, ROUNDS, &mut rng));
}

#[test]
fn two_bit_search_lands_on_three() {
    // The only odd candidates in [2, 3] collapse to 3.
    let mut rng = rng();
    let p = random_probable_prime(2, ROUNDS, &mut rng).unwrap();
    assert_eq!(p, BigUint::from(3u32));
}

#[test]
fn undersized_bit_lengths_are_rejected() {
    let mut rng = rng();
    for bits in [0usize, 1] {
        let result = random_probable_prime(bits, ROUNDS, &mut rng);
        assert!(matches!(result, Err(Error::Parameter { .. })));
    }
}
