//! Integration tests for domain-parameter generation

use ffdsa::params::dsa::{Q_BIT_SIZE, VALIDATION_CERTAINTY};
use ffdsa::sign::dsa::DomainParameters;
use ffdsa_tests::test_rng;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

#[test]
fn generated_parameters_validate_at_high_certainty() {
    let mut rng = test_rng();
    let params = DomainParameters::generate(&mut rng).unwrap();
    params.validate(VALIDATION_CERTAINTY, &mut rng).unwrap();
}

#[test]
fn subgroup_order_divides_p_minus_one() {
    let mut rng = test_rng();
    let params = DomainParameters::generate(&mut rng).unwrap();

    assert_eq!(params.q.bits(), Q_BIT_SIZE);
    assert!(((&params.p - 1u32) % &params.q).is_zero());
    assert!(params.g > BigUint::one());
    assert!(params.p > params.q);
}
