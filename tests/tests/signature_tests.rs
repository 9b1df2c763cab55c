//! Integration tests for the DSA signature scheme

use ffdsa::prelude::*;
use ffdsa::sign::dsa;
use ffdsa_tests::test_rng;
use rand::rngs::OsRng;

#[test]
fn test_dsa_signature() {
    let mut rng = OsRng;

    // Generate keypair (fresh domain parameters included)
    let keypair = Dsa160::keypair(&mut rng).unwrap();
    let public_key = Dsa160::public_key(&keypair);
    let secret_key = Dsa160::secret_key(&keypair);

    // Message to sign
    let message = b"Test message for DSA signature";

    // Sign the message
    let signature = Dsa160::sign(message, &secret_key).unwrap();

    // Verify the signature
    let result = Dsa160::verify(message, &signature, &public_key);
    assert!(result.is_ok());

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    let result = Dsa160::verify(modified_message, &signature, &public_key);
    assert!(result.is_err());
}

#[test]
fn test_hello_dsa_scenario() {
    let mut rng = test_rng();

    let params = DomainParameters::generate(&mut rng).unwrap();
    let (public_key, secret_key) = dsa::generate_keypair(&params, &mut rng).unwrap();

    let signature = dsa::sign(b"Hello, DSA!", &secret_key, &mut rng).unwrap();

    assert!(dsa::verify(b"Hello, DSA!", &signature, &public_key));
    assert!(!dsa::verify(b"Hello, DSA?", &signature, &public_key));
}

#[test]
fn test_signatures_transfer_between_rngs() {
    // Keys generated under one RNG must verify signatures produced with
    // another; no state is shared beyond the key material itself.
    let mut keygen_rng = test_rng();
    let params = DomainParameters::generate(&mut keygen_rng).unwrap();
    let (public_key, secret_key) = dsa::generate_keypair(&params, &mut keygen_rng).unwrap();

    let mut signing_rng = OsRng;
    let signature = dsa::sign(b"portable", &secret_key, &mut signing_rng).unwrap();
    assert!(dsa::verify(b"portable", &signature, &public_key));
}
