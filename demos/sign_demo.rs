//! End-to-end demonstration of the DSA scheme: generate domain
//! parameters and a key pair, sign a fixed message, and verify the
//! signature.

use ffdsa::params::dsa::VALIDATION_CERTAINTY;
use ffdsa::sign::dsa::{self, DomainParameters};
use rand::rngs::OsRng;

fn main() -> ffdsa::api::Result<()> {
    // One OS-seeded generator for the whole run, threaded through every
    // drawing operation.
    let mut rng = OsRng;

    let params = DomainParameters::generate(&mut rng)?;
    params.validate(VALIDATION_CERTAINTY, &mut rng)?;

    println!("Generated p: {}", params.p);
    println!("Generated q: {}", params.q);

    let (public_key, secret_key) = dsa::generate_keypair(&params, &mut rng)?;

    let message = "Hello, DSA!";
    let signature = dsa::sign(message.as_bytes(), &secret_key, &mut rng)?;
    let valid = dsa::verify(message.as_bytes(), &signature, &public_key);

    println!("Original Message: {}", message);
    println!("Is Signature Valid? {}", valid);

    Ok(())
}
