use rand::RngCore;

/// Fresh 32-byte ed25519 seed from the thread-local RNG.
pub fn generate_seed() -> [u8; 32] {
    let mut rng = rand::rng();
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);
    seed
}
