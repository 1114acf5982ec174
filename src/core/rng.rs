//! Random sources for seeding
//!
//! Everything random in the network goes through one `Rng` owned by the
//! network, so a fixed seed reproduces a run exactly.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::error::SimError;

/// 64-bit seed from the OS (or the browser's `crypto.getRandomValues`).
pub fn entropy_seed() -> Result<u64, SimError> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
