//! Deterministic dice for combat rolls.
//!
//! A roll is a pure function of its seed, so replaying an encounter with the
//! same configuration seed reproduces every flee attempt exactly.

/// RNG oracle: maps a seed to a pseudo-random value.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Percentile roll in `1..=100`.
    fn roll_percent(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }
}

/// PCG-XSH-RR generator evaluated as a single step from the seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        xorshifted.rotate_right((state >> 59) as u32)
    }
}

/// Mixes the encounter seed with the roll's coordinates.
///
/// `context` separates independent rolls taken on the same turn by the same
/// combatant.
pub fn compute_seed(base: u64, turn: u64, combatant: u32, context: u32) -> u64 {
    let mut hash = base;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(combatant).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
