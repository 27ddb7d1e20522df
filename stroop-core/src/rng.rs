//! Deterministic seed hierarchy for question generation.
//!
//! A master seed is expanded into one sub-seed per `(player, session_index)`
//! via BLAKE3. Derivation is hash-based, so the same master seed replays the
//! same question sequence for a session no matter which sessions were
//! generated before it.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Sub-seed for one session of one player.
    pub fn sub_seed(&self, player: &str, session_index: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(player.as_bytes());
        // Separator keeps ("ab", 1) and ("a", ...) from sharing a prefix.
        hasher.update(&[0]);
        hasher.update(&session_index.to_le_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    pub fn rng_for(&self, player: &str, session_index: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(player, session_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn sub_seeds_are_deterministic() {
        let seeds = SeedHierarchy::new(42);
        assert_eq!(seeds.sub_seed("StroopKing", 0), seeds.sub_seed("StroopKing", 0));
    }

    #[test]
    fn different_players_different_seeds() {
        let seeds = SeedHierarchy::new(42);
        assert_ne!(seeds.sub_seed("StroopKing", 0), seeds.sub_seed("ColorNinja", 0));
    }

    #[test]
    fn different_sessions_different_seeds() {
        let seeds = SeedHierarchy::new(42);
        assert_ne!(seeds.sub_seed("StroopKing", 0), seeds.sub_seed("StroopKing", 1));
    }

    #[test]
    fn derivation_order_independent() {
        let seeds = SeedHierarchy::new(7);
        let a_first = seeds.sub_seed("a", 3);
        let _ = seeds.sub_seed("b", 3);
        let a_second = seeds.sub_seed("a", 3);
        assert_eq!(a_first, a_second);
    }

    #[test]
    fn different_master_seeds_different_output() {
        assert_ne!(
            SeedHierarchy::new(42).sub_seed("p", 0),
            SeedHierarchy::new(43).sub_seed("p", 0)
        );
    }

    #[test]
    fn rng_streams_replay() {
        let seeds = SeedHierarchy::new(1);
        let mut first = seeds.rng_for("p", 0);
        let mut second = seeds.rng_for("p", 0);
        let a: Vec<u32> = (0..5).map(|_| first.gen()).collect();
        let b: Vec<u32> = (0..5).map(|_| second.gen()).collect();
        assert_eq!(a, b);
    }
}
