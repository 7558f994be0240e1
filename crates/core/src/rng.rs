//! RNG module - injectable random sources and uniform piece selection
//!
//! The game never reaches for a global RNG. Every [`GameState`] owns a
//! [`RandomSource`] and asks it for an index into the 7-entry shape table, so
//! tests can script exact spawn orders.
//!
//! Provided sources:
//! - [`SimpleRng`]: seeded LCG, deterministic across platforms
//! - [`EntropyRandom`]: `rand`'s `StdRng`, seeded from the operating system
//! - [`ScriptedRandom`]: replays a fixed list of values
//!
//! [`GameState`]: crate::GameState

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::PieceKind;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `0..n`. `n` is never zero.
    fn next_in_range(&mut self, n: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, n: u32) -> u32 {
        (**self).next_in_range(n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, n: u32) -> u32 {
        (**self).next_in_range(n)
    }
}

/// Pick a piece kind uniformly from the shape table.
pub fn random_kind(rng: &mut impl RandomSource) -> PieceKind {
    let n = PieceKind::ALL.len() as u32;
    let idx = rng.next_in_range(n) as usize;
    debug_assert!(idx < PieceKind::ALL.len(), "random source returned {idx} for range {n}");
    PieceKind::ALL[idx % PieceKind::ALL.len()]
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state; feeding it back into `new` resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_in_range(&mut self, n: u32) -> u32 {
        // The low bits of an LCG are weak, take the high half.
        (self.next_u32() >> 16) % n
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// OS-seeded source for normal play.
#[derive(Debug, Clone)]
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible variant, handy for benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are reduced modulo the requested range.
///
/// ```
/// use modern_tetris_core::rng::{random_kind, ScriptedRandom};
/// use modern_tetris_core::types::PieceKind;
///
/// let mut rng = ScriptedRandom::new(vec![1, 0]);
/// assert_eq!(random_kind(&mut rng), PieceKind::O);
/// assert_eq!(random_kind(&mut rng), PieceKind::I);
/// assert_eq!(random_kind(&mut rng), PieceKind::O);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRandom {
    /// An empty script always yields 0.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Script that spawns exactly the given kinds, in order, then repeats.
    pub fn kinds(kinds: &[PieceKind]) -> Self {
        Self::new(kinds.iter().map(|k| k.index() as u32).collect())
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, n: u32) -> u32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(99);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_simple_rng_stays_in_range_and_covers_all_kinds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let v = rng.next_in_range(7);
            assert!(v < 7);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "{:?}", seen);
    }

    #[test]
    fn test_entropy_random_in_range() {
        let mut rng = EntropyRandom::from_seed(3);
        for _ in 0..200 {
            assert!(rng.next_in_range(7) < 7);
        }
    }

    #[test]
    fn test_scripted_random_replays_and_cycles() {
        let mut rng = ScriptedRandom::new(vec![2, 9]);
        assert_eq!(rng.next_in_range(7), 2);
        assert_eq!(rng.next_in_range(7), 2); // 9 % 7
        assert_eq!(rng.next_in_range(7), 2);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_kinds() {
        let mut rng = ScriptedRandom::kinds(&[PieceKind::Z, PieceKind::T]);
        assert_eq!(random_kind(&mut rng), PieceKind::Z);
        assert_eq!(random_kind(&mut rng), PieceKind::T);
        assert_eq!(random_kind(&mut rng), PieceKind::Z);
    }

    #[test]
    fn test_boxed_source() {
        let mut rng: Box<dyn RandomSource> = Box::new(ScriptedRandom::new(vec![4]));
        assert_eq!(random_kind(&mut rng), PieceKind::J);
    }
}
