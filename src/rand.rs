use rand_core::{Error, RngCore, SeedableRng};

use crate::rng::LogSquare;

// Adapter into the rand ecosystem. The traits are infallible, so a diverged
// orbit panics here; callers that need to observe divergence use the
// inherent accessors instead.

impl RngCore for LogSquare {
    fn next_u32(&mut self) -> u32 {
        self.next_i64(1i64 << 32).expect("log-square map diverged") as u32
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LogSquare {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // 0 and 1 are sinks of the map; nudge them onto a live orbit.
        let raw = u64::from_le_bytes(seed).max(2);
        LogSquare::with_seed(raw as f64).expect("integer seed escaped the map")
    }
}
