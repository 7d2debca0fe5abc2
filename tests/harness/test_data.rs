use rand::{rngs::StdRng, Rng, SeedableRng};

/// Deterministic byte generator so failures reproduce across runs.
pub struct TestData {
    rng: StdRng,
}

impl TestData {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0x005E_ED42),
        }
    }

    pub fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.rng.fill(&mut out[..]);
        out
    }

    #[allow(dead_code)]
    pub fn payloads(&mut self, sizes: &[usize]) -> Vec<Vec<u8>> {
        sizes.iter().map(|&n| self.bytes(n)).collect()
    }
}

impl Default for TestData {
    fn default() -> Self {
        Self::new()
    }
}
