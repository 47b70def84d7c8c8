use rand::{RngCore, SeedableRng};

use crate::{LfsrDevice, Lfsr};

impl RngCore for Lfsr {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0; 4];
        Lfsr::fill_bytes(self, &mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0; 8];
        Lfsr::fill_bytes(self, &mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Lfsr::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Lfsr::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Lfsr {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Lfsr::from_seed(u64::from_le_bytes(seed))
    }
}

impl RngCore for &LfsrDevice {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}
