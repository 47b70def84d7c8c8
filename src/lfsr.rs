//! A 128-bit Fibonacci linear-feedback shift register.
//!
//! The register shifts to the left. The output bit is the top bit of the register (the one that is
//! about to be shifted out) and the feedback bit, the parity of the tapped bits, is shifted in at
//! the bottom. The taps are bits 127, 125, 100 and 98, i.e. the polynomial
//! `x^128 + x^126 + x^101 + x^99 + 1`, which gives a maximum-length sequence for a 128-bit
//! register.
//!
//! Bits are packed into bytes least-significant bit first: the first bit produced for a byte is
//! bit 0 of that byte.

/// The width of the register in bits.
pub const WIDTH: u32 = u128::BITS;

/// The feedback taps, as zero-based bit positions.
pub const TAPS: [u32; 4] = [127, 125, 100, 98];

const TAP_MASK: u128 = (1 << TAPS[0]) | (1 << TAPS[1]) | (1 << TAPS[2]) | (1 << TAPS[3]);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A pseudorandom bit generator backed by a linear-feedback shift register.
///
/// The register is never zero. Zero is a fixed point of the feedback function, and because the
/// top bit is one of the taps the step function is a bijection, so a non-zero register can never
/// reach it.
pub struct Lfsr {
    /// The current contents of the register.
    state: u128,
}

impl Lfsr {
    /// Returns a generator whose register holds `seed` in its low 64 bits and has the top bit
    /// forced high, so the register is non-zero whatever the seed is.
    ///
    /// # Example
    /// ```
    /// # use lfsr::Lfsr;
    /// let lfsr = Lfsr::from_seed(0);
    /// assert_eq!(lfsr.state(), 1 << 127);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: (1 << (WIDTH - 1)) | seed as u128,
        }
    }

    /// Returns a generator with the register set to `state`, or `None` if `state` is zero.
    pub fn from_state(state: u128) -> Option<Self> {
        (state != 0).then_some(Self { state })
    }

    /// Returns the current contents of the register.
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Returns the next bit of the sequence (`0` or `1`) and advances the register by one step.
    #[inline]
    pub fn next_bit(&mut self) -> u8 {
        let output = (self.state >> (WIDTH - 1)) as u8;
        let feedback = ((self.state & TAP_MASK).count_ones() & 1) as u128;
        self.state = (self.state << 1) | feedback;
        output
    }

    /// Returns the next eight bits of the sequence packed into a byte, least-significant bit
    /// first.
    ///
    /// # Example
    /// ```
    /// # use lfsr::Lfsr;
    /// let mut lfsr = Lfsr::from_seed(0x0123_4567_89AB_CDEF);
    /// let mut copy = lfsr.clone();
    ///
    /// let byte = lfsr.next_byte();
    /// let manual = (0..8).fold(0, |acc, i| acc | copy.next_bit() << i);
    ///
    /// assert_eq!(byte, manual);
    /// ```
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let mut byte = 0;
        for index in 0..8 {
            byte |= self.next_bit() << index;
        }
        byte
    }

    /// Fills `dest` with bytes from the sequence. Each byte consumes eight steps of the register.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Advances the register by `bits` steps, discarding the output.
    pub fn discard(&mut self, bits: u64) {
        for _ in 0..bits {
            self.next_bit();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seed_sets_top_bit() {
        assert_eq!(Lfsr::from_seed(0).state(), 1 << 127);
        assert_eq!(Lfsr::from_seed(u64::MAX).state(), (1 << 127) | u64::MAX as u128);
        assert!(Lfsr::from_state(0).is_none());
        assert_eq!(Lfsr::from_state(5).map(|lfsr| lfsr.state()), Some(5));
    }

    #[test]
    fn step_shifts_left_and_feeds_back_tap_parity() {
        // Only the top tap is set: the output is 1 and the feedback is 1.
        let mut lfsr = Lfsr::from_state(1 << 127).unwrap();
        assert_eq!(lfsr.next_bit(), 1);
        assert_eq!(lfsr.state(), 1);

        // Two taps set cancel each other out.
        let mut lfsr = Lfsr::from_state((1 << 127) | (1 << 98)).unwrap();
        assert_eq!(lfsr.next_bit(), 1);
        assert_eq!(lfsr.state(), 1 << 99);

        // Bits outside the taps never feed back.
        let mut lfsr = Lfsr::from_state(1 << 64).unwrap();
        assert_eq!(lfsr.next_bit(), 0);
        assert_eq!(lfsr.state(), 1 << 65);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Lfsr::from_seed(0xDEAD_BEEF);
        let mut b = Lfsr::from_seed(0xDEAD_BEEF);
        let (mut x, mut y) = ([0; 1000], [0; 1000]);
        a.fill_bytes(&mut x);
        b.fill_bytes(&mut y);
        assert_eq!(x, y);
        assert_eq!(a, b);

        let mut c = Lfsr::from_seed(0xDEAD_BEEE);
        let mut z = [0; 1000];
        c.fill_bytes(&mut z);
        assert_ne!(x, z);
    }

    #[test]
    fn never_reaches_zero() {
        for seed in [0, 1, 42, u64::MAX, 0x0123_4567_89AB_CDEF] {
            let mut lfsr = Lfsr::from_seed(seed);
            for _ in 0..10_000 {
                lfsr.next_bit();
                assert_ne!(lfsr.state(), 0);
            }
        }
    }

    #[test]
    fn reference_vector() {
        // The first 64 output bits are the forced top bit followed by 63 zero bits, after which
        // the seed itself comes out, most significant bit first.
        let mut lfsr = Lfsr::from_seed(0x0123_4567_89AB_CDEF);
        let mut bytes = [0; 24];
        lfsr.fill_bytes(&mut bytes);
        assert_eq!(
            bytes,
            [
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xC4, 0xA2, 0xE6, 0x91,
                0xD5, 0xB3, 0xF7, 0x01, 0x00, 0x00, 0x00, 0x00, 0xB4, 0x4E, 0xE1,
            ]
        );
    }

    #[test]
    fn discard_matches_output() {
        let mut a = Lfsr::from_seed(7);
        let mut b = a.clone();
        let mut skipped = [0; 37];
        a.fill_bytes(&mut skipped);
        b.discard(37 * 8);
        assert_eq!(a, b);
        assert_eq!(a.next_byte(), b.next_byte());
    }
}
