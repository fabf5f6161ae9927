//! Cycle-counter mixer.
//!
//! Each draw folds the current CPU counter into a rotating state, multiplies
//! by an odd constant picked from the mixed bits, and finishes with the
//! SplitMix64 output step. Fast and unpredictable enough for throwaway
//! passwords, but not a CSPRNG.

use zeroize::Zeroize;

use super::RandomSource;

const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
];

pub struct HwSource {
    state: u64,
}

impl HwSource {
    pub fn new() -> Self {
        Self { state: counter() }
    }
}

impl Default for HwSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for HwSource {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = counter();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Drop for HwSource {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(target_arch = "x86_64")]
pub fn counter_name() -> &'static str {
    "rdtsc cycle counter"
}

#[cfg(target_arch = "aarch64")]
pub fn counter_name() -> &'static str {
    "cntvct cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn counter_name() -> &'static str {
    "system clock"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn counter() -> u64 {
    #[allow(unused_unsafe)]
    unsafe {
        core::arch::x86_64::_rdtsc()
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn counter() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn counter() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_vary() {
        let mut rng = HwSource::new();
        let draws: Vec<u64> = (0..32).map(|_| rng.next_u64()).collect();
        let first = draws[0];
        assert!(draws.iter().any(|&d| d != first));
    }

    #[test]
    fn below_is_unbiased_range() {
        let mut rng = HwSource::new();
        assert!((0..1000).all(|_| rng.below(81) < 81));
    }
}
