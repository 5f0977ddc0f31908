pub trait Factorial {
    fn get(&self, n: u8) -> u64;
}

#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u64 {
        assert!(n <= 20, "{n}! overflows");
        let mut product = 1u64;
        for i in 2..=n as u64 {
            product *= i;
        }
        product
    }
}

// 20! is the largest factorial that fits in a u64; goal counts sit well below that
const MAX_FACTORIAL_ENTRIES: usize = 21;

pub struct Lookup {
    entries: [u64; MAX_FACTORIAL_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u64 {
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u64; MAX_FACTORIAL_ENTRIES];
        for i in 2..MAX_FACTORIAL_ENTRIES {
            entries[i] = i as u64 * entries[i - 1];
        }
        Self { entries }
    }
}
