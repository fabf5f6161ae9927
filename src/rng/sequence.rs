use super::RandomSource;

/// Replays a fixed list of values, wrapping around at the end.
///
/// `below(n)` returns `value % n`, so a test can pick alphabet positions
/// directly and assert the exact password.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_u64(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
