use crate::core::BinningError;
use crate::streams::SampleStream;

/// Finite stream replaying a fixed list of samples.
pub struct VecStream<T> {
    pub samples: Vec<T>,
    idx: usize,
}

impl<T> VecStream<T> {
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl<T: Copy> SampleStream<T> for VecStream<T> {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<T> {
        let x = self.samples.get(self.idx).copied()?;
        self.idx += 1;
        Some(x)
    }

    fn restart(&mut self) -> Result<(), BinningError> {
        self.idx = 0;
        Ok(())
    }
}
