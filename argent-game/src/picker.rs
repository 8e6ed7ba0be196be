use rand::{Rng, RngCore};

/// Single-draw weighted selection over borrowed candidates.
pub struct WeightedPicker<T> {
    candidates: Vec<(T, u32)>,
    total_weight: u32,
}

impl<T> Default for WeightedPicker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedPicker<T> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            total_weight: 0,
        }
    }

    pub fn add(&mut self, candidate: T, weight: u32) {
        self.total_weight = self.total_weight.saturating_add(weight);
        self.candidates.push((candidate, weight));
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn is_empty(&self) -> bool {
        self.total_weight == 0
    }

    /// Draws once in `0..total_weight`, so a zero weight candidate can never
    /// be picked and zero total weight picks nothing.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Option<&T> {
        if self.total_weight == 0 {
            return None;
        }

        let mut roll = rng.gen_range(0..self.total_weight);
        for (candidate, weight) in &self.candidates {
            if roll < *weight {
                return Some(candidate);
            }
            roll -= *weight;
        }
        None
    }
}
