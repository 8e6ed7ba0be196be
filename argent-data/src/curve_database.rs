use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, str::FromStr};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveId(NonZeroU32);
id_wrapper_impl!(CurveId, NonZeroU32, u32);

/// A table of integer samples indexed by position, usually character level.
#[derive(Clone, Debug)]
pub struct Curve {
    min_position: i32,
    values: Vec<i32>,
}

impl Curve {
    pub fn new(min_position: i32, values: Vec<i32>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self {
                min_position,
                values,
            })
        }
    }

    pub fn min_position(&self) -> i32 {
        self.min_position
    }

    pub fn max_position(&self) -> i32 {
        self.min_position + self.values.len() as i32 - 1
    }

    /// Positions outside the authored range clamp to the nearest end.
    pub fn value_at(&self, position: i32) -> i32 {
        let index = position.clamp(self.min_position, self.max_position()) - self.min_position;
        self.values.get(index as usize).copied().unwrap_or(0)
    }
}

pub struct CurveDatabase {
    curves: Vec<Option<Curve>>,
}

impl CurveDatabase {
    pub fn new(curves: Vec<Option<Curve>>) -> Self {
        Self { curves }
    }

    pub fn get_curve(&self, id: CurveId) -> Option<&Curve> {
        self.curves.get(id.get() as usize).and_then(|x| x.as_ref())
    }
}
