/// Inclusive price filter used by catalog searches. `None` on a side means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builds a range from raw bounds, treating a negative bound as "no limit".
    pub fn from_bounds(min: f64, max: f64) -> Self {
        Self {
            min: (min >= 0.0).then_some(min),
            max: (max >= 0.0).then_some(max),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}
