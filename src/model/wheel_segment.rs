use serde::{Deserialize, Serialize};

/// Anything that can take part in a weighted draw.
pub trait Weighted {
    fn weight(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub label: String,
    #[serde(default)]
    pub weight: f64,
}

impl WheelSegment {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }

    /// The prize table the wheel ships with.
    pub fn default_prizes() -> Vec<WheelSegment> {
        vec![
            WheelSegment::new("Grand Prize", 1.0),
            WheelSegment::new("Red Envelope", 4.0),
            WheelSegment::new("Lucky Charm", 10.0),
            WheelSegment::new("Sweets", 15.0),
            WheelSegment::new("Good Fortune", 30.0),
            WheelSegment::new("Try Again", 40.0),
        ]
    }
}

impl Weighted for WheelSegment {
    fn weight(&self) -> f64 {
        self.weight
    }
}
