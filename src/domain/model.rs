use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Square { .. } => "square",
            Shape::Triangle { .. } => "triangle",
        }
    }
}

/// Renders as e.g. `circle with radius 5`, the subject of an output line.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle { radius } => write!(f, "circle with radius {}", radius),
            Shape::Square { side } => write!(f, "square with side length {}", side),
            Shape::Triangle { a, b, c } => {
                write!(f, "triangle with sides {}, {}, and {}", a, b, c)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    #[serde(flatten)]
    pub shape: Shape,
    pub area: f64,
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Area of {}: {}", self.shape, self.area)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
