use crate::domain::model::{OutputFormat, Shape};
use crate::utils::error::Result;

pub trait Measurable {
    fn area(&self) -> Result<f64>;
}

/// Source of the shapes a `Calculator` measures, and how it should report them.
pub trait SampleProvider {
    fn shapes(&self) -> Vec<Shape>;
    fn strict(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
}
