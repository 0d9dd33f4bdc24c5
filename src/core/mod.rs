pub mod calculator;
pub mod geometry;

pub use crate::domain::model::{AreaReport, OutputFormat, Shape};
pub use crate::domain::ports::{Measurable, SampleProvider};
pub use crate::utils::error::Result;
