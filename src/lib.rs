pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::DefaultSamples;
pub use core::calculator::Calculator;
pub use core::geometry::{circle_area, square_area, triangle_area, triangle_area_strict};
pub use domain::model::{AreaReport, OutputFormat, Shape};
pub use utils::error::{GeometryError, Result};
