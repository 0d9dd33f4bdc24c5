#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::{OutputFormat, SampleProvider, Shape};

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_SIDE: f64 = 4.0;
pub const DEFAULT_TRIANGLE: [f64; 3] = [3.0, 4.0, 5.0];

/// The fixed sample set: circle r=5, square side 4, triangle 3/4/5, plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSamples;

impl SampleProvider for DefaultSamples {
    fn shapes(&self) -> Vec<Shape> {
        let [a, b, c] = DEFAULT_TRIANGLE;
        vec![
            Shape::Circle {
                radius: DEFAULT_RADIUS,
            },
            Shape::Square { side: DEFAULT_SIDE },
            Shape::Triangle { a, b, c },
        ]
    }

    fn strict(&self) -> bool {
        false
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}
