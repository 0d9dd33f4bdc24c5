use crate::config::{DEFAULT_RADIUS, DEFAULT_SIDE, DEFAULT_TRIANGLE};
use crate::core::{OutputFormat, SampleProvider, Shape};
use crate::utils::error::{GeometryError, Result};
use crate::utils::validation::{validate_finite, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "area-calc", version)]
#[command(about = "Print the areas of a circle, a square and a triangle")]
pub struct CliConfig {
    #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    pub radius: f64,

    #[arg(long, default_value_t = DEFAULT_SIDE, allow_negative_numbers = true)]
    pub side: f64,

    /// Triangle side lengths as a,b,c
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_TRIANGLE,
        allow_negative_numbers = true
    )]
    pub triangle: Vec<f64>,

    #[arg(long, help = "Reject triangles that violate the triangle inequality")]
    pub strict: bool,

    #[arg(long, help = "Print one JSON object per shape")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_finite("radius", self.radius)?;
        validate_finite("side", self.side)?;
        if self.triangle.len() != 3 {
            return Err(GeometryError::InvalidConfigValue {
                field: "triangle".to_string(),
                value: format!("{:?}", self.triangle),
                reason: "Expected exactly three side lengths (a,b,c)".to_string(),
            });
        }
        for (name, value) in ["triangle.a", "triangle.b", "triangle.c"]
            .iter()
            .zip(&self.triangle)
        {
            validate_finite(name, *value)?;
        }
        Ok(())
    }
}

impl SampleProvider for CliConfig {
    fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::Circle {
                radius: self.radius,
            },
            Shape::Square { side: self.side },
        ];
        if let [a, b, c] = self.triangle[..] {
            shapes.push(Shape::Triangle { a, b, c });
        }
        shapes
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultSamples;

    #[test]
    fn test_no_arguments_matches_default_samples() {
        let config = CliConfig::parse_from(["area-calc"]);

        assert_eq!(config.shapes(), DefaultSamples.shapes());
        assert!(!config.strict());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "area-calc",
            "--radius",
            "2",
            "--side",
            "-3",
            "--triangle",
            "6,8,10",
            "--strict",
            "--json",
        ]);

        assert_eq!(
            config.shapes(),
            vec![
                Shape::Circle { radius: 2.0 },
                Shape::Square { side: -3.0 },
                Shape::Triangle {
                    a: 6.0,
                    b: 8.0,
                    c: 10.0
                },
            ]
        );
        assert!(config.strict());
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_triangle_needs_three_sides() {
        let config = CliConfig::parse_from(["area-calc", "--triangle", "3,4"]);
        assert!(matches!(
            config.validate(),
            Err(GeometryError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_fail_validation() {
        let config = CliConfig::parse_from(["area-calc", "--radius", "inf"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["area-calc", "--triangle", "3,NaN,5"]);
        assert!(config.validate().is_err());
    }
}
