use crate::core::geometry::triangle_area_strict;
use crate::domain::model::{AreaReport, OutputFormat, Shape};
use crate::domain::ports::{Measurable, SampleProvider};
use crate::utils::error::Result;
use std::io::Write;

pub struct Calculator<P: SampleProvider> {
    provider: P,
}

impl<P: SampleProvider> Calculator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn measure(&self, shape: &Shape) -> Result<AreaReport> {
        let area = match *shape {
            Shape::Triangle { a, b, c } if self.provider.strict() => triangle_area_strict(a, b, c)?,
            _ => shape.area()?,
        };

        tracing::debug!(shape = shape.name(), area, "measured {}", shape);
        if area.is_nan() {
            tracing::warn!("Area of {} is NaN; the sides violate the triangle inequality", shape);
        }

        Ok(AreaReport {
            shape: *shape,
            area,
        })
    }

    pub fn measure_all(&self) -> Result<Vec<AreaReport>> {
        self.provider
            .shapes()
            .iter()
            .map(|shape| self.measure(shape))
            .collect()
    }

    /// Measures each shape in order and writes its line as soon as it is computed.
    /// On failure the lines already written are left in `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<AreaReport>> {
        let shapes = self.provider.shapes();
        let format = self.provider.output_format();
        tracing::info!("Measuring {} shapes", shapes.len());

        let mut reports = Vec::with_capacity(shapes.len());
        for shape in &shapes {
            let report = self.measure(shape)?;
            match format {
                OutputFormat::Text => writeln!(out, "{}", report)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
            reports.push(report);
        }
        out.flush()?;

        tracing::info!("Measured {} shapes", reports.len());
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultSamples;
    use crate::utils::error::GeometryError;

    struct FixedSamples {
        shapes: Vec<Shape>,
        strict: bool,
        format: OutputFormat,
    }

    impl SampleProvider for FixedSamples {
        fn shapes(&self) -> Vec<Shape> {
            self.shapes.clone()
        }

        fn strict(&self) -> bool {
            self.strict
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    fn with_bad_triangle(strict: bool) -> FixedSamples {
        FixedSamples {
            shapes: vec![
                Shape::Circle { radius: 1.0 },
                Shape::Square { side: 2.0 },
                Shape::Triangle {
                    a: 1.0,
                    b: 1.0,
                    c: 5.0,
                },
            ],
            strict,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_default_run_output() {
        let calculator = Calculator::new(DefaultSamples);
        let mut out = Vec::new();

        let reports = calculator.run(&mut out).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Area of circle with radius 5: 78.53981633974483\n\
             Area of square with side length 4: 16\n\
             Area of triangle with sides 3, 4, and 5: 6\n"
        );
    }

    #[test]
    fn test_failure_keeps_earlier_lines() {
        let calculator = Calculator::new(FixedSamples {
            shapes: vec![
                Shape::Circle { radius: 5.0 },
                Shape::Square { side: 4.0 },
                Shape::Triangle {
                    a: 0.0,
                    b: 4.0,
                    c: 5.0,
                },
            ],
            strict: false,
            format: OutputFormat::Text,
        });
        let mut out = Vec::new();

        let err = calculator.run(&mut out).unwrap_err();

        assert!(matches!(
            err,
            GeometryError::InvalidArgument { parameter: "a", .. }
        ));
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.starts_with("Area of circle"));
        assert!(!written.contains("triangle"));
    }

    #[test]
    fn test_non_strict_reports_nan() {
        let reports = Calculator::new(with_bad_triangle(false)).measure_all().unwrap();
        assert!(reports[2].area.is_nan());
    }

    #[test]
    fn test_strict_rejects_impossible_triangle() {
        let result = Calculator::new(with_bad_triangle(true)).measure_all();
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn test_json_output() {
        let calculator = Calculator::new(FixedSamples {
            shapes: vec![Shape::Square { side: 4.0 }],
            strict: false,
            format: OutputFormat::Json,
        });
        let mut out = Vec::new();

        calculator.run(&mut out).unwrap();

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["shape"], "square");
        assert_eq!(value["area"], 16.0);
    }
}
