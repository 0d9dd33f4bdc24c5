//! Closed-form area formulas.
//!
//! `circle_area` and `square_area` accept any input. `triangle_area` rejects
//! non-positive sides but, like the classic Heron implementation, does not check the
//! triangle inequality: impossible side sets produce `NaN`. Use
//! [`triangle_area_strict`] to reject those as well.

use crate::domain::model::Shape;
use crate::domain::ports::Measurable;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_length, validate_triangle_inequality};
use std::f64::consts::PI;

/// π × radius². A negative radius is squared away, not rejected.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

pub fn square_area(side: f64) -> f64 {
    side * side
}

/// Heron's formula. Fails with `InvalidArgument` naming the first side that is not > 0.
pub fn triangle_area(a: f64, b: f64, c: f64) -> Result<f64> {
    validate_positive_length("a", a)?;
    validate_positive_length("b", b)?;
    validate_positive_length("c", c)?;

    Ok(heron(a, b, c))
}

pub fn triangle_area_strict(a: f64, b: f64, c: f64) -> Result<f64> {
    validate_positive_length("a", a)?;
    validate_positive_length("b", b)?;
    validate_positive_length("c", c)?;
    validate_triangle_inequality(a, b, c)?;

    Ok(heron(a, b, c))
}

fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

impl Measurable for Shape {
    fn area(&self) -> Result<f64> {
        match *self {
            Shape::Circle { radius } => Ok(circle_area(radius)),
            Shape::Square { side } => Ok(square_area(side)),
            Shape::Triangle { a, b, c } => triangle_area(a, b, c),
        }
    }
}
