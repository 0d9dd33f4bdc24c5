// Domain layer: shape models and the ports the calculator depends on.

pub mod model;
pub mod ports;
