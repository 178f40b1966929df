// Domain layer: value types and ports. The prediction core depends on nothing else.

pub mod model;
pub mod ports;
