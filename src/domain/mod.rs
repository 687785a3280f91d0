// Domain layer: core models and ports (interfaces). No external-system
// dependencies beyond serde.

pub mod model;
pub mod ports;
