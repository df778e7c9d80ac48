// Domain layer: workout models, formulas and ports. No I/O here.

pub mod formulas;
pub mod model;
pub mod ports;
