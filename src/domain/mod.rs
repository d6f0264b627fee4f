// Domain layer: date value, store model and ports. No I/O lives here.

pub mod date;
pub mod model;
pub mod ports;
