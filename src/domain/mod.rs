// Domain layer: assessment models and ports (interfaces) for storage and speech.

pub mod model;
pub mod ports;
