// Domain layer: core models, backend payloads and ports. No I/O here.

pub mod api;
pub mod model;
pub mod ports;
