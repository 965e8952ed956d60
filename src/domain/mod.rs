// Domain layer: models and ports. Filesystem and process details live in core/ and app/.

pub mod model;
pub mod ports;
