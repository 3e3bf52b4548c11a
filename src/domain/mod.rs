// Domain layer: the event model and the ports the pipeline stages talk through.

pub mod model;
pub mod ports;
