// Domain layer: plain models and the ports the demos are wired through.

pub mod model;
pub mod ports;
