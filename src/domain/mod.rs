// Domain layer: the joke model and the ports the fetcher talks through.

pub mod model;
pub mod ports;
