// Domain layer: the translation vocabulary and the ports the engine and shell depend on.

pub mod model;
pub mod ports;
