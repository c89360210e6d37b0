// Domain layer: app descriptors, layout and the ports the installer drives.

pub mod model;
pub mod ports;
