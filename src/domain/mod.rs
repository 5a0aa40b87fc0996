// Domain layer: state model, actions and ports. Nothing here touches the filesystem.

pub mod action;
pub mod model;
pub mod ports;
