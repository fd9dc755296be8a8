// Domain layer: content records, form/navigation types and the content port.

pub mod model;
pub mod ports;
