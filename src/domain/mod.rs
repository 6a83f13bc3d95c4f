// Domain layer: models and ports. Concrete HTTP/SMTP/file access lives in adapters.

pub mod model;
pub mod ports;
