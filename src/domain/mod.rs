pub mod codec;
pub mod payment;
pub mod ports;
