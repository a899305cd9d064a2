pub mod interactive;
pub mod ports;
pub mod session;
