//! Port traits decoupling the domain from concrete infrastructure.

pub mod lender_store;
pub mod config_port;
