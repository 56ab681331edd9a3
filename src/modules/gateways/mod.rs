pub mod bogus;
pub mod gateway_trait;

pub use bogus::BogusGateway;
pub use gateway_trait::{Gateway, TransactionOptions};
