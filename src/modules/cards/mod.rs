pub mod brand;
pub mod classifier;
pub mod credit_card;
pub mod expiry;

pub use brand::CardBrand;
pub use classifier::CardClassifier;
pub use credit_card::{CreditCard, ValidationErrors};
pub use expiry::ExpiryDate;
