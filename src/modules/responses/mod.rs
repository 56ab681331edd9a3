pub mod avs;
pub mod cvv;
pub mod response;

pub use avs::AvsResult;
pub use cvv::CvvResult;
pub use response::{AvsParams, Response, ResponseOptions};
