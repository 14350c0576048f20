pub mod admission;
pub mod model;
pub mod store;

pub use admission::AdmissionError;
pub use model::{Registration, RegistrationPayload};
pub use store::RegistrationStore;
