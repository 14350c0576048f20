pub mod model;
pub mod resource;
pub mod sanitize;
pub mod seed;
pub mod store;

pub use model::{ResultsSection, SiteContent, SiteSettings};
pub use resource::ResourceKind;
pub use store::ContentStore;
