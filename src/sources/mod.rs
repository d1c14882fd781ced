pub mod api;
pub mod mock;
pub mod traits;
pub mod types;

pub use api::ApiSource;
pub use mock::MockSource;
pub use traits::PropertySource;
pub use types::{ListParams, DEFAULT_LIMIT};
