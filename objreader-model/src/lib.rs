pub mod types;
pub mod model;

pub use self::types::*;
pub use self::model::*;
