pub use self::errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod main;
pub mod search;
pub mod speakers;
pub mod talks;
