mod type_error;
pub use self::type_error::*;
