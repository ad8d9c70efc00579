mod field_store;
pub use self::field_store::*;

mod normalize;
pub use self::normalize::*;
