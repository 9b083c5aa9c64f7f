//! Value objects - immutable types that represent domain concepts
//!
//! Value objects are validated once at construction and compared by value.

mod user_id;
mod user_name;

pub use user_id::UserId;
pub use user_name::UserName;

/// Common accessor shared by every value object
pub trait ValueObject {
    /// The wrapped primitive
    type Value: ?Sized;

    /// Borrow the wrapped primitive
    fn value(&self) -> &Self::Value;
}
