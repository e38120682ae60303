//! Admin service models

pub mod category;
pub mod product;
pub mod review;
pub mod user;

// Re-export for convenience
pub use category::{Category, NewCategory, UpdateCategory};
pub use product::{NewProduct, Product, UpdateProduct};
pub use review::{NewReview, Review, UpdateReview};
pub use user::{IdentitySync, Role, UpdateUser, User};
