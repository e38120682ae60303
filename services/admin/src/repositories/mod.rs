//! Repositories for database operations

pub mod category;
pub mod product;
pub mod review;
pub mod user;

pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
