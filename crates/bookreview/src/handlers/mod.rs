pub mod body;
pub mod books;
pub mod error;
pub mod fallback;
pub mod health;
pub mod reviews;

pub use body::Payload;
pub use error::AppError;
