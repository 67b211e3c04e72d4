mod error;
mod operations;
mod requests;
mod seed;
mod types;

pub use error::{book_error_to_status_code, review_error_to_status_code, BookError, ReviewError};
pub use operations::{parse_book_id, parse_rating, MAX_RATING, MIN_RATING};
pub use requests::{CreateBookRequest, CreateReviewRequest, RatingInput};
pub use seed::{seed_books, SeedBook};
pub use types::{Book, NewBook, NewReview, Review};
