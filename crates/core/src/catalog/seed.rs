//! Sample catalog used by the `seed` command.

use super::requests::{CreateBookRequest, CreateReviewRequest};

/// A book to seed together with the reviews to attach to it.
#[derive(Debug, Clone)]
pub struct SeedBook {
    pub book: CreateBookRequest,
    pub reviews: Vec<CreateReviewRequest>,
}

/// Returns five well-known books with two or three reviews each.
pub fn seed_books() -> Vec<SeedBook> {
    let seed = |title: &str, author: &str, reviews: &[(&str, i64)]| SeedBook {
        book: CreateBookRequest::new(title, author),
        reviews: reviews
            .iter()
            .map(|(comment, rating)| CreateReviewRequest::new(*comment, *rating))
            .collect(),
    };

    vec![
        seed(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            &[
                ("A masterpiece of American literature!", 5),
                ("Beautiful prose and compelling characters.", 4),
            ],
        ),
        seed(
            "To Kill a Mockingbird",
            "Harper Lee",
            &[
                ("Powerful and thought-provoking.", 5),
                ("A must-read classic.", 5),
                ("Excellent storytelling.", 4),
            ],
        ),
        seed(
            "1984",
            "George Orwell",
            &[
                ("Chilling and prophetic.", 5),
                ("Orwell was ahead of his time.", 5),
            ],
        ),
        seed(
            "Pride and Prejudice",
            "Jane Austen",
            &[("Witty and romantic.", 4), ("Jane Austen at her finest.", 5)],
        ),
        seed(
            "The Catcher in the Rye",
            "J.D. Salinger",
            &[("Captures teenage angst perfectly.", 4)],
        ),
    ]
}
