use serde::{Deserialize, Serialize};

/// A book together with the reviews it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Book {
    /// Creates a book with no reviews.
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            reviews: Vec::new(),
        }
    }

    /// Attaches reviews to this book.
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }
}

/// A rated comment on a book.
///
/// The parent book is referenced by id only, never embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub comment: String,
    pub rating: i64,
}

impl Review {
    pub fn new(id: i64, book_id: i64, comment: impl Into<String>, rating: i64) -> Self {
        Self {
            id,
            book_id,
            comment: comment.into(),
            rating,
        }
    }
}

/// A validated book that has not been stored yet.
///
/// Only obtainable through [`CreateBookRequest::validate`](super::CreateBookRequest::validate),
/// so `title` and `author` are always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub(crate) title: String,
    pub(crate) author: String,
}

impl NewBook {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Builds the stored book once the store has assigned an id.
    pub fn into_book(self, id: i64) -> Book {
        Book::new(id, self.title, self.author)
    }
}

/// A validated review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub(crate) book_id: i64,
    pub(crate) comment: String,
    pub(crate) rating: i64,
}

impl NewReview {
    pub fn book_id(&self) -> i64 {
        self.book_id
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    /// Builds the stored review once the store has assigned an id.
    pub fn into_review(self, id: i64) -> Review {
        Review::new(id, self.book_id, self.comment, self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_json_shape() {
        let book = Book::new(1, "1984", "George Orwell")
            .with_reviews(vec![Review::new(3, 1, "Chilling and prophetic.", 5)]);

        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "1984",
                "author": "George Orwell",
                "reviews": [
                    {"id": 3, "bookId": 1, "comment": "Chilling and prophetic.", "rating": 5}
                ]
            })
        );
    }

    #[test]
    fn test_new_book_serializes_empty_reviews() {
        let json = serde_json::to_value(Book::new(7, "Emma", "Jane Austen")).unwrap();
        assert_eq!(json["reviews"], serde_json::json!([]));
    }

    #[test]
    fn test_book_without_reviews_field_deserializes() {
        let book: Book =
            serde_json::from_str(r#"{"id": 2, "title": "Dune", "author": "Frank Herbert"}"#)
                .unwrap();
        assert!(book.reviews.is_empty());
    }

    #[test]
    fn test_new_review_into_review() {
        let new_review = NewReview {
            book_id: 4,
            comment: "Witty.".to_string(),
            rating: 4,
        };

        let review = new_review.into_review(11);

        assert_eq!(review, Review::new(11, 4, "Witty.", 4));
    }
}
