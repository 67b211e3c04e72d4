//! API request payloads for book and review creation.
//!
//! These types are shared between the server and the client. Fields are
//! optional on the wire so that a missing value produces the documented
//! validation message instead of a deserialization failure.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{BookError, ReviewError};
use super::operations::{parse_rating, present};
use super::types::{NewBook, NewReview};

/// Request payload for creating a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl CreateBookRequest {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// Checks required fields and trims them.
    ///
    /// Uniqueness is not checked here; that needs the store.
    pub fn validate(&self) -> Result<NewBook, BookError> {
        let (Some(title), Some(author)) = (
            present(self.title.as_deref()),
            present(self.author.as_deref()),
        ) else {
            return Err(BookError::MissingFields);
        };

        let (title, author) = (title.trim(), author.trim());
        if title.is_empty() || author.is_empty() {
            return Err(BookError::EmptyFields);
        }

        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
        })
    }
}

/// A rating as it may arrive in JSON.
///
/// Clients send integers, but floats, numeric strings and other JSON values
/// must still be accepted by the parser so they can be validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<i64> for RatingInput {
    fn from(value: i64) -> Self {
        RatingInput::Integer(value)
    }
}

/// Request payload for adding a review to a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// `None` only when the key is absent; an explicit `null` is a rating
    /// that fails range validation.
    #[serde(
        default,
        deserialize_with = "present_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<RatingInput>,
}

fn present_rating<'de, D>(deserializer: D) -> Result<Option<RatingInput>, D::Error>
where
    D: Deserializer<'de>,
{
    RatingInput::deserialize(deserializer).map(Some)
}

impl CreateReviewRequest {
    pub fn new(comment: impl Into<String>, rating: impl Into<RatingInput>) -> Self {
        Self {
            comment: Some(comment.into()),
            rating: Some(rating.into()),
        }
    }

    /// Validates the payload for the given book.
    ///
    /// Checks run in order: required fields, empty comment, rating range.
    /// Whether the book exists is left to the caller.
    pub fn validate(&self, book_id: i64) -> Result<NewReview, ReviewError> {
        let (Some(comment), Some(rating)) =
            (present(self.comment.as_deref()), self.rating.as_ref())
        else {
            return Err(ReviewError::MissingFields);
        };

        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }

        let rating = parse_rating(rating)?;

        Ok(NewReview {
            book_id,
            comment: comment.to_string(),
            rating,
        })
    }
}
