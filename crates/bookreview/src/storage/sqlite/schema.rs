//! SQLite schema definitions and SQL query constants.

/// Creates the tables on first open. Safe to run against an existing file.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    UNIQUE (title, author)
);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id INTEGER NOT NULL,
    comment TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_reviews_book_id ON reviews(book_id);
"#;

// Book queries
pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author)
VALUES (?1, ?2)
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT id, title, author
FROM books
WHERE id = ?1
"#;

pub const SELECT_BOOK_BY_TITLE_AND_AUTHOR: &str = r#"
SELECT id, title, author
FROM books
WHERE title = ?1 AND author = ?2
"#;

pub const SELECT_ALL_BOOKS: &str = r#"
SELECT id, title, author
FROM books
ORDER BY id ASC
"#;

// Review queries
pub const INSERT_REVIEW: &str = r#"
INSERT INTO reviews (book_id, comment, rating)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_REVIEWS_BY_BOOK: &str = r#"
SELECT id, book_id, comment, rating
FROM reviews
WHERE book_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_ALL_REVIEWS: &str = r#"
SELECT id, book_id, comment, rating
FROM reviews
ORDER BY book_id ASC, id ASC
"#;

// Maintenance
pub const CLEAR_ALL: &str = r#"
DELETE FROM reviews;
DELETE FROM books;
DELETE FROM sqlite_sequence WHERE name IN ('books', 'reviews');
"#;

pub const PING: &str = "SELECT 1";
