//! The `seed` subcommand: reset the store to the sample catalog.

use anyhow::{Context, Result};
use bookreview_core::{cache::BOOKS_ALL_KEY, catalog::seed_books};

use crate::state::AppState;

/// Counts of what was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub books: usize,
    pub reviews: usize,
}

/// Wipes every book and review, then inserts the sample catalog.
///
/// Writes go through the cached repositories, and the snapshot is dropped
/// once more at the end so a stale list never survives a reseed.
pub async fn run(state: &AppState) -> Result<SeedSummary> {
    state
        .store_reset
        .clear()
        .await
        .context("failed to clear the store")?;

    let mut summary = SeedSummary {
        books: 0,
        reviews: 0,
    };

    for entry in seed_books() {
        let new_book = entry.book.validate()?;
        let book = state
            .book_repo
            .create_book(&new_book)
            .await
            .with_context(|| format!("failed to insert {:?}", new_book.title()))?;
        summary.books += 1;

        for review in entry.reviews {
            let new_review = review.validate(book.id)?;
            state.review_repo.create_review(&new_review).await?;
            summary.reviews += 1;
        }
    }

    match tokio::time::timeout(state.cache_timeout, state.cache.delete(BOOKS_ALL_KEY)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::warn!(error = %err, "Failed to invalidate book list cache"),
        Err(_) => tracing::warn!(
            timeout_ms = state.cache_timeout.as_millis() as u64,
            "Timed out invalidating book list cache"
        ),
    }

    tracing::info!(
        books = summary.books,
        reviews = summary.reviews,
        "Seeded the catalog"
    );

    Ok(summary)
}
