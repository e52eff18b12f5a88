//! Dashboard query helpers: filtering and sorting over an in-memory note list.
//!
//! The client fetches all of an owner's notes and narrows them locally;
//! these functions are that logic's single home. They operate through the
//! [`NoteQuery`] trait so the database row type and test fixtures can share
//! them without this crate depending on the storage layer.

use crate::types::Timestamp;

/// Accessors the dashboard needs from a note-like value.
pub trait NoteQuery {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn favorite(&self) -> bool;
    fn created_at(&self) -> Timestamp;
}

/// Sort direction over note creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently created first (the dashboard default).
    Newest,
    /// Oldest first.
    Oldest,
}

/// Filter notes by a case-insensitive substring match on title OR content,
/// optionally restricted to favorites.
///
/// An empty (or whitespace-only) query matches every note, so filtering
/// with `""` returns the input unchanged in order.
pub fn filter_notes<'a, N: NoteQuery>(
    notes: &'a [N],
    query: &str,
    favorites_only: bool,
) -> Vec<&'a N> {
    let needle = query.trim().to_lowercase();

    notes
        .iter()
        .filter(|note| !favorites_only || note.favorite())
        .filter(|note| {
            needle.is_empty()
                || note.title().to_lowercase().contains(&needle)
                || note.content().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort notes by creation timestamp in the given order.
///
/// Sorting is stable, so notes sharing a timestamp keep their relative
/// order and a Newest-then-Oldest round trip reverses the list exactly.
pub fn sort_notes<N: NoteQuery>(notes: &mut [&N], order: SortOrder) {
    match order {
        SortOrder::Newest => notes.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortOrder::Oldest => notes.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
