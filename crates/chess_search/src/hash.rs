//! Transposition table
//!
//! Caches search results by position key. The table is a power-of-two array of buckets with
//! [`TT_SLOTS`] entries each. A store to a key already in its bucket overwrites that slot;
//! otherwise the slot with the lowest priority (`depth * 10 + generation`) is replaced, so
//! shallow entries and entries from earlier searches go first.
//!
//! A lookup is only a usable hit when the stored depth is at least the requested depth. Shallower
//! entries stay in the table (their best move is still useful for ordering) but are not returned
//! by [`TranspositionTable::get`].

use crate::constants::{Score, MATE_THRESHOLD, TT_DEFAULT_ENTRIES, TT_SLOTS};
use crate::position::PositionKey;
use chess::ChessMove;
use tracing::trace;

/// How a stored value relates to the true score of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value is exact
    Exact,
    /// The search failed high: true score >= value
    LowerBound,
    /// The search failed low: true score <= value
    UpperBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry {
    pub key: PositionKey,
    pub value: Score,
    pub depth: u8,
    pub flag: Bound,
    pub best_move: Option<ChessMove>,
}

impl TranspositionEntry {
    pub fn new(key: PositionKey, value: Score, depth: u8, flag: Bound, best_move: Option<ChessMove>) -> Self {
        Self {
            key,
            value,
            depth,
            flag,
            best_move,
        }
    }

    /// Whether this entry settles a node searched with window `(alpha, beta)`
    pub fn cuts(&self, alpha: Score, beta: Score) -> bool {
        match self.flag {
            Bound::Exact => true,
            Bound::LowerBound => self.value >= beta,
            Bound::UpperBound => self.value <= alpha,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: TranspositionEntry,
    priority: u32,
}

type Bucket = [Option<Slot>; TT_SLOTS];

/// Fixed-capacity transposition table
#[derive(Debug, Clone)]
pub struct TranspositionTable {
    buckets: Vec<Bucket>,
    mask: usize,
    generation: u32,
    len: usize,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    /// Table holding at least `entries` entries (rounded up to a power-of-two bucket count)
    pub fn new(entries: usize) -> Self {
        let bucket_count = entries.div_ceil(TT_SLOTS).max(1).next_power_of_two();
        Self {
            buckets: vec![[None; TT_SLOTS]; bucket_count],
            mask: bucket_count - 1,
            generation: 0,
            len: 0,
            hits: 0,
            stores: 0,
        }
    }

    #[inline]
    fn bucket_index(&self, key: PositionKey) -> usize {
        (key as usize) & self.mask
    }

    /// Entry for `key` searched to at least `depth`
    pub fn get(&self, key: PositionKey, depth: u8) -> Option<&TranspositionEntry> {
        self.lookup(key).filter(|entry| entry.depth >= depth)
    }

    /// Entry for `key` at any depth
    pub fn lookup(&self, key: PositionKey) -> Option<&TranspositionEntry> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .flatten()
            .map(|slot| &slot.entry)
            .find(|entry| entry.key == key)
    }

    /// Store `entry` under `key`, overwriting any entry already held for that key
    pub fn put(&mut self, key: PositionKey, entry: TranspositionEntry) {
        let priority = entry.depth as u32 * 10 + self.generation;
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        // Same key, else an empty slot, else the lowest priority
        let target = bucket
            .iter()
            .position(|slot| matches!(slot, Some(s) if s.entry.key == key))
            .or_else(|| bucket.iter().position(Option::is_none))
            .unwrap_or_else(|| {
                bucket
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, slot)| slot.map_or(0, |s| s.priority))
                    .map_or(0, |(i, _)| i)
            });

        match &bucket[target] {
            None => self.len += 1,
            Some(old) if old.entry.key != key => {
                trace!(old_key = old.entry.key, new_key = key, "transposition slot replaced");
            }
            Some(_) => {}
        }

        bucket[target] = Some(Slot {
            entry: TranspositionEntry { key, ..entry },
            priority,
        });
        self.stores += 1;
    }

    /// Usable entry for a node `ply` plies below the root, mate scores rebased to that ply
    pub fn probe(&mut self, key: PositionKey, depth: u8, ply: usize) -> Option<TranspositionEntry> {
        let mut entry = *self.get(key, depth)?;
        entry.value = score_from_table(entry.value, ply);
        self.hits += 1;
        Some(entry)
    }

    /// Store a search result for a node `ply` plies below the root
    pub fn store(
        &mut self,
        key: PositionKey,
        value: Score,
        depth: u8,
        flag: Bound,
        best_move: Option<ChessMove>,
        ply: usize,
    ) {
        let entry = TranspositionEntry::new(key, score_to_table(value, ply), depth, flag, best_move);
        self.put(key, entry);
    }

    /// Best move recorded for `key`, whatever its depth
    pub fn best_move(&self, key: PositionKey) -> Option<ChessMove> {
        self.lookup(key).and_then(|entry| entry.best_move)
    }

    /// Age existing entries so a new search prefers to overwrite them
    pub fn new_search(&mut self) {
        self.generation = self.generation.saturating_add(1);
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [None; TT_SLOTS];
        }
        self.generation = 0;
        self.len = 0;
        self.hits = 0;
        self.stores = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len() * TT_SLOTS
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn stores(&self) -> u64 {
        self.stores
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(TT_DEFAULT_ENTRIES)
    }
}

/// Mate scores are stored as distance from the stored node rather than from the root
fn score_to_table(value: Score, ply: usize) -> Score {
    if value > MATE_THRESHOLD {
        value + ply as Score
    } else if value < -MATE_THRESHOLD {
        value - ply as Score
    } else {
        value
    }
}

fn score_from_table(value: Score, ply: usize) -> Score {
    if value > MATE_THRESHOLD {
        value - ply as Score
    } else if value < -MATE_THRESHOLD {
        value + ply as Score
    } else {
        value
    }
}
