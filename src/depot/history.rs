//! In-memory record of recent search queries.
//!
//! Strictly advisory: a recommendation hook, not part of the search contract.
//! The table is bounded (LRU by raw query string), lives on the [`crate::api::Depot`]
//! instance, and is gone on process exit.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct QueryRecord {
    pub query: String,
    pub folder: Option<String>,
    pub total_count: usize,
    pub recorded_at: DateTime<Utc>,
}

/// Fixed-capacity, most-recent-last query log.
#[derive(Debug)]
pub struct QueryHistory {
    capacity: usize,
    entries: VecDeque<QueryRecord>,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl QueryHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Record a query outcome, refreshing its recency if the same raw query
    /// was seen before. Evicts the least recently seen entry at capacity.
    pub fn record(&mut self, query: &str, folder: Option<&str>, total_count: usize) {
        if let Some(pos) = self.entries.iter().position(|r| r.query == query) {
            self.entries.remove(pos);
        }
        self.entries.push_back(QueryRecord {
            query: query.to_string(),
            folder: folder.map(str::to_string),
            total_count,
            recorded_at: Utc::now(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn get(&self, query: &str) -> Option<&QueryRecord> {
        self.entries.iter().find(|r| r.query == query)
    }

    /// Up to `n` records, most recent first.
    pub fn recent(&self, n: usize) -> Vec<&QueryRecord> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
