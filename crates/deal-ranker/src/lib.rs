//! Deal Ranker
//!
//! Orders a watchlist by how good a buy each stock is right now,
//! measured against the user's target price.

pub mod ranker;

pub use ranker::WatchlistRanker;
