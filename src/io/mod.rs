/// CSV export of weekly balance records.
pub mod export;
