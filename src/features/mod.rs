pub mod auth;
pub mod bids;
pub mod categories;
pub mod comments;
pub mod listings;
pub mod watchlist;
