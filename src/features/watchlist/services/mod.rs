mod watchlist_service;

pub use watchlist_service::WatchlistService;
