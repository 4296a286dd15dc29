mod watchlist_dto;

pub use watchlist_dto::WatchStatusDto;
