pub mod dtos;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::WatchlistService;
