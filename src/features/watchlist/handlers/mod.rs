pub mod watchlist_handler;

pub use watchlist_handler::{__path_get_watchlist, __path_toggle_watch, get_watchlist, toggle_watch};
