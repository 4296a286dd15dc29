pub mod bid_handler;

pub use bid_handler::{__path_place_bid, place_bid};
