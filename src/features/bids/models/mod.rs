mod bid;

pub use bid::{Bid, BidWithBidder, NewBid};
