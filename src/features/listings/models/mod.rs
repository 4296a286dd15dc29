mod listing;

pub use listing::{Listing, ListingFilter, ListingStatus, NewListing};
