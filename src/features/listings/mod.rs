//! Auction listings.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Active listings, newest first |
//! | GET | `/listing/closed/` | Finished listings, soonest ended first |
//! | GET | `/listing/{id}/` | Listing page with bids and comments |
//! | POST | `/listing/create/` | Create a listing |
//! | POST | `/listing/{id}/close/` | Owner closes the auction |

pub mod dtos;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ListingService;
