//! Listing categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories/?category=<title>` | All categories, plus open listings of one |
//! | POST | `/categories/new/` | Create a category (staff) |
//! | POST | `/categories/{id}/delete/` | Delete a category (staff) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::CategoryService;
