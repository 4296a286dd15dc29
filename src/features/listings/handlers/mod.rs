pub mod listing_handler;

pub use listing_handler::{
    __path_close_listing, __path_create_listing, __path_get_listing, __path_list_active,
    __path_list_closed, close_listing, create_listing, get_listing, list_active, list_closed,
};
