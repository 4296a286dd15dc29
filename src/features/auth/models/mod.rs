mod authenticated_user;
mod session;
mod user;

pub use authenticated_user::{AuthenticatedUser, SessionClaims};
pub use session::Session;
pub use user::{NewUser, User};
