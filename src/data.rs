mod place;
pub use place::*;

mod review;
pub use review::*;

mod user;
pub use user::*;
