mod auth_switch;
pub use auth_switch::*;

mod place;
pub use place::*;

mod review_form;
pub use review_form::*;
