mod about;
pub use about::*;

mod contact;
pub use contact::*;

mod discover;
pub use discover::*;

mod home;
pub use home::*;

mod login;
pub use login::*;

mod review;
pub use review::*;

mod signup;
pub use signup::*;
