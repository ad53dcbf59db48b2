pub mod access;
pub mod constants;
pub mod navigation;
pub mod theme;
pub mod toast;
pub mod user;

pub use access::*;
pub use constants::*;
pub use navigation::*;
pub use theme::*;
pub use toast::*;
pub use user::*;
