pub mod reducer;
pub mod toaster;

pub use reducer::{reduce, ToastAction};
pub use toaster::{ToastHandle, Toaster};
