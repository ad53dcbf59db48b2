pub mod menu;
pub mod tree;

pub use menu::default_menu;
pub use tree::{expanded_titles, find_parents, visible_menu};
