mod get_executive_view;
mod get_user_view;

pub use get_executive_view::*;
pub use get_user_view::*;
