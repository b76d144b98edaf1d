//! Screen controllers.

pub mod detail;
pub mod home;
pub mod screen;
pub mod view_state;

pub use view_state::ViewState;
