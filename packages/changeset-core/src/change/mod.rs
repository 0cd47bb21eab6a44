//! Change records and the item descriptors they carry.

#[allow(clippy::module_inception)]
mod change;
mod render_info;

pub use change::{Change, ChangeType};
pub use render_info::RenderInfo;
