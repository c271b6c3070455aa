mod central_panel;
pub mod dialogs;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::{Notification, ResizeDialog};
pub use tools_panel::tools_panel;
