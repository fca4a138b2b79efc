/// Component module exports
pub mod checklist;
pub mod theme;

pub use checklist::{check_item_line, CheckItem};
pub use theme::{accent, border_style, dim, title_span};
