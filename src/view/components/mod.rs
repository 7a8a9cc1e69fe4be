pub mod banner;
pub mod footer;
pub mod form;
pub mod format;
pub mod header;
pub mod help_overlay;
pub mod popup;

pub use banner::{banner_height, render_banner};
pub use footer::render_footer;
pub use form::{form_lines, render_form_popup};
pub use header::render_header;
pub use help_overlay::render_help_overlay;
pub use popup::{centered_rect, render_confirm};
