// DOM hooks expected in the host page

pub const CANVAS_ID: &str = "field-canvas";
pub const SECTION_SELECTOR: &str = "[data-section]";
pub const DOTS_CONTAINER_ID: &str = "section-dots";
pub const ACTIVE_CLASS: &str = "active";
pub const DOT_CLASS: &str = "section-dot";

// CSS custom property carrying the section transition duration
pub const TRANSITION_CSS_VAR: &str = "--section-transition";
