// DOM ids, selectors and classes the page markup provides.

// Sound toggle
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SOUND_ICON_SELECTOR: &str = "i";
pub const HOVER_SELECTOR: &str = "[data-hover]";

// Background
pub const CANVAS_ID: &str = "particles-canvas";
pub const BACKGROUND_ATTR: &str = "data-background";

// Cursor
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".character-cursor";
pub const ACTIVE_CLASS: &str = "active";

// Typewriter
pub const TYPED_TEXT_ID: &str = "typed-text";
pub const PHRASES_ATTR: &str = "data-phrases";

// Navigation
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_LINK_SELECTOR: &str = "#nav-links a";
pub const MENU_ICON_SELECTOR: &str = "i";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Footer / hero
pub const YEAR_ID: &str = "year";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const GLITCH_CLASS: &str = "glitch";
pub const GLITCH_TEXT_ATTR: &str = "data-text";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_SUCCESS_ID: &str = "form-success";
pub const SHOW_CLASS: &str = "show";

// Reveal on scroll
pub const SECTION_SELECTOR: &str = ".section";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";
