// Shared tuning constants for the page effects.

// Background density: one point per this many square pixels
pub const NETWORK_AREA_PER_POINT: f32 = 9000.0;
pub const GLOW_AREA_PER_POINT: f32 = 25000.0;

// Motion is authored in px per frame at this rate; tick() rescales by dt
pub const REFERENCE_FPS: f32 = 60.0;
// Upper bound on one point set; an 8K network background needs ~3700
pub const MAX_POINTS: usize = 4096;
// Cap on reference frames integrated in one tick (long stalls, hidden tabs)
pub const MAX_FRAMES_PER_TICK: f32 = 3.0;

// Connected-particle network
pub const NETWORK_LINK_DISTANCE: f32 = 100.0;
pub const NETWORK_LINK_WIDTH: f32 = 0.5;
pub const NETWORK_POINTER_DISTANCE: f32 = 150.0;
pub const NETWORK_POINTER_WIDTH: f32 = 0.8;
pub const NETWORK_MIN_RADIUS: f32 = 1.0;
pub const NETWORK_RADIUS_SPAN: f32 = 2.0;
pub const NETWORK_MAX_SPEED: f32 = 0.5; // per axis, px per reference frame

// Cursor glow field
pub const GLOW_INFLUENCE_DISTANCE: f32 = 200.0;
pub const GLOW_GRADIENT_RADIUS: f32 = 300.0;
pub const GLOW_FOLLOW_TAU_SEC: f32 = 0.16; // ~0.1 of the gap per 60 Hz frame
pub const GLOW_MIN_RADIUS: f32 = 0.5;
pub const GLOW_RADIUS_SPAN: f32 = 1.5;
pub const GLOW_MAX_SPEED: f32 = 0.15;
pub const GLOW_MIN_OPACITY: f32 = 0.1;
pub const GLOW_OPACITY_SPAN: f32 = 0.5;
pub const GLOW_RADIUS_BOOST: f32 = 2.0;
pub const GLOW_OPACITY_BOOST: f32 = 0.6;
pub const GLOW_CENTER_ALPHA: f32 = 0.15;

// Accent colour (#00f3ff)
pub const ACCENT_RGB: [u8; 3] = [0, 243, 255];

// Tone envelopes
pub const HOVER_START_HZ: f32 = 400.0;
pub const HOVER_END_HZ: f32 = 600.0;
pub const HOVER_GAIN: f32 = 0.05;
pub const HOVER_DURATION_SEC: f64 = 0.10;
pub const CLICK_START_HZ: f32 = 300.0;
pub const CLICK_END_HZ: f32 = 100.0;
pub const CLICK_GAIN: f32 = 0.1;
pub const CLICK_DURATION_SEC: f64 = 0.15;
// Exponential ramps cannot reach zero
pub const RELEASE_GAIN: f32 = 0.001;

// Icon classes (Font Awesome)
pub const ICON_SOUND_ON: &str = "fa-volume-up";
pub const ICON_SOUND_OFF: &str = "fa-volume-mute";
pub const ICON_MENU_CLOSED: &str = "fa-bars";
pub const ICON_MENU_OPEN: &str = "fa-times";

// Typewriter defaults (milliseconds)
pub const TYPING_INTERVAL_MS: u64 = 100;
pub const DELETING_INTERVAL_MS: u64 = 50;
pub const FULL_PHRASE_PAUSE_MS: u64 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u64 = 500;
pub const DEFAULT_PHRASES: [&str; 4] = [
    "Full-Stack Developer",
    "Creative Coder",
    "UI/UX Enthusiast",
    "Problem Solver",
];

// Cursor follower lag
pub const FOLLOWER_DELAY_MS: u64 = 80;

// Page chrome
pub const SUCCESS_BANNER_MS: u64 = 4000;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
