//! Shared numeric and string constants for the carousel crate.

// ── Swipe ───────────────────────────────────────────────────────

/// Minimum horizontal travel, in CSS pixels, before a touch counts as a swipe.
pub const SWIPE_MIN_DX_PX: f64 = 40.0;

/// Vertical travel, in CSS pixels, at or above which a touch is treated as a scroll.
pub const SWIPE_MAX_DY_PX: f64 = 50.0;

// ── Image pipeline ──────────────────────────────────────────────

/// 1×1 transparent GIF. Always decodable, so it terminates the fallback chain.
pub const PLACEHOLDER_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

/// Query parameter used to defeat a stale cached response on retry.
pub const CACHE_BUST_PARAM: &str = "v";

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width above which the desktop nav is shown and the mobile menu closes.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 768.0;

/// How long the menu toggle keeps its star flash on touch devices.
pub const MENU_STAR_FLASH_MS: u32 = 2_000;

/// Fraction of the distance from viewport center applied as parallax shift.
pub const PARALLAX_FACTOR: f64 = 0.05;

/// Parallax shift is clamped to ± this many pixels.
pub const PARALLAX_MAX_SHIFT_PX: f64 = 30.0;

// ── Reveal thresholds ───────────────────────────────────────────

pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;
pub const WORKFLOW_REVEAL_THRESHOLD: f64 = 0.25;
pub const RESUME_REVEAL_THRESHOLD: f64 = 0.2;
pub const HERO_REPLAY_THRESHOLD: f64 = 0.6;
pub const SECTION_ACTIVE_THRESHOLD: f64 = 0.6;

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key for the dark-mode flag.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "darkMode";
