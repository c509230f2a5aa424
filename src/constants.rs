// Browser-side timing and DOM wiring constants.
// Simulation tuning lives in `core/constants.rs`.

// Timers
pub const MODULATION_INTERVAL_MS: i32 = 50;
pub const NOTIFICATION_MS: i32 = 3000;

// Element ids
pub const CANVAS_ID: &str = "background-canvas";
pub const CONTROLS_PANEL_ID: &str = "controls-panel";
pub const CONTROLS_TOGGLE_ID: &str = "controls-toggle";
pub const LOGO_ID: &str = "logo";
pub const LOGO_BOUNDS_ID: &str = "logo-bounds";
pub const NOTIFICATION_ID: &str = "notification";
pub const MODULATION_BANNER_ID: &str = "modulation-banner";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

// Canvas attribute selecting the animation ("rings" | "floating")
pub const VARIANT_ATTR: &str = "data-variant";

// Clicks inside these never toggle modulate-all
pub const CLICK_EXEMPT_SELECTOR: &str = ".controls-panel, .logo-container, .controls-toggle";

// User-facing messages
pub const MSG_COPY_OK: &str = "URL with settings copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy URL. See console for details.";
pub const MSG_ALL_MODULATED: &str = "All modulation active - tap anywhere to stop";
