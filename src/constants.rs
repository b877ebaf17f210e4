/// Web-side drawing and DOM constants.
///
/// Element ids match `index.html`; colors and guide geometry keep magic
/// numbers out of the drawing code.
// DOM element ids
pub const CANVAS_ID: &str = "welding-canvas";
pub const SPEED_VALUE_ID: &str = "speed-value";
pub const FREQ_VALUE_ID: &str = "frequency-value";
pub const QUALITY_SCORE_ID: &str = "quality-score";
pub const TRACKING_SCORE_ID: &str = "tracking-score";
pub const RESTART_BUTTON_ID: &str = "restart-button";

// Baseline
pub const BASELINE_COLOR: &str = "#555";
pub const BASELINE_WIDTH: f64 = 1.0;

// Oscillation guide (dashed sine wave)
pub const GUIDE_COLOR: &str = "#44A044";
pub const GUIDE_WIDTH: f64 = 2.0;
pub const GUIDE_AMPLITUDE_PX: f64 = 15.0;
pub const GUIDE_FREQ_PER_PX: f64 = 0.08; // radians per px along x
pub const GUIDE_DASH: [f64; 2] = [5.0, 5.0];

// Final summary overlay
pub const OVERLAY_BG: &str = "rgba(10, 14, 24, 0.85)";
pub const OVERLAY_TEXT: &str = "white";
pub const OVERLAY_FONT: &str = "30px Arial";
pub const OVERLAY_LINE_GAP_PX: f64 = 40.0;
