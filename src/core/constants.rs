// Simulation tuning constants shared by the processor and the web frontend.

// Ideal zone
pub const IDEAL_SPEED_MIN_MM_S: f32 = 30.0;
pub const IDEAL_SPEED_MAX_MM_S: f32 = 35.0;
pub const IDEAL_FREQ_MIN_HZ: f32 = 60.0;
pub const IDEAL_FREQ_MAX_HZ: f32 = 65.0;

// Pixel to physical scale (1 px = 0.5 mm)
pub const PIXEL_TO_MM: f32 = 0.5;

// Peak detection
pub const PEAK_MIN_DELTA_PX: f32 = 5.0; // vertical delta that counts as a peak
pub const PEAK_DETECTION_WINDOW_MS: f64 = 200.0; // history spans twice this

// Bead widths (px)
pub const BEAD_WIDTH_BASE: f32 = 8.0;
pub const BEAD_WIDTH_TOO_FAST: f32 = 4.0;
pub const BEAD_WIDTH_TOO_SLOW: f32 = 12.0;
pub const BEAD_WIDTH_SLOW_OSC: f32 = 10.0;
pub const BEAD_WIDTH_FAST_OSC: f32 = 6.0;

// Width rule multipliers applied to the ideal bounds
pub const FAST_FACTOR: f32 = 1.5;
pub const SLOW_FACTOR: f32 = 0.5;

// Session layout, as fractions of the surface
pub const START_X_FRACTION: f32 = 0.10;
pub const START_Y_FRACTION: f32 = 0.50;
pub const END_X_FRACTION: f32 = 0.95;

// Final verdict tiers (percent)
pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const GOOD_THRESHOLD: f64 = 70.0;

// Stub: tracking against the baseline is not computed yet.
pub const TRACKING_SCORE_PLACEHOLDER: f32 = 90.0;
