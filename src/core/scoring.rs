use super::constants::*;

/// Inclusive `[min, max]` band a metric must fall in to count as ideal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealRange {
    pub min: f32,
    pub max: f32,
}

impl IdealRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// HUD style for a value measured against this range.
    #[inline]
    pub fn hud_class(&self, value: f32) -> HudClass {
        if self.contains(value) {
            HudClass::Ideal
        } else if value > self.max {
            HudClass::TooFast
        } else {
            HudClass::TooSlow
        }
    }
}

pub const IDEAL_SPEED: IdealRange = IdealRange::new(IDEAL_SPEED_MIN_MM_S, IDEAL_SPEED_MAX_MM_S);
pub const IDEAL_FREQ: IdealRange = IdealRange::new(IDEAL_FREQ_MIN_HZ, IDEAL_FREQ_MAX_HZ);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudClass {
    Ideal,
    TooFast,
    TooSlow,
}

impl HudClass {
    pub fn css_class(self) -> &'static str {
        match self {
            HudClass::Ideal => "ideal",
            HudClass::TooFast => "too-fast",
            HudClass::TooSlow => "too-slow",
        }
    }
}

/// Bead feedback class, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeadClass {
    Ideal,
    SpeedOff,
    OscillationOff,
    InProgress,
}

impl BeadClass {
    pub fn color(self) -> &'static str {
        match self {
            BeadClass::Ideal => "#3CB371",
            BeadClass::SpeedOff => "#FF4500",
            BeadClass::OscillationOff => "#FFD700",
            BeadClass::InProgress => "#FFA500",
        }
    }
}

pub fn classify(
    speed: f32,
    freq: f32,
    speed_range: &IdealRange,
    freq_range: &IdealRange,
) -> BeadClass {
    if speed_range.contains(speed) && freq_range.contains(freq) {
        BeadClass::Ideal
    } else if !speed_range.contains(speed) {
        BeadClass::SpeedOff
    } else if !freq_range.contains(freq) {
        BeadClass::OscillationOff
    } else {
        BeadClass::InProgress
    }
}

/// Rendered bead width. Speed rules first; the oscillation overrides only
/// apply while speed is ideal, and the last matching rule wins.
pub fn bead_width(
    speed: f32,
    freq: f32,
    speed_range: &IdealRange,
    freq_range: &IdealRange,
) -> f32 {
    let mut width = BEAD_WIDTH_BASE;
    if speed > speed_range.max * FAST_FACTOR {
        width = BEAD_WIDTH_TOO_FAST;
    } else if speed < speed_range.min * SLOW_FACTOR {
        width = BEAD_WIDTH_TOO_SLOW;
    }
    if speed_range.contains(speed) {
        if freq < freq_range.min * SLOW_FACTOR {
            width = BEAD_WIDTH_SLOW_OSC;
        } else if freq > freq_range.max * FAST_FACTOR {
            width = BEAD_WIDTH_FAST_OSC;
        }
    }
    width
}

/// Time-weighted quality bookkeeping for one session (seconds).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionAccumulator {
    pub time_in_ideal_zone: f64,
    pub total_time_played: f64,
}

impl SessionAccumulator {
    pub fn add(&mut self, dt_sec: f64, ideal: bool) {
        self.total_time_played += dt_sec;
        if ideal {
            self.time_in_ideal_zone += dt_sec;
        }
    }

    /// `min(100, 100 * ideal / total)`, or 0 before any time was played.
    pub fn quality_percent_f64(&self) -> f64 {
        if self.total_time_played <= 0.0 {
            return 0.0;
        }
        let pct = 100.0 * self.time_in_ideal_zone / self.total_time_played;
        pct.clamp(0.0, 100.0)
    }

    /// Running score for the HUD.
    pub fn quality_percent(&self) -> f32 {
        self.quality_percent_f64() as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    NeedsPractice,
}

impl Verdict {
    /// Tier is judged on the value as displayed (one decimal).
    pub fn for_quality(quality_percent: f64) -> Self {
        let shown = round_to_tenth(quality_percent);
        if shown >= EXCELLENT_THRESHOLD {
            Verdict::Excellent
        } else if shown >= GOOD_THRESHOLD {
            Verdict::Good
        } else {
            Verdict::NeedsPractice
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent! You kept a perfectly consistent pass.",
            Verdict::Good => "Good work! A few small adjustments and it will be ideal.",
            Verdict::NeedsPractice => "Needs more practice coordinating advance and oscillation.",
        }
    }
}

/// Summary produced once when the torch reaches the end of the plate.
/// `quality_percent` is already rounded to the one decimal that is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalScore {
    pub quality_percent: f64,
    pub verdict: Verdict,
}

impl FinalScore {
    pub fn from_accumulator(acc: &SessionAccumulator) -> Self {
        let quality_percent = round_to_tenth(acc.quality_percent_f64());
        Self {
            quality_percent,
            verdict: Verdict::for_quality(quality_percent),
        }
    }
}

#[inline]
pub fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
