use super::constants::{PEAK_DETECTION_WINDOW_MS, PEAK_MIN_DELTA_PX};
use glam::Vec2;
use std::collections::VecDeque;

/// One pointer position in canvas pixels, stamped with a monotonic clock (ms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub t_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, t_ms: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            t_ms,
        }
    }
}

/// How vertical motion is turned into peak timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeakDetection {
    /// Every sample whose vertical delta exceeds the threshold is a peak,
    /// whatever its direction. Default scoring behavior.
    #[default]
    AnyLargeDelta,
    /// Only a large delta whose sign differs from the previous large delta.
    DirectionReversal,
}

/// Horizontal advance speed in mm/s. `dt_sec` must be non-zero.
#[inline]
pub fn advance_speed_mm_s(dx_px: f32, dt_sec: f64, px_to_mm: f32) -> f32 {
    ((dx_px * px_to_mm) as f64 / dt_sec).abs() as f32
}

/// Sliding window of peak timestamps used to estimate oscillation frequency.
#[derive(Clone, Debug)]
pub struct PeakHistory {
    peaks: VecDeque<f64>,
    span_ms: f64,
    min_delta_px: f32,
    mode: PeakDetection,
    last_dir: Option<bool>,
}

impl Default for PeakHistory {
    fn default() -> Self {
        Self::new(
            PEAK_DETECTION_WINDOW_MS * 2.0,
            PEAK_MIN_DELTA_PX,
            PeakDetection::default(),
        )
    }
}

impl PeakHistory {
    pub fn new(span_ms: f64, min_delta_px: f32, mode: PeakDetection) -> Self {
        Self {
            peaks: VecDeque::with_capacity(32),
            span_ms,
            min_delta_px,
            mode,
            last_dir: None,
        }
    }

    /// Feed the vertical delta of a sample taken at `t_ms`.
    /// Returns true when a peak was recorded.
    pub fn observe(&mut self, dy_px: f32, t_ms: f64) -> bool {
        if dy_px.abs() <= self.min_delta_px {
            return false;
        }
        let down = dy_px > 0.0;
        let is_peak = match self.mode {
            PeakDetection::AnyLargeDelta => true,
            PeakDetection::DirectionReversal => self.last_dir.map_or(true, |d| d != down),
        };
        self.last_dir = Some(down);
        if !is_peak {
            return false;
        }
        self.peaks.push_back(t_ms);
        while let Some(&front) = self.peaks.front() {
            if t_ms - front > self.span_ms {
                self.peaks.pop_front();
            } else {
                break;
            }
        }
        true
    }

    /// Peaks per second over the retained window; 0 with fewer than two peaks.
    pub fn frequency_hz(&self) -> f32 {
        match (self.peaks.front(), self.peaks.back()) {
            (Some(&first), Some(&last)) if self.peaks.len() >= 2 => {
                let span_sec = (last - first) / 1000.0;
                if span_sec > 0.0 {
                    ((self.peaks.len() - 1) as f64 / span_sec) as f32
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}

