use super::constants::*;
use super::motion::{advance_speed_mm_s, PeakDetection, PeakHistory, PointerSample};
use super::scoring::{
    bead_width, classify, BeadClass, FinalScore, HudClass, IdealRange, SessionAccumulator,
    IDEAL_FREQ, IDEAL_SPEED,
};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct SessionParams {
    pub ideal_speed: IdealRange,
    pub ideal_freq: IdealRange,
    pub px_to_mm: f32,
    pub peak_min_delta_px: f32,
    pub peak_window_ms: f64,
    pub peak_detection: PeakDetection,
    pub end_x_fraction: f32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            ideal_speed: IDEAL_SPEED,
            ideal_freq: IDEAL_FREQ,
            px_to_mm: PIXEL_TO_MM,
            peak_min_delta_px: PEAK_MIN_DELTA_PX,
            peak_window_ms: PEAK_DETECTION_WINDOW_MS,
            peak_detection: PeakDetection::AnyLargeDelta,
            end_x_fraction: END_X_FRACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Finished,
}

/// Segment of deposited weld material to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bead {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub class: BeadClass,
}

/// Everything the display needs after one accepted sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleReport {
    pub speed_mm_s: f32,
    pub freq_hz: f32,
    pub speed_class: HudClass,
    pub freq_class: HudClass,
    pub bead: Bead,
    pub quality_percent: f32,
    pub finished: Option<FinalScore>,
}

/// State of one welding pass: previous sample, peak history, accumulators
/// and run flag. Mutated in place by [`WeldSession::process`].
#[derive(Clone, Debug)]
pub struct WeldSession {
    pub params: SessionParams,
    surface: Vec2,
    last: PointerSample,
    peaks: PeakHistory,
    acc: SessionAccumulator,
    state: RunState,
}

impl WeldSession {
    /// Start a pass on a `width` x `height` surface at clock time `now_ms`.
    pub fn new(params: SessionParams, width: f32, height: f32, now_ms: f64) -> Self {
        let mut s = Self {
            peaks: peak_history_for(&params),
            params,
            surface: Vec2::new(width, height),
            last: PointerSample::new(0.0, 0.0, now_ms),
            acc: SessionAccumulator::default(),
            state: RunState::Running,
        };
        s.restart(now_ms);
        s
    }

    /// Reset every accumulator and put the torch back at the start position.
    /// Picks up any change made to `params` since the last start.
    pub fn restart(&mut self, now_ms: f64) {
        self.last = PointerSample::new(
            self.surface.x * START_X_FRACTION,
            self.surface.y * START_Y_FRACTION,
            now_ms,
        );
        self.peaks = peak_history_for(&self.params);
        self.acc.reset();
        self.state = RunState::Running;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn last_sample(&self) -> PointerSample {
        self.last
    }

    pub fn accumulator(&self) -> &SessionAccumulator {
        &self.acc
    }

    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    pub fn quality_percent(&self) -> f32 {
        self.acc.quality_percent()
    }

    /// Process one pointer sample. Returns `None` when the session is
    /// finished or the sample carries no elapsed time.
    pub fn process(&mut self, sample: PointerSample) -> Option<SampleReport> {
        if self.state == RunState::Finished {
            return None;
        }
        let dt_sec = (sample.t_ms - self.last.t_ms) / 1000.0;
        if dt_sec == 0.0 {
            return None;
        }

        let delta = sample.pos - self.last.pos;
        let speed = advance_speed_mm_s(delta.x, dt_sec, self.params.px_to_mm);
        self.peaks.observe(delta.y, sample.t_ms);
        let freq = self.peaks.frequency_hz();

        let p = &self.params;
        let bead = Bead {
            from: self.last.pos,
            to: sample.pos,
            width: bead_width(speed, freq, &p.ideal_speed, &p.ideal_freq),
            class: classify(speed, freq, &p.ideal_speed, &p.ideal_freq),
        };
        let speed_class = p.ideal_speed.hud_class(speed);
        let freq_class = p.ideal_freq.hud_class(freq);

        self.last = sample;
        self.acc.add(dt_sec, bead.class == BeadClass::Ideal);

        let finished = if sample.pos.x >= self.surface.x * self.params.end_x_fraction {
            self.state = RunState::Finished;
            Some(FinalScore::from_accumulator(&self.acc))
        } else {
            None
        };

        Some(SampleReport {
            speed_mm_s: speed,
            freq_hz: freq,
            speed_class,
            freq_class,
            bead,
            quality_percent: self.acc.quality_percent(),
            finished,
        })
    }
}

fn peak_history_for(params: &SessionParams) -> PeakHistory {
    PeakHistory::new(
        params.peak_window_ms * 2.0,
        params.peak_min_delta_px,
        params.peak_detection,
    )
}
