// Host-side tests for bead classification and quality scoring.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod sim;

use sim::*;

fn width(speed: f32, freq: f32) -> f32 {
    bead_width(speed, freq, &IDEAL_SPEED, &IDEAL_FREQ)
}

fn class(speed: f32, freq: f32) -> BeadClass {
    classify(speed, freq, &IDEAL_SPEED, &IDEAL_FREQ)
}

#[test]
fn ideal_zone_is_green_regardless_of_bounds_used() {
    for speed in [30.0, 32.5, 35.0] {
        for freq in [60.0, 62.0, 65.0] {
            assert_eq!(class(speed, freq), BeadClass::Ideal);
        }
    }
    assert_eq!(BeadClass::Ideal.color(), "#3CB371");
}

#[test]
fn speed_violation_outranks_frequency_violation() {
    assert_eq!(class(17.5, 0.0), BeadClass::SpeedOff);
    assert_eq!(class(40.0, 62.0), BeadClass::SpeedOff);
    assert_eq!(class(32.0, 80.0), BeadClass::OscillationOff);
    assert_eq!(class(32.0, 10.0), BeadClass::OscillationOff);
    assert_eq!(BeadClass::SpeedOff.color(), "#FF4500");
    assert_eq!(BeadClass::OscillationOff.color(), "#FFD700");
}

#[test]
fn speed_width_rules_use_exclusive_bounds() {
    // 0.5 x 30 = 15 and 1.5 x 35 = 52.5
    assert_eq!(width(17.5, 0.0), BEAD_WIDTH_BASE);
    assert_eq!(width(15.0, 0.0), BEAD_WIDTH_BASE);
    assert_eq!(width(14.9, 0.0), BEAD_WIDTH_TOO_SLOW);
    assert_eq!(width(52.5, 0.0), BEAD_WIDTH_BASE);
    assert_eq!(width(53.0, 0.0), BEAD_WIDTH_TOO_FAST);
}

#[test]
fn oscillation_width_rules_apply_only_at_ideal_speed() {
    // 0.5 x 60 = 30 and 1.5 x 65 = 97.5
    assert_eq!(width(32.0, 29.0), BEAD_WIDTH_SLOW_OSC);
    assert_eq!(width(32.0, 30.0), BEAD_WIDTH_BASE);
    assert_eq!(width(32.0, 98.0), BEAD_WIDTH_FAST_OSC);
    assert_eq!(width(32.0, 62.0), BEAD_WIDTH_BASE);
    // slow speed keeps its own width even with a slow oscillation
    assert_eq!(width(10.0, 5.0), BEAD_WIDTH_TOO_SLOW);
    assert_eq!(width(60.0, 200.0), BEAD_WIDTH_TOO_FAST);
}

#[test]
fn hud_class_reports_direction_of_miss() {
    assert_eq!(IDEAL_SPEED.hud_class(32.0), HudClass::Ideal);
    assert_eq!(IDEAL_SPEED.hud_class(40.0), HudClass::TooFast);
    assert_eq!(IDEAL_SPEED.hud_class(17.5), HudClass::TooSlow);
    assert_eq!(IDEAL_FREQ.hud_class(0.0).css_class(), "too-slow");
    assert_eq!(IDEAL_FREQ.hud_class(90.0).css_class(), "too-fast");
    assert_eq!(IDEAL_FREQ.hud_class(61.0).css_class(), "ideal");
}

#[test]
fn quality_is_zero_before_any_play() {
    let acc = SessionAccumulator::default();
    assert_eq!(acc.quality_percent(), 0.0);
}

#[test]
fn quality_is_time_weighted() {
    let mut acc = SessionAccumulator::default();
    acc.add(0.75, true);
    acc.add(0.25, false);
    assert!((acc.quality_percent() - 75.0).abs() < 1e-4);
    assert!(acc.time_in_ideal_zone <= acc.total_time_played);

    acc.reset();
    assert_eq!(acc.time_in_ideal_zone, 0.0);
    assert_eq!(acc.total_time_played, 0.0);
}

#[test]
fn quality_never_exceeds_one_hundred() {
    let mut acc = SessionAccumulator::default();
    for _ in 0..1000 {
        acc.add(0.016, true);
    }
    let q = acc.quality_percent();
    assert!(q <= 100.0 && q > 99.9);
}

#[test]
fn verdict_tiers_follow_displayed_value() {
    assert_eq!(Verdict::for_quality(100.0), Verdict::Excellent);
    assert_eq!(Verdict::for_quality(90.0), Verdict::Excellent);
    assert_eq!(Verdict::for_quality(89.96), Verdict::Excellent); // shows as 90.0
    assert_eq!(Verdict::for_quality(89.94), Verdict::Good);
    assert_eq!(Verdict::for_quality(70.0), Verdict::Good);
    assert_eq!(Verdict::for_quality(69.9), Verdict::NeedsPractice);
    assert_eq!(Verdict::for_quality(0.0), Verdict::NeedsPractice);
}

#[test]
fn final_score_and_verdict_agree_at_the_rounding_edge() {
    // 1799 / 2000 is 89.95%, which displays as 90.0
    let mut acc = SessionAccumulator::default();
    acc.add(1799.0, true);
    acc.add(201.0, false);
    let s = FinalScore::from_accumulator(&acc);
    assert_eq!(format!("{:.1}", s.quality_percent), "90.0");
    assert_eq!(s.verdict, Verdict::Excellent);
    assert_eq!(Verdict::for_quality(s.quality_percent), s.verdict);
}

#[test]
fn final_score_is_stored_at_display_precision() {
    let mut acc = SessionAccumulator::default();
    acc.add(1.0, true);
    acc.add(2.0, false);
    let s = FinalScore::from_accumulator(&acc);
    assert_eq!(s.quality_percent, 33.3);
    assert_eq!(s.verdict, Verdict::NeedsPractice);
}

#[test]
fn final_score_reads_the_accumulator() {
    let mut acc = SessionAccumulator::default();
    acc.add(1.0, true);
    acc.add(1.0, false);
    let s = FinalScore::from_accumulator(&acc);
    assert!((s.quality_percent - 50.0).abs() < 1e-4);
    assert_eq!(s.verdict, Verdict::NeedsPractice);
    assert!(!s.verdict.message().is_empty());
}
