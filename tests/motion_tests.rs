// Host-side tests for speed and peak-history estimation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod sim;

use sim::*;

#[test]
fn advance_speed_scales_pixels_to_mm() {
    let v = advance_speed_mm_s(35.0, 1.0, PIXEL_TO_MM);
    assert!((v - 17.5).abs() < 1e-5);
}

#[test]
fn advance_speed_is_non_negative_for_backward_motion() {
    let v = advance_speed_mm_s(-20.0, 0.5, PIXEL_TO_MM);
    assert!((v - 20.0).abs() < 1e-5);
}

#[test]
fn small_vertical_motion_is_not_a_peak() {
    let mut h = PeakHistory::default();
    assert!(!h.observe(5.0, 0.0)); // threshold is exclusive
    assert!(!h.observe(-3.0, 10.0));
    assert!(h.is_empty());
    assert_eq!(h.frequency_hz(), 0.0);
}

#[test]
fn single_peak_gives_zero_frequency() {
    let mut h = PeakHistory::default();
    assert!(h.observe(12.0, 100.0));
    assert_eq!(h.len(), 1);
    assert_eq!(h.frequency_hz(), 0.0);
}

#[test]
fn any_large_delta_counts_same_direction_moves() {
    let mut h = PeakHistory::default();
    for t in [0.0, 10.0, 20.0] {
        assert!(h.observe(8.0, t));
    }
    // 2 intervals over 20 ms
    assert_eq!(h.len(), 3);
    assert!((h.frequency_hz() - 100.0).abs() < 1e-3);
}

#[test]
fn peaks_older_than_window_are_evicted() {
    let mut h = PeakHistory::default();
    h.observe(10.0, 0.0);
    h.observe(10.0, 100.0);
    h.observe(10.0, 500.0);
    // 0 ms is 500 ms old (> 400), 100 ms is exactly 400 ms old and stays
    assert_eq!(h.len(), 2);
    assert!((h.frequency_hz() - 2.5).abs() < 1e-4);
}

#[test]
fn direction_reversal_mode_only_counts_sign_changes() {
    let mut h = PeakHistory::new(400.0, 5.0, PeakDetection::DirectionReversal);
    let strokes = [
        (10.0, 0.0),
        (10.0, 10.0),
        (-10.0, 20.0),
        (-10.0, 30.0),
        (10.0, 40.0),
    ];
    let recorded: Vec<bool> = strokes.iter().map(|&(dy, t)| h.observe(dy, t)).collect();
    assert_eq!(recorded, vec![true, false, true, false, true]);
    assert_eq!(h.len(), 3);
    // 2 intervals over 40 ms
    assert!((h.frequency_hz() - 50.0).abs() < 1e-3);
}

#[test]
fn direction_reversal_ignores_small_wobble_between_swings() {
    let mut h = PeakHistory::new(400.0, 5.0, PeakDetection::DirectionReversal);
    assert!(h.observe(10.0, 0.0));
    assert!(!h.observe(-2.0, 5.0)); // below threshold, direction memory unchanged
    assert!(!h.observe(9.0, 10.0));
    assert!(h.observe(-9.0, 20.0));
}
