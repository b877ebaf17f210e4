use crate::constants::{FREQ_VALUE_ID, QUALITY_SCORE_ID, SPEED_VALUE_ID, TRACKING_SCORE_ID};
use crate::core::{SampleReport, TRACKING_SCORE_PLACEHOLDER};
use crate::dom;
use web_sys as web;

/// Live speed and frequency readouts, styled by their ideal-range class.
pub fn update_metrics(document: &web::Document, report: &SampleReport) {
    dom::set_text_with_class(
        document,
        SPEED_VALUE_ID,
        &format!("{:.1}", report.speed_mm_s),
        Some(report.speed_class.css_class()),
    );
    dom::set_text_with_class(
        document,
        FREQ_VALUE_ID,
        &format!("{:.1}", report.freq_hz),
        Some(report.freq_class.css_class()),
    );
}

pub fn update_scores(document: &web::Document, quality_percent: f32) {
    dom::set_text_with_class(
        document,
        QUALITY_SCORE_ID,
        &format!("{:.0}%", quality_percent),
        None,
    );
    // Tracking is a fixed stub until baseline distance is measured.
    dom::set_text_with_class(
        document,
        TRACKING_SCORE_ID,
        &format!("{:.0}%", TRACKING_SCORE_PLACEHOLDER),
        None,
    );
}

/// Blank the readouts at session start.
pub fn reset(document: &web::Document) {
    for id in [SPEED_VALUE_ID, FREQ_VALUE_ID] {
        dom::set_text_with_class(document, id, "0.0", Some(""));
    }
    update_scores(document, 0.0);
}
