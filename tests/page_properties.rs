use proptest::prelude::*;

use tangent_site::counter::{Counter, Frame, OnceLatch};
use tangent_site::nav::{active_section, is_scrolled, SectionBounds, ACTIVE_LINK_OFFSET};
use tangent_site::quote::prefill;
use tangent_site::reveal::RevealSet;

fn run_to_completion(target: f64) -> Vec<Frame> {
    let mut counter = Counter::new(target);
    let mut frames = Vec::new();
    loop {
        let frame = counter.step();
        frames.push(frame);
        if frame.is_finished() {
            return frames;
        }
        assert!(frames.len() < 1_000, "counter for {} never finished", target);
    }
}

/// Contiguous sections laid out top to bottom from the given heights.
fn stacked(heights: &[f64]) -> Vec<SectionBounds> {
    let mut top = 0.0;
    heights
        .iter()
        .map(|&height| {
            let bounds = SectionBounds::new(top, height);
            top += height;
            bounds
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn navbar_scrolled_iff_past_threshold(y in -1_000.0f64..100_000.0) {
        prop_assert_eq!(is_scrolled(y), y > 50.0);
    }

    #[test]
    fn counter_lands_on_target_without_overshoot(target in 0u32..5_000_000) {
        let target = target as f64;
        let frames = run_to_completion(target);

        prop_assert_eq!(frames.last().copied(), Some(Frame::Finished(target)));
        let mut previous = 0.0;
        for frame in &frames {
            prop_assert!(frame.value() >= previous);
            prop_assert!(frame.value() <= target);
            previous = frame.value();
        }
    }

    #[test]
    fn one_section_at_most_is_active(
        heights in prop::collection::vec(1.0f64..2_000.0, 1..12),
        y in 0.0f64..30_000.0,
    ) {
        let sections = stacked(&heights);
        let probe = y + ACTIVE_LINK_OFFSET;
        let containing: Vec<usize> = sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.contains(probe))
            .map(|(i, _)| i)
            .collect();

        match active_section(y, &sections) {
            Some(index) => {
                prop_assert!(sections[index].contains(probe));
                prop_assert_eq!(containing.last().copied(), Some(index));
            }
            None => prop_assert!(containing.is_empty()),
        }
        if containing.len() == 1 {
            prop_assert_eq!(active_section(y, &sections), Some(containing[0]));
        }
    }
}

#[test]
fn counter_animation_starts_once() {
    let latch = OnceLatch::new();
    let starts = (0..5).filter(|_| latch.fire()).count();
    assert_eq!(starts, 1);
}

#[test]
fn service_button_prefills_matching_option() {
    let options = ["", "Data Pipeline Audit", "Analytics Dashboard"];
    let plan = prefill(Some("Data Pipeline Audit"), options).expect("subject present");
    assert_eq!(plan.service.as_deref(), Some("Data Pipeline Audit"));
    assert_eq!(
        plan.subject_line,
        "Inquiry: Data Pipeline Audit - Tangent Analytics"
    );
}

#[test]
fn sibling_cards_reveal_staggered_once() {
    let cards = ["first", "second", "third"];
    let mut revealed = RevealSet::new();

    let delays: Vec<Option<u32>> = cards
        .iter()
        .map(|card| revealed.schedule(card, &cards))
        .collect();
    assert_eq!(delays, vec![Some(0), Some(100), Some(200)]);

    // Repeated intersections do not reveal again.
    for card in &cards {
        assert_eq!(revealed.schedule(card, &cards), None);
    }
    assert_eq!(revealed.len(), 3);
}
