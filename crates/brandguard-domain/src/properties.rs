//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - score arithmetic and clamping
//! - report bucket/severity consistency and determinism
//! - safe-zone boundary behaviour

use crate::checks::{safe_zone_violations, text_coverage};
use crate::engine::evaluate;
use crate::model::{CanvasState, Element, ElementKind};
use crate::policy::Guidelines;
use crate::scoring::score;
use crate::test_support::{image, text, with_data};
use brandguard_types::Severity;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_kind() -> impl Strategy<Value = ElementKind> {
    prop_oneof![
        3 => Just(ElementKind::Image),
        3 => Just(ElementKind::Text),
        1 => Just(ElementKind::Other("shape".to_string())),
        1 => Just(ElementKind::Unknown),
    ]
}

fn arb_coord() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        9 => (-200.0f64..1300.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_size() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        9 => (-10.0f64..1200.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_element() -> impl Strategy<Value = Element> {
    (
        arb_kind(),
        arb_coord(),
        arb_coord(),
        arb_size(),
        arb_size(),
        any::<bool>(),
    )
        .prop_map(|(kind, x, y, width, height, is_logo)| {
            let element = Element {
                id: None,
                kind,
                x,
                y,
                width,
                height,
                data: Default::default(),
            };
            if is_logo {
                with_data(element, "elementType", "logo")
            } else {
                element
            }
        })
}

fn arb_canvas() -> impl Strategy<Value = CanvasState> {
    (
        0.0f64..2000.0,
        0.0f64..2000.0,
        prop::collection::vec(arb_element(), 0..12),
    )
        .prop_map(|(width, height, elements)| CanvasState {
            width,
            height,
            elements,
            background_color: None,
        })
}

fn arb_guidelines() -> impl Strategy<Value = Guidelines> {
    (
        prop::option::of(0.0f64..100.0),
        prop::option::of(0.0f64..10_000.0),
        prop::option::of(0.0f64..100.0),
        prop::option::of(1.0f64..21.0),
    )
        .prop_map(|(max_text_coverage, min_logo_size, safe_zone_margin, min_contrast_ratio)| {
            Guidelines {
                max_text_coverage,
                min_logo_size,
                safe_zone_margin,
                min_contrast_ratio,
                disabled_checks: Vec::new(),
            }
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn score_stays_in_range(v in 0usize..50, w in 0usize..50, r in 0usize..50) {
        let s = score(v, w, r);
        prop_assert!(s <= 100);
    }

    #[test]
    fn each_violation_costs_fifteen_until_clamped(v in 0usize..10, w in 0usize..25) {
        let before = score(v, w, 0);
        let after = score(v + 1, w, 0);
        if before >= 15 {
            prop_assert_eq!(after, before - 15);
        } else {
            prop_assert_eq!(after, 0);
        }
    }

    #[test]
    fn each_warning_costs_five_until_clamped(v in 0usize..10, w in 0usize..25) {
        let before = score(v, w, 0);
        let after = score(v, w + 1, 0);
        if before >= 5 {
            prop_assert_eq!(after, before - 5);
        } else {
            prop_assert_eq!(after, 0);
        }
    }

    #[test]
    fn evaluation_is_deterministic(canvas in arb_canvas(), guidelines in arb_guidelines()) {
        prop_assert_eq!(evaluate(&canvas, &guidelines), evaluate(&canvas, &guidelines));
    }

    #[test]
    fn report_invariants_hold(canvas in arb_canvas(), guidelines in arb_guidelines()) {
        let report = evaluate(&canvas, &guidelines);

        prop_assert!(report.score <= 100);
        prop_assert_eq!(report.is_compliant, report.violations.is_empty());
        prop_assert!(report.violations.iter().all(|f| f.severity == Severity::Error));
        prop_assert!(report.warnings.iter().all(|f| f.severity == Severity::Warning));
        prop_assert!(report.recommendations.iter().all(|f| f.severity == Severity::Info));
        prop_assert_eq!(
            report.score,
            score(report.violations.len(), report.warnings.len(), report.recommendations.len())
        );
    }

    #[test]
    fn zero_area_canvas_has_zero_coverage(
        width in 0.0f64..2000.0,
        elements in prop::collection::vec(arb_element(), 0..8),
    ) {
        let canvas = CanvasState { width, height: 0.0, elements, background_color: None };
        prop_assert_eq!(text_coverage(&canvas), 0.0);
    }

    #[test]
    fn safe_zone_boundary_is_inclusive(margin in 0u32..100, size in 1u32..400) {
        let margin = f64::from(margin);
        let size = f64::from(size);
        let canvas = CanvasState {
            width: 1080.0,
            height: 1080.0,
            elements: Vec::new(),
            background_color: None,
        };

        let on_left = CanvasState { elements: vec![image(margin, margin, size, size)], ..canvas.clone() };
        prop_assert!(safe_zone_violations(&on_left, margin).is_empty());

        let past_left = CanvasState { elements: vec![image(margin - 1.0, margin, size, size)], ..canvas.clone() };
        prop_assert_eq!(safe_zone_violations(&past_left, margin).len(), 1);

        let right_x = 1080.0 - margin - size;
        let on_right = CanvasState { elements: vec![image(right_x, margin, size, size)], ..canvas.clone() };
        prop_assert!(safe_zone_violations(&on_right, margin).is_empty());

        let past_right = CanvasState { elements: vec![image(right_x + 1.0, margin, size, size)], ..canvas };
        prop_assert_eq!(safe_zone_violations(&past_right, margin).len(), 1);
    }

    #[test]
    fn tidy_creatives_are_compliant(
        image_count in 1usize..4,
        text_count in 1usize..=2,
        offset in 10.0f64..100.0,
    ) {
        let mut elements = Vec::new();
        for i in 0..image_count {
            elements.push(image(offset, offset + 100.0 * i as f64, 80.0, 80.0));
        }
        for i in 0..text_count {
            elements.push(text(offset + 300.0, offset + 60.0 * i as f64, 200.0, 40.0));
        }
        let canvas = CanvasState { elements, ..CanvasState::default() };

        let report = evaluate(&canvas, &Guidelines::default());
        prop_assert!(report.violations.is_empty());
        prop_assert!(report.is_compliant);
    }
}

#[test]
fn concurrent_evaluations_agree() {
    let canvas = CanvasState {
        elements: vec![
            image(40.0, 40.0, 500.0, 500.0),
            text(0.0, 600.0, 1080.0, 300.0),
        ],
        ..CanvasState::default()
    };
    let guidelines = Guidelines::default();
    let expected = evaluate(&canvas, &guidelines);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| evaluate(&canvas, &guidelines)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("evaluation thread"), expected);
        }
    });
}
