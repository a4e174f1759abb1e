use chrono::{Duration, Utc};
use proptest::prelude::*;
use strata_core::config::DecayFunction;
use strata_core::memory::*;
use strata_decay::{curve_for, formula};

fn arb_function() -> impl Strategy<Value = DecayFunction> {
    prop_oneof![
        (0.01f64..5.0).prop_map(|lambda| DecayFunction::Exponential { lambda }),
        (0.01f64..2.0).prop_map(|alpha| DecayFunction::PowerLaw { alpha }),
        (1.0f64..5000.0, 0.0f64..2.0)
            .prop_map(|(strength, beta)| DecayFunction::Ebbinghaus { strength, beta }),
    ]
}

// ── Monotonically non-increasing in elapsed time ─────────────────────────

proptest! {
    #[test]
    fn curves_never_increase_with_time(
        f in arb_function(),
        w0 in 0.0f64..5.0,
        t1 in 0.0f64..10_000.0,
        dt in 0.0f64..10_000.0,
        n in 0u64..100,
    ) {
        let curve = curve_for(&f);
        let early = curve.decayed_weight(w0, t1, n);
        let late = curve.decayed_weight(w0, t1 + dt, n);
        prop_assert!(late <= early + 1e-12);
        prop_assert!(late >= 0.0);
        prop_assert!(early <= w0 + 1e-12);
    }
}

// ── Repeated ticks never raise weight ────────────────────────────────────

proptest! {
    #[test]
    fn repeated_ticks_are_non_increasing(
        f in arb_function(),
        w0 in 0.0f64..3.0,
        steps in proptest::collection::vec(-5i64..240, 1..20),
    ) {
        let curve = curve_for(&f);
        let start = Utc::now();
        let mut node = MemoryNode::new(
            NodeContent::Working(WorkingContent { text: "t".into(), attention_score: 1.0 }),
            w0,
            start,
        ).unwrap();
        let mut now = start;
        let mut previous = node.weight.value();
        // Negative steps model a clock that jitters backwards.
        for minutes in steps {
            now += Duration::minutes(minutes);
            let next = formula::compute(curve.as_ref(), &node, now);
            prop_assert!(next <= previous + 1e-12);
            node.weight = Weight::new(next);
            previous = next;
        }
    }
}

// ── Access slows Ebbinghaus decay ────────────────────────────────────────

proptest! {
    #[test]
    fn more_accesses_never_decay_faster(
        strength in 1.0f64..1000.0,
        beta in 0.0f64..2.0,
        t in 0.0f64..5000.0,
        n in 0u64..50,
    ) {
        let curve = curve_for(&DecayFunction::Ebbinghaus { strength, beta });
        prop_assert!(curve.decayed_weight(1.0, t, n + 1) >= curve.decayed_weight(1.0, t, n) - 1e-12);
    }
}
