//! Property-based tests for switch evaluation.
//!
//! These tests verify the lookup contract over arbitrary arm sets:
//! a registered label always returns its value, an unregistered subject
//! always resolves through the default, evaluation is idempotent, and the
//! creation-bound, evaluation-bound, and runtime forms all agree.

use std::collections::HashMap;

use proptest::prelude::*;

use strswitch::{Bound, DynStringSwitch, NoDefault, StringSwitch, SwitchArms, Unbound};

/// Arm labels are lowercase so the uppercase probe strategies below can
/// never collide with a registered label.
fn arm_maps() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map("[a-z]{1,8}", any::<i32>(), 1..8)
}

fn build_unbound(arms: &HashMap<String, i32>) -> SwitchArms<i32, Unbound, NoDefault> {
    let mut iter = arms.iter();
    let (label, value) = iter.next().expect("strategy yields at least one arm");
    let mut switch = StringSwitch::<i32>::create().when(label.clone(), *value);
    for (label, value) in iter {
        switch = switch.when(label.clone(), *value);
    }
    switch
}

fn build_bound(subject: &str, arms: &HashMap<String, i32>) -> SwitchArms<i32, Bound, NoDefault> {
    let mut iter = arms.iter();
    let (label, value) = iter.next().expect("strategy yields at least one arm");
    let mut switch = StringSwitch::<i32>::create_with(subject).when(label.clone(), *value);
    for (label, value) in iter {
        switch = switch.when(label.clone(), *value);
    }
    switch
}

proptest! {
    #[test]
    fn registered_label_returns_its_value(arms in arm_maps()) {
        let switch = build_unbound(&arms);
        for (label, value) in &arms {
            prop_assert_eq!(switch.evaluate(label), Some(*value));
        }
    }

    #[test]
    fn unregistered_subject_resolves_through_default(
        arms in arm_maps(),
        probe in "[A-Z]{1,8}",
        fallback in any::<i32>(),
    ) {
        let switch = build_unbound(&arms);
        prop_assert_eq!(switch.evaluate(&probe), None);

        let switch = switch.on_default(fallback);
        prop_assert_eq!(switch.evaluate(&probe), fallback);
    }

    #[test]
    fn evaluation_is_idempotent(arms in arm_maps(), probe in "[a-zA-Z]{1,8}") {
        let switch = build_unbound(&arms);
        let first = switch.evaluate(&probe);
        let second = switch.evaluate(&probe);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn creation_and_evaluation_binding_agree(
        arms in arm_maps(),
        probe in "[a-zA-Z]{1,8}",
    ) {
        let unbound = build_unbound(&arms);
        for subject in arms.keys().map(String::as_str).chain([probe.as_str()]) {
            let bound = build_bound(subject, &arms);
            prop_assert_eq!(bound.evaluate(), unbound.evaluate(subject));
        }
    }

    #[test]
    fn runtime_form_matches_typestate_form(
        arms in arm_maps(),
        probe in "[a-zA-Z]{1,8}",
        fallback in any::<i32>(),
    ) {
        let typestate = build_unbound(&arms).on_default(fallback);

        let mut dynamic = DynStringSwitch::new();
        for (label, value) in &arms {
            dynamic.try_when(label.clone(), *value).unwrap();
        }
        dynamic.try_on_default(fallback).unwrap();

        for subject in arms.keys().map(String::as_str).chain([probe.as_str()]) {
            prop_assert_eq!(
                dynamic.evaluate_with(subject).unwrap(),
                Some(typestate.evaluate(subject))
            );
        }
    }

    #[test]
    fn conversion_to_runtime_form_is_lossless(arms in arm_maps(), probe in "[a-zA-Z]{1,8}") {
        let typestate = build_unbound(&arms);
        let expected: Vec<Option<i32>> = arms
            .keys()
            .map(String::as_str)
            .chain([probe.as_str()])
            .map(|subject| typestate.evaluate(subject))
            .collect();

        let dynamic: DynStringSwitch<i32> = typestate.into();
        for (subject, expected) in arms
            .keys()
            .map(String::as_str)
            .chain([probe.as_str()])
            .zip(expected)
        {
            prop_assert_eq!(dynamic.evaluate_with(subject).unwrap(), expected);
        }
    }
}
