//! Tests for the spotlight registry.

use std::rc::Rc;

use super::*;
use crate::config::SpotlightConfig;
use crate::test_harness::FakeAdapter;

fn id(raw: &str) -> SpotlightId {
    SpotlightId::new(raw).unwrap()
}

fn mount(registry: &Rc<SpotlightRegistry>, raw: &str) -> Spotlight {
    Spotlight::mount(
        Rc::new(FakeAdapter::new()),
        registry,
        id(raw),
        SpotlightConfig::default(),
    )
    .unwrap()
}

#[test]
fn lookup_finds_a_registered_spotlight() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _spotlight = mount(&registry, "welcome");
    let found = registry.lookup("welcome").unwrap();
    assert_eq!(found.id().as_str(), "welcome");
}

#[test]
fn lookup_of_an_unknown_id_is_none() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _spotlight = mount(&registry, "welcome");
    assert!(registry.lookup("missing").is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _first = mount(&registry, "welcome");
    let second = Spotlight::mount(
        Rc::new(FakeAdapter::new()),
        &registry,
        id("welcome"),
        SpotlightConfig::default(),
    );
    assert_eq!(
        second.unwrap_err(),
        SpotlightError::DuplicateId { id: id("welcome") },
    );
    assert_eq!(registry.len(), 1, "the first registration must survive");
}

#[test]
fn deregistering_frees_the_id() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _first = mount(&registry, "welcome");
    registry.deregister("welcome");
    assert!(registry.lookup("welcome").is_none());
    let _second = mount(&registry, "welcome");
    assert_eq!(registry.len(), 1);
}

#[test]
fn deregistering_an_unknown_id_is_a_no_op() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _spotlight = mount(&registry, "welcome");
    registry.deregister("missing");
    assert_eq!(registry.len(), 1);
}

#[test]
fn ids_report_registration_order() {
    let registry = Rc::new(SpotlightRegistry::new());
    let _a = mount(&registry, "alpha");
    let _b = mount(&registry, "beta");
    let _c = mount(&registry, "gamma");
    assert_eq!(registry.ids(), vec![id("alpha"), id("beta"), id("gamma")]);

    registry.deregister("beta");
    let _b = mount(&registry, "beta");
    assert_eq!(
        registry.ids(),
        vec![id("alpha"), id("gamma"), id("beta")],
        "re-registration appends at the end"
    );
}

#[test]
fn len_and_is_empty_track_registrations() {
    let registry = Rc::new(SpotlightRegistry::new());
    assert!(registry.is_empty());
    let _a = mount(&registry, "alpha");
    let _b = mount(&registry, "beta");
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}
