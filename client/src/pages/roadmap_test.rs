use super::*;

#[test]
fn every_status_has_at_least_one_milestone() {
    for status in MilestoneStatus::ORDER {
        assert!(milestones_with_status(status).next().is_some(), "{status:?} is empty");
    }
}

#[test]
fn grouping_covers_every_milestone_once() {
    let grouped: usize = MilestoneStatus::ORDER.into_iter().map(|s| milestones_with_status(s).count()).sum();
    assert_eq!(grouped, MILESTONES.len());
}

#[test]
fn grouping_keeps_declaration_order() {
    let shipped: Vec<&str> = milestones_with_status(MilestoneStatus::Shipped).map(|m| m.title).collect();
    assert_eq!(shipped, ["Cross-platform CLI", "Package manager"]);
}

#[test]
fn slugs_are_css_safe() {
    for status in MilestoneStatus::ORDER {
        assert!(status.slug().chars().all(|c| c.is_ascii_lowercase() || c == '-'));
    }
}
