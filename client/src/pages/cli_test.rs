use super::*;

#[test]
fn command_reference_lists_core_verbs_in_order() {
    let verbs: Vec<&str> = CLI_COMMANDS.iter().map(|c| c.verb).collect();
    assert_eq!(verbs, ["help", "[function name]", "run [script path]", "install", "http", "dbs"]);
}

#[test]
fn every_command_has_an_accent_and_description() {
    for cmd in CLI_COMMANDS {
        assert!(!cmd.accent.is_empty(), "{} has no accent", cmd.verb);
        assert!(!cmd.description.is_empty(), "{} has no description", cmd.verb);
    }
}

#[test]
fn nested_benefits_follow_the_package_manager_point() {
    let idx = SCRIPT_BENEFITS
        .iter()
        .position(|(text, _)| *text == "Built-in package manager")
        .unwrap();
    assert!(SCRIPT_BENEFITS[idx + 1].1);
    assert!(SCRIPT_BENEFITS[idx + 2].1);
    assert_eq!(SCRIPT_BENEFITS.iter().filter(|(_, nested)| *nested).count(), 2);
}

#[test]
fn banner_spans_six_art_lines() {
    assert_eq!(CLI_BANNER.lines().filter(|l| !l.trim().is_empty()).count(), 6);
}
