//! Scenario: Upgrading Across Releases
//!
//! Journey: A user installs release 1.4.0, customizes one agent, then
//! upgrades to a release that changes that agent, drops a workflow and adds
//! a template.
//!
//! Success Criteria:
//! - The dropped workflow is removed, the new template appears
//! - Without a terminal, the customized agent is overwritten with a warning
//! - The manifest and VERSION describe the new release exactly

use crate::common::*;

#[test]
fn scenario_upgrade_replaces_drops_and_adds() {
    let env = TestEnv::new();

    // Step 1: first install
    let result = env.run(&["--global"]);
    assert_success!(result);
    assert_output_contains!(result, "Install Complete");

    // Step 2: local customization
    env.edit_installed("agents/ms-planner.md", "---\nname: ms-planner\n---\nMy rules.\n");

    // Step 3: next release
    env.write_package_file("agents/ms-planner.md", "---\nname: ms-planner\n---\nv2 rules.\n");
    env.remove_package_file("mindsystem/workflows/execute.md");
    env.write_package_file("mindsystem/templates/summary.md", "# Summary\n");
    env.write_package_file("package.json", "{\"version\": \"1.5.0\"}");

    let result = env.run(&["--global"]);
    assert_success!(result);

    // Step 4: verify
    assert_not_installed!(env, "mindsystem/workflows/execute.md");
    assert_installed!(env, "mindsystem/templates/summary.md");
    assert!(env.read_installed("agents/ms-planner.md").contains("v2 rules."));
    assert_output_contains!(result, "1 locally modified file overwritten");
    assert_output_contains!(result, "removed");
    assert_eq!(env.read_installed("mindsystem/VERSION"), "1.5.0");

    let manifest = env.read_manifest();
    assert!(!manifest.contains("mindsystem/workflows/execute.md"));
    assert!(manifest.contains("mindsystem/templates/summary.md"));
    assert_eq!(manifest.len(), DEFAULT_INSTALLED.len());
}

#[test]
fn scenario_rerun_reports_up_to_date() {
    let env = TestEnv::new();
    assert_success!(env.run(&["--global"]));
    let before = env.read_manifest();

    let result = env.run(&["--global"]);

    assert_success!(result);
    assert_output_contains!(result, "Already Up To Date");
    assert_eq!(env.read_manifest().entry_map(), before.entry_map());
}
