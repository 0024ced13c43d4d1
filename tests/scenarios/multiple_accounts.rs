//! Scenario: Multiple Claude Accounts
//!
//! Journey: A user with two Claude config directories installs into both,
//! one through `--config-dir`, one through `CLAUDE_CONFIG_DIR`.
//!
//! Success Criteria:
//! - Each directory gets its own manifest
//! - File references point at the directory they were installed into
//! - Removing an asset upstream cleans each directory on its next run only

use crate::common::*;

#[test]
fn scenario_two_config_dirs_are_independent() {
    let env = TestEnv::new();
    let work = env.home.path().join(".claude-work");
    let personal = env.home.path().join(".claude-personal");

    assert_success!(env.run(&["-g", "-c", work.to_str().unwrap()]));
    assert_success!(env.run_with_env(
        &["-g"],
        &[("CLAUDE_CONFIG_DIR", personal.to_str().unwrap())]
    ));

    let work_help = std::fs::read_to_string(work.join("commands/ms/help.md")).unwrap();
    assert!(work_help.contains(&format!("@{}/mindsystem/", work.display())));
    let personal_help = std::fs::read_to_string(personal.join("commands/ms/help.md")).unwrap();
    assert!(personal_help.contains(&format!("@{}/mindsystem/", personal.display())));

    // Upstream drops a workflow; only the directory that re-runs is cleaned.
    env.remove_package_file("mindsystem/workflows/execute.md");
    assert_success!(env.run(&["-g", "-c", work.to_str().unwrap()]));

    assert!(!work.join("mindsystem/workflows/execute.md").exists());
    assert!(personal.join("mindsystem/workflows/execute.md").is_file());
    assert!(!read_manifest_at(&work).contains("mindsystem/workflows/execute.md"));
    assert!(read_manifest_at(&personal).contains("mindsystem/workflows/execute.md"));
    assert!(!env.global_root().exists());
}
