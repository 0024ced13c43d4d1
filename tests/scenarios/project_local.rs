//! Scenario: Project-Local Install Next To a Global One
//!
//! Journey: A user has a global install and adds a project-local one for a
//! repository that pins its own workflow edits.
//!
//! Success Criteria:
//! - Local files reference `./.claude/`, global ones `~/.claude/`
//! - Each root reconciles against its own manifest

use crate::common::*;

#[test]
fn scenario_local_and_global_coexist() {
    let env = TestEnv::new();
    assert_success!(env.run(&["--global"]));
    assert_success!(env.run(&["--local"]));

    let local = std::fs::read_to_string(env.local_path("mindsystem/workflows/execute.md")).unwrap();
    assert!(local.contains("./.claude/mindsystem/templates/"));
    assert!(env
        .read_installed("mindsystem/workflows/execute.md")
        .contains("~/.claude/mindsystem/templates/"));

    // A local edit shows up as a conflict only for the local root.
    std::fs::write(env.local_path("agents/ms-planner.md"), "project rules\n").unwrap();
    env.write_package_file("agents/ms-planner.md", "upstream rules\n");

    let global = env.run(&["--global"]);
    assert_success!(global);
    assert!(!global.combined_output().contains("locally modified"));

    let local = env.run(&["--local"]);
    assert_success!(local);
    assert!(local.combined_output().contains("1 locally modified file overwritten"));
}
