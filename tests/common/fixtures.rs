//! Test fixtures - a small package shaped like the real mindsystem package.

/// Package version written to `package.json`
pub const PACKAGE_VERSION: &str = "1.4.0";

/// Command that references the install root through the placeholder
pub const HELP_COMMAND: &str = "---\nname: ms:help\n---\nRead @~/.claude/mindsystem/workflows/help.md\n";

pub const HELP_WORKFLOW: &str = "# Help\n\nList every /ms command.\n";

pub const EXECUTE_WORKFLOW: &str = "# Execute\n\nTemplates live in ~/.claude/mindsystem/templates/.\n";

pub const PLANNER_AGENT: &str = "---\nname: ms-planner\n---\nYou plan phases.\n";

pub const TOOLS_SCRIPT: &str = "#!/bin/sh\nexec python3 \"$HOME/.claude/mindsystem/scripts/ms-lookup/cli.py\" \"$@\"\n";

pub const CHANGELOG: &str = "# Changelog\n\n## 1.4.0\n- Manifest-aware installs\n";

/// Default package: relative path → content
pub fn default_package() -> Vec<(&'static str, String)> {
    vec![
        ("commands/ms/help.md", HELP_COMMAND.to_string()),
        ("mindsystem/workflows/help.md", HELP_WORKFLOW.to_string()),
        ("mindsystem/workflows/execute.md", EXECUTE_WORKFLOW.to_string()),
        ("agents/ms-planner.md", PLANNER_AGENT.to_string()),
        ("scripts/ms-tools.sh", TOOLS_SCRIPT.to_string()),
        ("CHANGELOG.md", CHANGELOG.to_string()),
        (
            "package.json",
            format!("{{\"name\": \"mindsystem-cc\", \"version\": \"{}\"}}", PACKAGE_VERSION),
        ),
    ]
}

/// Logical paths the default package installs
pub const DEFAULT_INSTALLED: &[&str] = &[
    "agents/ms-planner.md",
    "commands/ms/help.md",
    "mindsystem/CHANGELOG.md",
    "mindsystem/scripts/ms-tools.sh",
    "mindsystem/workflows/execute.md",
    "mindsystem/workflows/help.md",
];
