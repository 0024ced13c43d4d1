use std::path::Path;

use mindsystem_install::infrastructure::probe::PythonStatus;
use mindsystem_install::{CategoryReport, InstallReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_install_header(
    location: &str,
    source: &Path,
    force: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Install, "Mindsystem Install");
    header.add("Installing to", location);
    header.add("Source", source.display().to_string());
    if force {
        header.add("Mode", "force");
    }
    header.render(supports_color, supports_unicode)
}

/// "3 new, 1 updated, 12 unchanged" with zero counts left out.
pub fn category_counts(category: &CategoryReport) -> String {
    let parts: Vec<String> = [
        (category.new, "new"),
        (category.updated, "updated"),
        (category.unchanged, "unchanged"),
        (category.kept, "kept"),
        (category.removed, "removed"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{} {}", count, label))
    .collect();

    if parts.is_empty() {
        "no files".to_string()
    } else {
        parts.join(", ")
    }
}

/// One line per category, then the version marker and the Python probe.
pub fn render_install_steps(
    report: &InstallReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let ok = Icon::Success.colored(supports_color, supports_unicode);
    let mut out = String::new();

    for category in &report.categories {
        let icon = if category.kept > 0 {
            Icon::Keep.colored(supports_color, supports_unicode)
        } else {
            ok.clone()
        };
        out.push_str(&format!(
            "  {} Installed {} {}\n",
            icon,
            category.label,
            ColoredText::dim(format!("({})", category_counts(category))).render(supports_color)
        ));
    }

    out.push_str(&format!("  {} Wrote VERSION ({})\n", ok, report.version));

    if let Some(PythonStatus::Supported { major, minor }) = report.python {
        out.push_str(&format!(
            "  {} Installed ms-lookup CLI (Python {}.{})\n",
            ok, major, minor
        ));
    }

    out
}

/// Files whose local edits survived this run, if any.
pub fn render_kept_files(
    report: &InstallReport,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    if report.kept.is_empty() {
        return None;
    }
    let mut block = WarningBlock::new(format!(
        "{} locally modified file(s) kept; upstream changes were not applied",
        report.kept.len()
    ));
    for path in &report.kept {
        block.add_line(path.clone());
    }
    Some(block.render(supports_color, supports_unicode))
}

pub fn render_install_summary(
    report: &InstallReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.has_changes() {
        "Install Complete"
    } else {
        "Already Up To Date"
    };
    let mut summary = if report.has_warnings() {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    };

    let totals = report.totals();
    summary.add_stat("new", totals.new);
    summary.add_stat("updated", totals.updated);
    summary.add_stat("unchanged", totals.unchanged);
    if totals.kept > 0 {
        summary.add_stat("kept (local edits)", totals.kept);
    }
    if totals.removed > 0 {
        summary.add_stat("removed (no longer shipped)", totals.removed);
    }

    if !report.pruned_dirs.is_empty() {
        summary.add_info(format!(
            "{} empty director{} cleaned up",
            report.pruned_dirs.len(),
            if report.pruned_dirs.len() == 1 { "y" } else { "ies" }
        ));
    }
    for warning in &report.warnings {
        summary.add_warning(warning.clone());
    }

    summary.with_next_step("Launch Claude Code and run /ms:help");
    summary.render(supports_color, supports_unicode)
}
