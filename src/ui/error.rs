use mindsystem_install::InstallError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line error with its cause chain, plus a hint where one helps.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    if let Some(hint) = err.downcast_ref::<InstallError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

fn hint_for(err: &InstallError) -> Option<&'static str> {
    match err {
        InstallError::SourceNotFound { .. } => {
            Some("Pass --source <path> pointing at the mindsystem package")
        }
        InstallError::HomeDirUnavailable => {
            Some("Set --config-dir or CLAUDE_CONFIG_DIR, or install with --local")
        }
        InstallError::Prompt(_) => Some("Re-run with --force to overwrite without asking"),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error) {
    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
