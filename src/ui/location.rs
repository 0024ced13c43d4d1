use dialoguer::Select;

use mindsystem_install::InstallScope;

use crate::ui::theme::InstallTheme;

/// Map a menu selection to a scope. Anything but the second entry is global.
pub fn scope_for_choice(choice: Option<usize>) -> InstallScope {
    match choice {
        Some(1) => InstallScope::Local,
        _ => InstallScope::Global,
    }
}

pub fn location_items(global_label: &str) -> [String; 2] {
    [
        format!("Global ({}) - available in all projects", global_label),
        "Local  (./.claude) - this project only".to_string(),
    ]
}

/// Ask where to install. Escape picks the default (global).
pub fn prompt_location(global_label: &str, supports_unicode: bool) -> anyhow::Result<InstallScope> {
    let theme = InstallTheme::new(supports_unicode);
    let items = location_items(global_label);
    let choice = Select::with_theme(&theme)
        .with_prompt("Where would you like to install?")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(scope_for_choice(choice))
}
