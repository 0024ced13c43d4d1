use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::SemanticColor;
use crate::ui::widgets::panel::{Panel, Row};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let heading = Row::icon(Icon::Warning, supports_color, supports_unicode).then(&self.title);
        let mut panel = Panel::new(heading, SemanticColor::Warning);
        for line in &self.lines {
            panel.push(Row::text(format!("  {}", line)));
        }
        panel.render(supports_color, supports_unicode)
    }
}
