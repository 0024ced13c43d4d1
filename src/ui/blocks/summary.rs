use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::widgets::panel::{Panel, Row};

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, false)
    }

    fn with_outcome(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (tone, icon, title) = if self.success {
            (SemanticColor::Success, Icon::Success, ColoredText::success(self.title.as_str()))
        } else {
            (SemanticColor::Warning, Icon::Warning, ColoredText::warning(self.title.as_str()))
        };
        let heading = Row::icon(icon, supports_color, supports_unicode)
            .then_colored(&title.bold(), supports_color);

        let mut panel = Panel::new(heading, tone);
        panel.gap();
        for (label, count) in &self.stats {
            panel.push(Row::text(format!("{} {}", count, label)));
        }

        for (messages, icon) in [(&self.infos, Icon::Success), (&self.warnings, Icon::Warning)] {
            if messages.is_empty() {
                continue;
            }
            panel.gap();
            for message in messages {
                panel.push(Row::icon(icon, supports_color, supports_unicode).then(message));
            }
        }

        if let Some(next_step) = &self.next_step {
            panel.gap();
            panel.push(
                Row::icon(Icon::Arrow, supports_color, supports_unicode)
                    .then_colored(&ColoredText::dim("Next:"), supports_color)
                    .then(next_step),
            );
        }

        panel.render(supports_color, supports_unicode)
    }
}
