//! Framed panel used by the summary and warning blocks.
//!
//! Rows keep their plain text next to the styled text, so padding is computed
//! from what the terminal actually shows and escape codes never need to be
//! parsed back out.

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::theme;

/// One line of panel content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    plain: String,
    styled: String,
}

impl Row {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            styled: text.clone(),
            plain: text,
        }
    }

    /// Row starting with an icon.
    pub fn icon(icon: Icon, supports_color: bool, supports_unicode: bool) -> Self {
        Self {
            plain: icon.render(supports_unicode).to_string(),
            styled: icon.colored(supports_color, supports_unicode),
        }
    }

    /// Append plain text, space-separated.
    pub fn then(mut self, text: impl AsRef<str>) -> Self {
        self.push(text.as_ref(), text.as_ref());
        self
    }

    /// Append colored text, space-separated.
    pub fn then_colored(mut self, text: &ColoredText, supports_color: bool) -> Self {
        self.push(&text.to_string(), &text.render(supports_color));
        self
    }

    fn push(&mut self, plain: &str, styled: &str) {
        if !self.plain.is_empty() {
            self.plain.push(' ');
            self.styled.push(' ');
        }
        self.plain.push_str(plain);
        self.styled.push_str(styled);
    }

    pub fn width(&self) -> usize {
        self.plain.width()
    }
}

/// Border glyphs for one terminal
#[derive(Debug, Clone, Copy)]
struct Frame {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Frame {
    fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

/// A heading row plus content rows inside a border colored by `tone`.
#[derive(Debug, Clone)]
pub struct Panel {
    heading: Row,
    rows: Vec<Row>,
    tone: SemanticColor,
}

impl Panel {
    pub fn new(heading: Row, tone: SemanticColor) -> Self {
        Self {
            heading,
            rows: Vec::new(),
            tone,
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Blank separator, never two in a row.
    pub fn gap(&mut self) {
        if self.rows.last().is_some_and(|row| row.plain.is_empty()) {
            return;
        }
        self.rows.push(Row::blank());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let frame = Frame::for_terminal(supports_unicode);
        let border = |s: String| ColoredText::toned(s, self.tone).render(supports_color);

        let content_width = std::iter::once(&self.heading)
            .chain(&self.rows)
            .map(Row::width)
            .max()
            .unwrap_or(0);
        let rule = frame.horizontal.repeat(content_width + 2);

        let mut out = border(format!("{}{}{}", frame.top_left, rule, frame.top_right));
        out.push('\n');
        for row in std::iter::once(&self.heading).chain(&self.rows) {
            let padding = " ".repeat(content_width - row.width());
            out.push_str(&border(frame.vertical.to_string()));
            out.push_str(&format!(" {}{} ", row.styled, padding));
            out.push_str(&border(frame.vertical.to_string()));
            out.push('\n');
        }
        out.push_str(&border(format!(
            "{}{}{}",
            frame.bottom_left, rule, frame.bottom_right
        )));
        out.push('\n');
        out
    }
}
