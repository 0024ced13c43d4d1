//! Conflict Prompt Port
//!
//! The conflict resolver asks for one decision at a time through this trait:
//! a conflict descriptor goes in, an answer comes out. The terminal
//! implementation reads a line from stdin; tests supply scripted answers.

use crate::domain::entities::Conflict;

/// Answer to a single conflict prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Overwrite this file with the new content
    Overwrite,
    /// Keep the local edit for this file
    Keep,
    /// Overwrite this and every remaining conflict
    OverwriteAll,
    /// Keep this and every remaining conflict
    KeepAll,
}

impl PromptAnswer {
    /// Choices shown to the user, in display order.
    pub const HINT: &'static str =
        "[o]verwrite / [k]eep / [O]verwrite all / [K]eep all (anything else overwrites)";

    /// Parse a typed answer.
    ///
    /// Unrecognized input (including an empty line) resolves to `Overwrite`,
    /// so upstream fixes are never silently dropped by a typo.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "k" | "keep" | "s" | "skip" => PromptAnswer::Keep,
            "O" | "overwrite-all" | "overwrite all" => PromptAnswer::OverwriteAll,
            "K" | "keep-all" | "keep all" => PromptAnswer::KeepAll,
            _ => PromptAnswer::Overwrite,
        }
    }

    /// Whether this answer applies to every remaining conflict.
    pub fn is_sticky(&self) -> bool {
        matches!(self, PromptAnswer::OverwriteAll | PromptAnswer::KeepAll)
    }

    /// Whether this answer keeps the local file.
    pub fn keeps(&self) -> bool {
        matches!(self, PromptAnswer::Keep | PromptAnswer::KeepAll)
    }
}

/// Conflict context provided to the prompt
#[derive(Debug, Clone, Copy)]
pub struct ConflictContext<'a> {
    /// The conflict being decided
    pub conflict: &'a Conflict,
    /// 1-based position in the batch
    pub position: usize,
    /// Batch size
    pub total: usize,
}

/// Source of per-conflict decisions.
pub trait ConflictPrompt {
    /// Ask for a decision on one conflict. Blocks until answered.
    fn ask(&mut self, context: &ConflictContext<'_>) -> std::io::Result<PromptAnswer>;
}

/// Prompt that replays a fixed list of answers, then falls back to a default.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<PromptAnswer>,
    fallback: PromptAnswer,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = PromptAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback: PromptAnswer::Overwrite,
            asked: Vec::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: PromptAnswer) -> Self {
        self.fallback = fallback;
        self
    }

    /// Logical paths that were actually prompted, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl ConflictPrompt for ScriptedPrompt {
    fn ask(&mut self, context: &ConflictContext<'_>) -> std::io::Result<PromptAnswer> {
        self.asked.push(context.conflict.logical_path.clone());
        Ok(self.answers.pop_front().unwrap_or(self.fallback))
    }
}
