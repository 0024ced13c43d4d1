//! Conflict resolution service
//!
//! Turns the reconciler's conflict list into a keep set and an overwrite set.
//! Only the interactive mode consults a [`ConflictPrompt`]; the other modes
//! are decided here without I/O.

use std::collections::BTreeSet;

use crate::domain::entities::Conflict;
use crate::domain::ports::{ConflictContext, ConflictPrompt, PromptAnswer};
use crate::error::{InstallError, InstallResult};

/// How conflicts are decided for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionMode {
    /// Overwrite every conflict silently (`--force`)
    Force,
    /// Overwrite every conflict, warning once per batch (no TTY)
    #[default]
    NonInteractive,
    /// Ask about each conflict
    Interactive,
}

/// Decisions for every conflict of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Paths to overwrite with the new content
    pub overwrite: BTreeSet<String>,
    /// Paths whose local edit is kept
    pub keep: BTreeSet<String>,
    /// Batch warning to surface once, if the mode emits one
    pub warning: Option<String>,
    /// Number of questions actually asked
    pub prompts: usize,
}

impl Resolution {
    pub fn keeps(&self, logical_path: &str) -> bool {
        self.keep.contains(logical_path)
    }
}

/// Decides conflicts according to a [`ResolutionMode`].
pub struct ConflictResolver;

impl ConflictResolver {
    /// Resolve `conflicts` in path order.
    ///
    /// With no conflicts nothing is asked and no warning is produced. After
    /// an "all" answer the remaining conflicts are decided without asking.
    pub fn resolve(
        conflicts: &[Conflict],
        mode: ResolutionMode,
        prompt: &mut dyn ConflictPrompt,
    ) -> InstallResult<Resolution> {
        let mut resolution = Resolution::default();
        if conflicts.is_empty() {
            return Ok(resolution);
        }

        let mut ordered: Vec<&Conflict> = conflicts.iter().collect();
        ordered.sort_by(|a, b| a.logical_path.cmp(&b.logical_path));
        ordered.dedup_by(|a, b| a.logical_path == b.logical_path);

        match mode {
            ResolutionMode::Force => {
                resolution.overwrite = paths(&ordered);
            }
            ResolutionMode::NonInteractive => {
                resolution.overwrite = paths(&ordered);
                resolution.warning = Some(batch_warning(ordered.len()));
            }
            ResolutionMode::Interactive => {
                let total = ordered.len();
                let mut sticky: Option<PromptAnswer> = None;

                for (index, conflict) in ordered.iter().enumerate() {
                    let answer = match sticky {
                        Some(answer) => answer,
                        None => {
                            let context = ConflictContext {
                                conflict,
                                position: index + 1,
                                total,
                            };
                            resolution.prompts += 1;
                            let answer = prompt
                                .ask(&context)
                                .map_err(|e| InstallError::Prompt(e.to_string()))?;
                            if answer.is_sticky() {
                                sticky = Some(answer);
                            }
                            answer
                        }
                    };

                    let path = conflict.logical_path.clone();
                    if answer.keeps() {
                        resolution.keep.insert(path);
                    } else {
                        resolution.overwrite.insert(path);
                    }
                }
            }
        }

        Ok(resolution)
    }
}

fn paths(conflicts: &[&Conflict]) -> BTreeSet<String> {
    conflicts.iter().map(|c| c.logical_path.clone()).collect()
}

fn batch_warning(count: usize) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!(
        "{count} locally modified {noun} overwritten (no terminal to ask; re-run interactively or pass --force to silence)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ScriptedPrompt;

    fn conflicts(paths: &[&str]) -> Vec<Conflict> {
        paths.iter().map(|p| Conflict::locally_modified(*p)).collect()
    }

    fn set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn zero_conflicts_asks_nothing() {
        for mode in [
            ResolutionMode::Force,
            ResolutionMode::NonInteractive,
            ResolutionMode::Interactive,
        ] {
            let mut prompt = ScriptedPrompt::new([]);
            let resolution = ConflictResolver::resolve(&[], mode, &mut prompt).unwrap();

            assert_eq!(resolution, Resolution::default());
            assert!(prompt.asked().is_empty());
        }
    }

    #[test]
    fn force_overwrites_without_warning() {
        let mut prompt = ScriptedPrompt::new([]);
        let resolution =
            ConflictResolver::resolve(&conflicts(&["b.md", "a.md"]), ResolutionMode::Force, &mut prompt)
                .unwrap();

        assert_eq!(resolution.overwrite, set(&["a.md", "b.md"]));
        assert!(resolution.keep.is_empty());
        assert!(resolution.warning.is_none());
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn non_interactive_overwrites_with_single_warning() {
        let mut prompt = ScriptedPrompt::new([]);
        let resolution = ConflictResolver::resolve(
            &conflicts(&["a.md", "b.md", "c.md"]),
            ResolutionMode::NonInteractive,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(resolution.overwrite.len(), 3);
        let warning = resolution.warning.unwrap();
        assert!(warning.starts_with("3 locally modified files"));
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn interactive_asks_in_path_order() {
        let mut prompt = ScriptedPrompt::new([PromptAnswer::Keep, PromptAnswer::Overwrite]);
        let resolution = ConflictResolver::resolve(
            &conflicts(&["z.md", "a.md"]),
            ResolutionMode::Interactive,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(prompt.asked(), &["a.md".to_string(), "z.md".to_string()]);
        assert_eq!(resolution.keep, set(&["a.md"]));
        assert_eq!(resolution.overwrite, set(&["z.md"]));
        assert_eq!(resolution.prompts, 2);
    }

    #[test]
    fn keep_all_stops_asking() {
        let mut prompt = ScriptedPrompt::new([PromptAnswer::Overwrite, PromptAnswer::KeepAll]);
        let resolution = ConflictResolver::resolve(
            &conflicts(&["a.md", "b.md", "c.md", "d.md"]),
            ResolutionMode::Interactive,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(prompt.asked().len(), 2);
        assert_eq!(resolution.overwrite, set(&["a.md"]));
        assert_eq!(resolution.keep, set(&["b.md", "c.md", "d.md"]));
    }

    #[test]
    fn overwrite_all_stops_asking() {
        let mut prompt = ScriptedPrompt::new([PromptAnswer::OverwriteAll]);
        let resolution = ConflictResolver::resolve(
            &conflicts(&["a.md", "b.md"]),
            ResolutionMode::Interactive,
            &mut prompt,
        )
        .unwrap();

        assert_eq!(prompt.asked().len(), 1);
        assert_eq!(resolution.overwrite, set(&["a.md", "b.md"]));
        assert!(resolution.warning.is_none());
    }

    #[test]
    fn prompt_failure_is_an_error() {
        struct Closed;
        impl ConflictPrompt for Closed {
            fn ask(&mut self, _: &ConflictContext<'_>) -> std::io::Result<PromptAnswer> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "stdin closed",
                ))
            }
        }

        let err = ConflictResolver::resolve(
            &conflicts(&["a.md"]),
            ResolutionMode::Interactive,
            &mut Closed,
        )
        .unwrap_err();

        assert!(matches!(err, InstallError::Prompt(_)));
    }
}
