//! Infrastructure implementations of the `ConflictPrompt` port.

mod interactive;

pub use interactive::InteractivePrompt;
