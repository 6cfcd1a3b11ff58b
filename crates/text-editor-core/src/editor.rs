use anyhow::Result;
use std::path::Path;

use crate::buffer::{Buffer, CaretPosition, Edit, Span};
use crate::command::{Outcome, PendingInput, Prompt};
use crate::file_writer;
use crate::search;
use crate::status::{self, INITIAL_STATUS};
use crate::theme::{ThemeManager, ThemeMode};

pub const APP_TITLE: &str = "Text Editor";
pub const ABOUT_TITLE: &str = "About";
pub const ABOUT_MESSAGE: &str = "Text Editor\nVersion 1.0";

/// All mutable state of the editor window.
#[derive(Debug)]
pub struct EditorState {
    buffer: Buffer,
    caret: usize,
    // Find matches stay marked until their text is removed
    highlights: Vec<Span>,
    theme: ThemeManager,
    status: String,
    title: String,
    quit_requested: bool,
}

impl EditorState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            buffer: Buffer::new(),
            caret: 0,
            highlights: Vec::new(),
            theme: ThemeManager::new(mode),
            status: INITIAL_STATUS.to_string(),
            title: APP_TITLE.to_string(),
            quit_requested: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.buffer = Buffer::from_text(text);
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Hands the text to the text widget, which reports back through
    /// [`EditorState::text_changed`].
    pub fn text_mut(&mut self) -> &mut String {
        self.buffer.text_mut()
    }

    /// Called after the text widget changed the buffer. `previous` is the
    /// text before the change; without it highlights cannot be moved and
    /// are kept as they are.
    pub fn text_changed(&mut self, previous: Option<&str>) {
        if let Some(edit) = previous.and_then(|before| Edit::between(before, self.buffer.as_str())) {
            self.apply_edit(edit);
        }
        self.clamp_caret();
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset;
        self.clamp_caret();
    }

    pub fn caret_position(&self) -> CaretPosition {
        self.buffer.caret_position(self.caret)
    }

    pub fn highlights(&self) -> &[Span] {
        &self.highlights
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Refreshes the status bar from the caret; called on key release.
    pub fn update_status(&mut self) {
        self.status = status::format_status(self.caret_position());
    }

    /// Highlights the first occurrence of `target`, keeping the marks of
    /// earlier finds. Returns the span found.
    pub fn find(&mut self, target: &str) -> Option<Span> {
        let found = search::find_first(&self.buffer, target);
        match found {
            Some(span) => {
                tracing::debug!(start = span.start, end = span.end, "find matched");
                if !self.highlights.contains(&span) {
                    self.highlights.push(span);
                }
            }
            None => tracing::debug!("find had no match"),
        }
        found
    }

    /// Replaces the first occurrence of `target`. Returns the span of the
    /// inserted text when a substitution happened.
    pub fn replace(&mut self, target: &str, replacement: &str) -> Option<Span> {
        let replaced = search::replace_first(&mut self.buffer, target, replacement);
        match replaced {
            Some(span) => {
                tracing::debug!(start = span.start, end = span.end, "replaced first match");
                self.apply_edit(Edit {
                    start: span.start,
                    removed: target.chars().count(),
                    inserted: span.len(),
                });
                self.clamp_caret();
            }
            None => tracing::debug!("replace made no change"),
        }
        replaced
    }

    /// Writes the buffer to `path` and puts the path in the window title.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        file_writer::write_buffer(path, &self.buffer)?;
        self.title = format!("{} - {}", APP_TITLE, path.display());
        Ok(())
    }

    /// Continues a command flow with the user's answer to `pending`.
    /// `None` and empty answers abort the flow silently.
    pub fn answer(&mut self, pending: PendingInput, answer: Option<String>) -> Outcome {
        let Some(answer) = answer.filter(|text| !text.is_empty()) else {
            tracing::debug!(?pending, "prompt cancelled");
            return Outcome::Done;
        };

        match pending {
            PendingInput::FindTarget => {
                self.find(&answer);
                Outcome::Done
            }
            PendingInput::ReplaceTarget => {
                Outcome::Prompt(Prompt::new(PendingInput::ReplaceWith { target: answer }))
            }
            PendingInput::ReplaceWith { target } => {
                self.replace(&target, &answer);
                Outcome::Done
            }
        }
    }

    fn apply_edit(&mut self, edit: Edit) {
        self.highlights = self
            .highlights
            .iter()
            .filter_map(|span| edit.shift_span(*span))
            .collect();
    }

    fn clamp_caret(&mut self) {
        self.caret = self.caret.min(self.buffer.char_len());
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
