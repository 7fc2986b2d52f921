//! Modal dialog stack
//!
//! Every open dialog is an explicit descriptor on a stack. Only the top
//! dialog receives input; a dialog leaves the stack when the user closes it
//! (confirm, cancel, or Esc). The shell consumes a dialog's result when it
//! pops it.

use crate::picker::PickerSession;

/// What a picker dialog was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    /// Directory single-select; replaces the base directory
    ChooseBaseDirectory,
    /// File multi-select; replaces the selection list
    SelectFiles,
}

/// Which destructive action a confirmation dialog gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Delete every path in the selection list
    DeleteSelected,
    /// Placeholder warning; confirming deletes nothing
    DeleteAll,
}

/// Content of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Action gated by the dialog
    pub kind: ConfirmKind,
    /// Dialog title
    pub title: String,
    /// Message explaining what will happen
    pub message: String,
    /// Affected paths or other details, shown truncated
    pub context: Vec<String>,
}

impl ConfirmPrompt {
    /// Create a prompt without context lines
    #[must_use]
    pub fn new(kind: ConfirmKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Attach context lines
    #[must_use]
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }
}

/// A dialog on the stack
#[derive(Debug)]
pub enum Dialog {
    /// A file picker session
    Picker {
        /// Why the picker was opened
        purpose: PickerPurpose,
        /// The running session
        session: Box<PickerSession>,
    },
    /// A yes/no confirmation
    Confirm(ConfirmPrompt),
}

/// Stack of open dialogs, topmost last
#[derive(Debug, Default)]
pub struct DialogStack {
    dialogs: Vec<Dialog>,
}

impl DialogStack {
    /// Create an empty stack
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialogs: Vec::new(),
        }
    }

    /// Open a dialog on top of the others
    pub fn push(&mut self, dialog: Dialog) {
        self.dialogs.push(dialog);
    }

    /// Close the top dialog
    pub fn pop(&mut self) -> Option<Dialog> {
        self.dialogs.pop()
    }

    /// The dialog receiving input
    #[must_use]
    pub fn top(&self) -> Option<&Dialog> {
        self.dialogs.last()
    }

    /// Mutable access to the dialog receiving input
    pub fn top_mut(&mut self) -> Option<&mut Dialog> {
        self.dialogs.last_mut()
    }

    /// Whether no dialog is open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Number of open dialogs
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    /// Dialogs from bottom to top, for rendering
    pub fn iter(&self) -> impl Iterator<Item = &Dialog> {
        self.dialogs.iter()
    }

    /// Pop the top dialog if it is a picker that has completed
    pub fn pop_completed_picker(&mut self) -> Option<(PickerPurpose, Box<PickerSession>)> {
        let completed = matches!(
            self.top(),
            Some(Dialog::Picker { session, .. }) if session.is_complete()
        );
        if !completed {
            return None;
        }
        match self.dialogs.pop() {
            Some(Dialog::Picker { purpose, session }) => Some((purpose, session)),
            _ => None,
        }
    }
}
