//! The short grant a visitor gets to revise the note they just left.
//!
//! Only the browser session that created a note holds this; the server
//! accepts `PUT` on any id at any time.

use crate::models::note::Note;

pub const EDIT_WINDOW_SECS: u32 = 60;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditWindow {
    #[default]
    Idle,
    Editable { note: Note, seconds_left: u32 },
}

impl EditWindow {
    pub fn open(note: Note) -> Self {
        EditWindow::Editable {
            note,
            seconds_left: EDIT_WINDOW_SECS,
        }
    }

    /// One second has passed.
    pub fn tick(self) -> Self {
        match self {
            EditWindow::Editable { note, seconds_left } if seconds_left > 1 => {
                EditWindow::Editable {
                    note,
                    seconds_left: seconds_left - 1,
                }
            }
            _ => EditWindow::Idle,
        }
    }

    /// The edit went through; the rest of the countdown is forfeited.
    pub fn commit(self) -> Self {
        EditWindow::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditWindow::Idle)
    }

    pub fn editable_note(&self) -> Option<&Note> {
        match self {
            EditWindow::Editable { note, .. } => Some(note),
            EditWindow::Idle => None,
        }
    }

    pub fn seconds_left(&self) -> u32 {
        match self {
            EditWindow::Editable { seconds_left, .. } => *seconds_left,
            EditWindow::Idle => 0,
        }
    }

    pub fn allows(&self, note_id: &str) -> bool {
        self.editable_note().map_or(false, |note| note.id == note_id)
    }
}
