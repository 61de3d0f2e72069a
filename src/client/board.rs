//! Everything the notes page shows, as one value.
//!
//! [`Board::reduce`] is the only way to move from one snapshot to the next.
//! Network work happens outside; its outcome comes back in as an event.

use super::edit_window::EditWindow;
use crate::models::note::{Note, NoteForm};

pub const MAX_MESSAGE_CHARS: usize = 300;

/// Lists at or below this size are shown twice so the marquee stays full.
pub const MARQUEE_REPEAT_THRESHOLD: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NoteModal {
    #[default]
    Closed,
    Compose,
    Edit(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub message: String,
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    NotesLoaded(Vec<Note>),
    LoadFailed,
    AddNoteClicked,
    EditClicked(String),
    CloseNoteModal,
    MessageInput(String),
    SignatureInput(String),
    SubmitStarted,
    NoteCreated(Note),
    NoteUpdated(Note),
    SubmitFailed,
    Tick,
    OpenContact,
    CloseContact,
}

/// What pressing submit should send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(NoteForm),
    Update { note_id: String, form: NoteForm },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub notes: Vec<Note>,
    pub loading: bool,
    pub note_modal: NoteModal,
    pub contact_modal: bool,
    pub draft: Draft,
    pub submitting: bool,
    pub edit_window: EditWindow,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            notes: Vec::new(),
            loading: true,
            note_modal: NoteModal::Closed,
            contact_modal: false,
            draft: Draft::default(),
            submitting: false,
            edit_window: EditWindow::Idle,
        }
    }
}

impl Board {
    pub fn reduce(self, event: BoardEvent) -> Board {
        match event {
            BoardEvent::NotesLoaded(notes) => Board {
                notes,
                loading: false,
                ..self
            },
            BoardEvent::LoadFailed => Board {
                loading: false,
                ..self
            },
            BoardEvent::AddNoteClicked => Board {
                note_modal: NoteModal::Compose,
                draft: Draft::default(),
                ..self
            },
            BoardEvent::EditClicked(note_id) => self.open_edit(note_id),
            BoardEvent::CloseNoteModal if !self.submitting => Board {
                note_modal: NoteModal::Closed,
                ..self
            },
            BoardEvent::MessageInput(message)
                if message.chars().count() <= MAX_MESSAGE_CHARS =>
            {
                Board {
                    draft: Draft {
                        message,
                        ..self.draft
                    },
                    ..self
                }
            }
            BoardEvent::SignatureInput(signature) => Board {
                draft: Draft {
                    signature,
                    ..self.draft
                },
                ..self
            },
            BoardEvent::SubmitStarted if self.can_submit() => Board {
                submitting: true,
                ..self
            },
            BoardEvent::NoteCreated(note) => {
                let mut board = self.finish_submit();
                board.notes.push(note.clone());
                board.edit_window = EditWindow::open(note);
                board
            }
            BoardEvent::NoteUpdated(note) => {
                let mut board = self.finish_submit();
                for existing in board.notes.iter_mut().filter(|n| n.id == note.id) {
                    *existing = note.clone();
                }
                board.edit_window = std::mem::take(&mut board.edit_window).commit();
                board
            }
            BoardEvent::SubmitFailed => Board {
                submitting: false,
                ..self
            },
            BoardEvent::Tick => {
                let edit_window = self.edit_window.tick();
                // an open edit form falls back to a fresh note once the grant is gone
                let note_modal = match self.note_modal {
                    NoteModal::Edit(note_id) if !edit_window.allows(&note_id) => {
                        NoteModal::Compose
                    }
                    modal => modal,
                };
                Board {
                    edit_window,
                    note_modal,
                    ..self
                }
            }
            BoardEvent::OpenContact => Board {
                contact_modal: true,
                ..self
            },
            BoardEvent::CloseContact => Board {
                contact_modal: false,
                ..self
            },
            BoardEvent::CloseNoteModal
            | BoardEvent::MessageInput(_)
            | BoardEvent::SubmitStarted => self,
        }
    }

    fn open_edit(self, note_id: String) -> Board {
        if !self.edit_window.allows(&note_id) {
            return self;
        }

        let draft = self
            .notes
            .iter()
            .find(|n| n.id == note_id)
            .or_else(|| self.edit_window.editable_note())
            .map(|note| Draft {
                message: note.message.clone(),
                signature: note.signature.clone(),
            });

        match draft {
            Some(draft) => Board {
                note_modal: NoteModal::Edit(note_id),
                draft,
                ..self
            },
            None => self,
        }
    }

    fn finish_submit(self) -> Board {
        Board {
            note_modal: NoteModal::Closed,
            draft: Draft::default(),
            submitting: false,
            ..self
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
            && self.note_modal != NoteModal::Closed
            && !self.draft.message.trim().is_empty()
            && !self.draft.signature.trim().is_empty()
    }

    pub fn submission(&self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let form = NoteForm {
            message: self.draft.message.clone(),
            signature: self.draft.signature.clone(),
        };
        match &self.note_modal {
            NoteModal::Edit(note_id) => Some(Submission::Update {
                note_id: note_id.clone(),
                form,
            }),
            NoteModal::Compose => Some(Submission::Create(form)),
            NoteModal::Closed => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.note_modal, NoteModal::Edit(_))
    }

    /// Whether a countdown should be running right now.
    pub fn is_counting_down(&self) -> bool {
        !self.edit_window.is_idle()
    }

    /// Seconds shown on the card's edit button, if it has one.
    pub fn edit_badge(&self, note_id: &str) -> Option<u32> {
        self.edit_window
            .allows(note_id)
            .then(|| self.edit_window.seconds_left())
    }

    pub fn chars_used(&self) -> usize {
        self.draft.message.chars().count()
    }

    pub fn modal_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Your Note"
        } else {
            "Leave a Note for the Celebrant"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, self.is_editing()) {
            (true, true) => "Updating...",
            (true, false) => "Submitting...",
            (false, true) => "Update Note",
            (false, false) => "Submit Note",
        }
    }

    pub fn marquee_notes(&self) -> Vec<&Note> {
        if self.notes.len() <= MARQUEE_REPEAT_THRESHOLD {
            self.notes.iter().chain(self.notes.iter()).collect()
        } else {
            self.notes.iter().collect()
        }
    }
}
