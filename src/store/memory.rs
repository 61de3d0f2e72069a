use std::sync::{Mutex, MutexGuard};

use nanoid::nanoid;

use super::{NoteStore, StoreError, ID_LEN};
use crate::{
    models::note::{Note, NoteForm},
    utils::unix_now,
};

/// Notes kept in insertion order behind a mutex.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: Mutex<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NoteStore for MemoryNoteStore {
    fn list(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.lock().clone())
    }

    fn get(&self, note_id: &str) -> Result<Note, StoreError> {
        self.lock()
            .iter()
            .find(|n| n.id == note_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(note_id.to_owned()))
    }

    fn create(&self, form: NoteForm) -> Result<Note, StoreError> {
        let mut notes = self.lock();
        let mut id = nanoid!(ID_LEN);
        while notes.iter().any(|n| n.id == id) {
            id = nanoid!(ID_LEN);
        }

        let note = form.into_note(id, unix_now());
        notes.push(note.clone());
        Ok(note)
    }

    fn update(&self, note_id: &str, form: NoteForm) -> Result<Note, StoreError> {
        let mut notes = self.lock();
        let note = notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| StoreError::NotFound(note_id.to_owned()))?;

        note.apply(form.into_changes());
        Ok(note.clone())
    }

    fn delete(&self, note_id: &str) -> Result<(), StoreError> {
        let mut notes = self.lock();
        let before = notes.len();
        notes.retain(|n| n.id != note_id);

        if notes.len() == before {
            Err(StoreError::NotFound(note_id.to_owned()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(message: &str, signature: &str) -> NoteForm {
        NoteForm {
            message: message.to_string(),
            signature: signature.to_string(),
        }
    }

    #[test]
    fn created_note_can_be_fetched() {
        let store = MemoryNoteStore::new();
        let created = store.create(form("Happy 40th!", "Ada")).unwrap();

        assert_eq!(created.id.len(), ID_LEN);
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.message, "Happy 40th!");
        assert_eq!(fetched.signature, "Ada");
    }

    #[test]
    fn update_keeps_id_and_timestamp() {
        let store = MemoryNoteStore::new();
        let created = store.create(form("first", "Ada")).unwrap();

        let updated = store.update(&created.id, form("second", "Grace")).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.timestamp, created.timestamp);
        assert_eq!(updated.message, "second");
        assert_eq!(updated.signature, "Grace");
        assert_eq!(store.get(&created.id).unwrap(), updated);
    }

    #[test]
    fn deleted_note_is_gone_for_every_operation() {
        let store = MemoryNoteStore::new();
        let created = store.create(form("bye", "Ada")).unwrap();
        store.delete(&created.id).unwrap();

        assert!(matches!(store.get(&created.id), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update(&created.id, form("again", "Ada")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(&created.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn list_tracks_creates_and_deletes() {
        let store = MemoryNoteStore::new();
        assert!(store.list().unwrap().is_empty());

        let a = store.create(form("a", "1")).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        let b = store.create(form("b", "2")).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        store.delete(&a.id).unwrap();
        let remaining = store.list().unwrap();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let store = MemoryNoteStore::new();
        let created = store.create(form("", "")).unwrap();
        assert_eq!(store.get(&created.id).unwrap().message, "");
    }

    #[test]
    fn concurrent_style_updates_are_last_write_wins() {
        let store = MemoryNoteStore::new();
        let created = store.create(form("start", "Ada")).unwrap();

        store.update(&created.id, form("from tab one", "Ada")).unwrap();
        store.update(&created.id, form("from tab two", "Ada")).unwrap();
        assert_eq!(store.get(&created.id).unwrap().message, "from tab two");
    }
}
