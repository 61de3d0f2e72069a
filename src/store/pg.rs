use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::result::DatabaseErrorKind;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use nanoid::nanoid;

use super::{NoteStore, StoreError, ID_LEN};
use crate::{
    models::note::{Note, NoteForm},
    schema::notes::dsl::notes,
    utils::unix_now,
};

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: u32) -> Result<Pool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder().max_size(max_size).build(manager)
}

pub fn run_migrations(pool: &Pool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut pooled = pool.get()?;
    let connection: &mut PgConnection = &mut pooled;
    let applied = connection.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

#[derive(Clone)]
pub struct PgNoteStore {
    pool: Pool,
}

impl PgNoteStore {
    pub fn new(pool: Pool) -> Self {
        PgNoteStore { pool }
    }
}

impl NoteStore for PgNoteStore {
    fn list(&self) -> Result<Vec<Note>, StoreError> {
        let mut connection = self.pool.get()?;
        Ok(notes.load::<Note>(&mut connection)?)
    }

    fn get(&self, note_id: &str) -> Result<Note, StoreError> {
        let mut connection = self.pool.get()?;

        notes
            .find(note_id)
            .first::<Note>(&mut connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(note_id.to_owned()))
    }

    fn create(&self, form: NoteForm) -> Result<Note, StoreError> {
        let mut connection = self.pool.get()?;
        let time_now = unix_now();

        // a 12-char nanoid colliding is rare enough that retrying is all we do
        loop {
            let note = form.clone().into_note(nanoid!(ID_LEN), time_now);

            match diesel::insert_into(notes)
                .values(&note)
                .get_result::<Note>(&mut connection)
            {
                Ok(created) => break Ok(created),
                Err(diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => {
                    log::debug!("note id {} was taken, retrying", note.id);
                    continue;
                }
                Err(e) => break Err(e.into()),
            }
        }
    }

    fn update(&self, note_id: &str, form: NoteForm) -> Result<Note, StoreError> {
        let mut connection = self.pool.get()?;

        diesel::update(notes.find(note_id))
            .set(&form.into_changes())
            .get_result::<Note>(&mut connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(note_id.to_owned()))
    }

    fn delete(&self, note_id: &str) -> Result<(), StoreError> {
        let mut connection = self.pool.get()?;

        match diesel::delete(notes.find(note_id)).execute(&mut connection)? {
            0 => Err(StoreError::NotFound(note_id.to_owned())),
            _ => Ok(()),
        }
    }
}
