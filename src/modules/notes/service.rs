use serde_json::{Map, Value};
use sqlx::PgPool;
use tasknote_core::{AppError, UserId};
use tasknote_db::{OwnerScope, UpdatePlanner, delete_owned, fetch_owned};
use tasknote_models::notes::NOTE_COLUMNS;
use tasknote_models::{CreateNoteDto, NOTE_RESOURCE, Note, NoteSummary};
use tracing::{info, instrument};

pub struct NoteService;

impl NoteService {
    #[instrument(skip(db))]
    pub async fn create_note(
        db: &PgPool,
        user_id: UserId,
        dto: CreateNoteDto,
    ) -> Result<Note, AppError> {
        let sql = format!(
            "INSERT INTO notes (user_id, title, content) VALUES ($1, $2, $3) RETURNING {}",
            NOTE_COLUMNS
        );

        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(user_id)
            .bind(dto.title.trim())
            .bind(&dto.content)
            .fetch_one(db)
            .await?;

        info!(note_id = note.id, "Note created");

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn list_notes(db: &PgPool, user_id: UserId) -> Result<Vec<NoteSummary>, AppError> {
        let notes = sqlx::query_as::<_, NoteSummary>(
            "SELECT id, title FROM notes WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(notes)
    }

    #[instrument(skip(db))]
    pub async fn get_note(db: &PgPool, user_id: UserId, note_id: i64) -> Result<Note, AppError> {
        fetch_owned(db, &NOTE_RESOURCE, OwnerScope::new(note_id, user_id)).await
    }

    #[instrument(skip(db, planner, body))]
    pub async fn update_note(
        db: &PgPool,
        planner: &UpdatePlanner,
        user_id: UserId,
        note_id: i64,
        body: &Map<String, Value>,
    ) -> Result<Note, AppError> {
        let note: Note = planner
            .plan(&NOTE_RESOURCE, body, OwnerScope::new(note_id, user_id))?
            .execute(db)
            .await?;

        info!(note_id, "Note updated");

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn delete_note(db: &PgPool, user_id: UserId, note_id: i64) -> Result<(), AppError> {
        delete_owned(db, &NOTE_RESOURCE, OwnerScope::new(note_id, user_id)).await?;

        info!(note_id, "Note deleted");

        Ok(())
    }
}
