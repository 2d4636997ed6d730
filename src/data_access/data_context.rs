use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::ApiError;
use crate::create_todo_request::CreateTodoRequest;
use crate::todo::TodoRecord;
use crate::todo_status::TodoStatus;
use crate::update_todo_request::UpdateTodoRequest;

const SCHEMA_SQL: &str = include_str!("schema.sql");

pub struct DataContext {
    conn: Mutex<Connection>,
}

impl DataContext {
    /// Opens (or creates) the database and runs the DDL batch. `:memory:`
    /// gives every DataContext its own private store.
    pub fn new(path: &str) -> Result<Self, ApiError> {
        if path != ":memory:" {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        ApiError::Internal(format!("cannot create database directory: {e}"))
                    })?;
                }
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(DataContext {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn
            .lock()
            .map_err(|_| ApiError::Internal("database mutex poisoned".to_string()))
    }

    pub fn create_todo(&self, data: &CreateTodoRequest) -> Result<TodoRecord, ApiError> {
        let conn = self.conn()?;
        Self::insert_todo(&conn, data)
    }

    /// Ordered batch insert inside one transaction. Validation happens
    /// before this is called; a mid-batch store failure rolls back the
    /// whole batch.
    pub fn create_todos(&self, data: &[CreateTodoRequest]) -> Result<Vec<TodoRecord>, ApiError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let mut created = Vec::with_capacity(data.len());
        for item in data {
            created.push(Self::insert_todo(&tx, item)?);
        }
        tx.commit()?;
        Ok(created)
    }

    pub fn get_todo(&self, id: i64) -> Result<Option<TodoRecord>, ApiError> {
        let conn = self.conn()?;
        Self::select_todo(&conn, id)
    }

    /// Optional filters are conjunctive. Ordering: due date ascending with
    /// NULL due dates after all dated records, ties by ascending priority.
    pub fn list_todos(
        &self,
        status: Option<TodoStatus>,
        priority: Option<i64>,
    ) -> Result<Vec<TodoRecord>, ApiError> {
        let conn = self.conn()?;

        let mut query = String::from("SELECT * FROM todos WHERE deleted_at IS NULL");
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(status) = status {
            query.push_str(" AND status = ?");
            values.push(Box::new(status));
        }
        if let Some(priority) = priority {
            query.push_str(" AND priority = ?");
            values.push(Box::new(priority));
        }

        query.push_str(
            " ORDER BY CASE WHEN due_date IS NULL THEN 1 ELSE 0 END, due_date ASC, priority ASC",
        );

        let params_refs: Vec<&dyn ToSql> = values.iter().map(AsRef::as_ref).collect();
        let mut stmt = conn.prepare(&query)?;
        let todos = stmt
            .query_map(params_refs.as_slice(), todo_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(todos)
    }

    /// Applies exactly the fields present in the request. `updated_at` is
    /// refreshed even for a zero-field update. Returns `None` when the id
    /// is absent or soft-deleted.
    pub fn update_todo(
        &self,
        id: i64,
        data: &UpdateTodoRequest,
    ) -> Result<Option<TodoRecord>, ApiError> {
        let conn = self.conn()?;

        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(description) = &data.description {
            sets.push("description = ?");
            values.push(Box::new(description.clone()));
        }
        if let Some(due_date_text) = &data.due_date_text {
            sets.push("due_date_text = ?");
            values.push(Box::new(due_date_text.clone()));
        }
        if let Some(due_date) = data.due_date {
            sets.push("due_date = ?");
            values.push(Box::new(due_date));
        }
        if let Some(notes) = &data.notes {
            sets.push("notes = ?");
            values.push(Box::new(notes.clone()));
        }
        if let Some(priority) = data.priority {
            sets.push("priority = ?");
            values.push(Box::new(priority));
        }
        if let Some(gcal_event_id) = &data.gcal_event_id {
            sets.push("gcal_event_id = ?");
            values.push(Box::new(gcal_event_id.clone()));
        }

        sets.push("updated_at = ?");
        values.push(Box::new(Utc::now()));
        values.push(Box::new(id));

        let sql = format!(
            "UPDATE todos SET {} WHERE id = ? AND deleted_at IS NULL",
            sets.join(", ")
        );
        let params_refs: Vec<&dyn ToSql> = values.iter().map(AsRef::as_ref).collect();
        let changed = conn.execute(&sql, params_refs.as_slice())?;

        if changed == 0 {
            return Ok(None);
        }
        Self::select_todo(&conn, id)
    }

    /// Soft delete. False when the id is absent or already deleted.
    pub fn delete_todo(&self, id: i64) -> Result<bool, ApiError> {
        let conn = self.conn()?;
        let now = Utc::now();
        let changed = conn.execute(
            "UPDATE todos SET deleted_at = ?1, updated_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
            params![now, id],
        )?;
        Ok(changed > 0)
    }

    /// Idempotent in effect: a second call re-stamps the timestamps and
    /// leaves the status completed.
    pub fn complete_todo(&self, id: i64) -> Result<Option<TodoRecord>, ApiError> {
        let conn = self.conn()?;
        let now = Utc::now();
        let changed = conn.execute(
            "UPDATE todos SET status = 'completed', completed_at = ?1, updated_at = ?1 \
             WHERE id = ?2 AND deleted_at IS NULL",
            params![now, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Self::select_todo(&conn, id)
    }

    pub fn reopen_todo(&self, id: i64) -> Result<Option<TodoRecord>, ApiError> {
        let conn = self.conn()?;
        let now = Utc::now();
        let changed = conn.execute(
            "UPDATE todos SET status = 'pending', completed_at = NULL, updated_at = ?1 \
             WHERE id = ?2 AND deleted_at IS NULL",
            params![now, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Self::select_todo(&conn, id)
    }

    /// Physically removes every soft-deleted record. The single DELETE is
    /// atomic, so the changed-row count is exactly the purged set.
    pub fn purge_deleted(&self) -> Result<usize, ApiError> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM todos WHERE deleted_at IS NOT NULL", [])?;
        Ok(changed)
    }

    fn insert_todo(conn: &Connection, data: &CreateTodoRequest) -> Result<TodoRecord, ApiError> {
        let now = Utc::now();
        conn.execute(
            "INSERT INTO todos (description, due_date_text, due_date, notes, priority, \
             gcal_event_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                data.description,
                data.due_date_text,
                data.due_date,
                data.notes,
                data.priority,
                data.gcal_event_id,
                now,
            ],
        )?;
        let id = conn.last_insert_rowid();

        // Re-read so the caller sees exactly what was persisted.
        Self::select_todo(conn, id)?
            .ok_or_else(|| ApiError::Internal(format!("todo {id} missing right after insert")))
    }

    fn select_todo(conn: &Connection, id: i64) -> Result<Option<TodoRecord>, ApiError> {
        let todo = conn
            .query_row(
                "SELECT * FROM todos WHERE id = ?1 AND deleted_at IS NULL",
                params![id],
                todo_from_row,
            )
            .optional()?;
        Ok(todo)
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<TodoRecord> {
    Ok(TodoRecord {
        id: row.get("id")?,
        description: row.get("description")?,
        due_date_text: row.get("due_date_text")?,
        due_date: row.get("due_date")?,
        notes: row.get("notes")?,
        priority: row.get("priority")?,
        status: row.get("status")?,
        gcal_event_id: row.get("gcal_event_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        completed_at: row.get("completed_at")?,
    })
}
