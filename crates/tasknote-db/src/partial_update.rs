//! Partial updates driven by field presence.
//!
//! A [`Resource`] names a table, its id and owner columns and the ordered
//! allow-list of fields a caller may change. [`UpdatePlanner::plan`] walks
//! that allow-list over a sparse JSON object and produces an [`UpdatePlan`]:
//! one parameterized `UPDATE` whose `WHERE` clause always carries the
//! ownership predicate. Keys outside the allow-list never reach the SQL text,
//! and values only ever travel as bound parameters.
//!
//! ```text
//! {"title": "Buy milk", "owner": 9}
//!   -> UPDATE tasks SET title = $1 WHERE id = $2 AND user_id = $3 RETURNING ...
//! ```

use std::fmt;

use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool, Postgres, Transaction, postgres::PgRow};
use tasknote_core::{AppError, errors::codes, hash_password};
use tracing::{debug, error, instrument, warn};
use validator::ValidateEmail;

use crate::scoped::{OwnerScope, not_found};

/// How a field's value is checked and converted before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string, stored as given.
    Text,
    /// A string with at least one non-whitespace character, stored trimmed.
    NonEmptyText,
    /// Eleven ASCII digits starting with `1`.
    Phone,
    Email,
    /// A raw password; only its digest is bound.
    Secret,
    /// A date-time, normalized to UTC. See [`parse_timestamp`].
    Timestamp,
}

/// One allow-listed field of a [`Resource`].
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Key expected in the request body.
    pub name: &'static str,
    /// Alternative keys accepted for the same field.
    pub aliases: &'static [&'static str],
    pub column: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            aliases: &[],
            column,
            kind,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Static description of an updatable table.
#[derive(Debug)]
pub struct Resource {
    /// Human name used in not-found messages, e.g. `"Task"`.
    pub label: &'static str,
    pub table: &'static str,
    pub id_column: &'static str,
    pub owner_column: &'static str,
    pub fields: &'static [Field],
    /// Column set to `NOW()` on every update.
    pub touch_column: Option<&'static str>,
    /// Column list of the `RETURNING` and `SELECT` projections.
    pub returning: &'static str,
    /// Message reported when an update hits a unique constraint.
    pub unique_violation: Option<&'static str>,
}

/// A value bound to a `$n` placeholder.
#[derive(Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

// Password digests travel as Text; keep every value out of the logs.
impl fmt::Debug for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Text(_) => f.write_str("Text(..)"),
            BindValue::Timestamp(ts) => write!(f, "Timestamp({})", ts),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("No updatable fields provided")]
    NoUpdatableFields,

    #[error("Invalid format for field '{field}': {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl PlanError {
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::NoUpdatableFields => codes::NO_UPDATABLE_FIELDS,
            PlanError::InvalidFormat { .. } => codes::INVALID_FORMAT,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError::new(StatusCode::BAD_REQUEST, err.code(), err)
    }
}

/// Stages of a mutation, recorded on trace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Received,
    Validated,
    Planned,
    Executed,
    Committed,
    RolledBack,
    Rejected,
}

impl MutationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationState::Received => "received",
            MutationState::Validated => "validated",
            MutationState::Planned => "planned",
            MutationState::Executed => "executed",
            MutationState::Committed => "committed",
            MutationState::RolledBack => "rolled_back",
            MutationState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for MutationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eleven ASCII digits, the first being `1`.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 11 && phone.starts_with('1') && phone.bytes().all(|b| b.is_ascii_digit())
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a client date-time and normalizes it to UTC.
///
/// RFC 3339 input keeps its own offset. Input without zone information is
/// read as wall-clock time at `local_offset`.
pub fn parse_timestamp(input: &str, local_offset: FixedOffset) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| local_offset.from_local_datetime(&naive).single())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Builds [`UpdatePlan`]s. Holds only the offset used for naive timestamps.
#[derive(Debug, Clone, Copy)]
pub struct UpdatePlanner {
    local_offset: FixedOffset,
}

impl UpdatePlanner {
    pub fn new(local_offset: FixedOffset) -> Self {
        Self { local_offset }
    }

    pub fn local_offset(&self) -> FixedOffset {
        self.local_offset
    }

    /// Selects and validates the allow-listed fields present in `body`.
    ///
    /// Absent and `null` fields are left untouched. Fails with
    /// [`PlanError::NoUpdatableFields`] when nothing remains.
    pub fn plan(
        &self,
        resource: &'static Resource,
        body: &Map<String, Value>,
        scope: OwnerScope,
    ) -> Result<UpdatePlan, PlanError> {
        debug!(state = %MutationState::Received, table = resource.table, "Planning update");

        let assignments = self.select(resource, body).inspect_err(|err| {
            debug!(state = %MutationState::Rejected, table = resource.table, error = %err);
        })?;

        debug!(
            state = %MutationState::Validated,
            table = resource.table,
            fields = assignments.len()
        );

        let plan = UpdatePlan {
            resource,
            assignments,
            scope,
        };

        debug!(state = %MutationState::Planned, table = resource.table, columns = ?plan.columns());

        Ok(plan)
    }

    fn select(
        &self,
        resource: &Resource,
        body: &Map<String, Value>,
    ) -> Result<Vec<(&'static str, BindValue)>, PlanError> {
        let mut assignments = Vec::new();

        for field in resource.fields {
            let Some(value) = field
                .keys()
                .find_map(|key| body.get(key).filter(|v| !v.is_null()))
            else {
                continue;
            };

            assignments.push((field.column, self.convert(field, value)?));
        }

        if assignments.is_empty() {
            return Err(PlanError::NoUpdatableFields);
        }

        Ok(assignments)
    }

    fn convert(&self, field: &Field, value: &Value) -> Result<BindValue, PlanError> {
        let invalid = |reason| PlanError::InvalidFormat {
            field: field.name,
            reason,
        };

        let text = value.as_str().ok_or_else(|| invalid("expected a string"))?;

        match field.kind {
            FieldKind::Text => Ok(BindValue::Text(text.to_string())),
            FieldKind::NonEmptyText => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                Ok(BindValue::Text(trimmed.to_string()))
            }
            FieldKind::Phone => {
                if !is_valid_phone(text) {
                    return Err(invalid("expected 11 digits starting with 1"));
                }
                Ok(BindValue::Text(text.to_string()))
            }
            FieldKind::Email => {
                if !text.validate_email() {
                    return Err(invalid("expected an email address"));
                }
                Ok(BindValue::Text(text.to_string()))
            }
            FieldKind::Secret => {
                if text.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                Ok(BindValue::Text(hash_password(text)))
            }
            FieldKind::Timestamp => parse_timestamp(text, self.local_offset)
                .map(BindValue::Timestamp)
                .ok_or_else(|| invalid("expected YYYY-MM-DD HH:MM[:SS] or RFC 3339")),
        }
    }
}

/// A validated, owner-scoped update ready to run.
#[derive(Debug)]
pub struct UpdatePlan {
    resource: &'static Resource,
    assignments: Vec<(&'static str, BindValue)>,
    scope: OwnerScope,
}

impl UpdatePlan {
    /// Columns assigned from the request, in allow-list order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(column, _)| *column).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &BindValue> {
        self.assignments.iter().map(|(_, value)| value)
    }

    pub fn scope(&self) -> OwnerScope {
        self.scope
    }

    /// The statement text. Placeholders `$1..$k` carry the values, `$k+1`
    /// the resource id and `$k+2` the owner id.
    pub fn sql(&self) -> String {
        let mut set: Vec<String> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
            .collect();

        if let Some(touch) = self.resource.touch_column {
            set.push(format!("{} = NOW()", touch));
        }

        let id_param = self.assignments.len() + 1;

        format!(
            "UPDATE {} SET {} WHERE {} = ${} AND {} = ${} RETURNING {}",
            self.resource.table,
            set.join(", "),
            self.resource.id_column,
            id_param,
            self.resource.owner_column,
            id_param + 1,
            self.resource.returning
        )
    }

    /// Runs the statement in its own transaction and returns the updated row.
    ///
    /// Zero affected rows, whether the record is missing or owned by someone
    /// else, roll back and surface as not-found.
    #[instrument(skip(self, db), fields(table = self.resource.table))]
    pub async fn execute<T>(self, db: &PgPool) -> Result<T, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.sql();
        let resource = self.resource;
        let scope = self.scope;

        let mut query = sqlx::query_as::<_, T>(&sql);
        for (_, value) in self.assignments {
            query = match value {
                BindValue::Text(text) => query.bind(text),
                BindValue::Timestamp(ts) => query.bind(ts),
            };
        }
        let query = query.bind(scope.resource_id).bind(scope.owner_id);

        let mut tx = db.begin().await?;
        let outcome = query.fetch_optional(&mut *tx).await;
        debug!(state = %MutationState::Executed);

        match outcome {
            Ok(Some(row)) => {
                tx.commit().await?;
                debug!(state = %MutationState::Committed);
                Ok(row)
            }
            Ok(None) => {
                rollback(tx).await;
                debug!(state = %MutationState::RolledBack, "No row matched");
                Err(not_found(resource))
            }
            Err(err) => {
                rollback(tx).await;
                warn!(state = %MutationState::RolledBack, error = %err, "Update failed");
                Err(match resource.unique_violation {
                    Some(message) => AppError::from_unique_violation(err, message),
                    None => AppError::storage(err),
                })
            }
        }
    }
}

/// Rolls back without masking the outcome that triggered it.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(err) = tx.rollback().await {
        error!(error = %err, "Failed to roll back update");
    }
}
