//! CRUD operations over members and projects.
//!
//! Every function takes the caller's [`Session`](crate::services::database::Session)
//! and never commits it; committing exactly once is the caller's job. Inputs
//! arrive already validated and are not checked again here.

mod members;
mod projects;

pub use members::*;
pub use projects::*;

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use color_eyre::eyre::eyre;

use crate::domain::{SortOrder, StoreError};

pub(crate) fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::ConstraintViolation(db_err.message().to_owned())
        }
        e @ (sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)) => StoreError::Connectivity(eyre!(e)),
        e => StoreError::UnexpectedError(eyre!(e)),
    }
}

/// Current time at the precision the text column keeps.
fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A fresh `updated_at` that is strictly later than the previous one.
fn next_update_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = timestamp_now();
    match previous {
        Some(previous) if now <= previous => {
            previous + Duration::microseconds(1)
        }
        _ => now,
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| {
            StoreError::UnexpectedError(eyre!(
                "invalid stored timestamp {value:?}: {e}"
            ))
        })
}

fn parse_optional_timestamp(
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, StoreError> {
    value.as_deref().map(parse_timestamp).transpose()
}

/// Optional WHERE conditions with their text binds in placeholder order.
#[derive(Debug, Default)]
struct Filters {
    conditions: Vec<String>,
    binds: Vec<String>,
}

impl Filters {
    /// Case-insensitive substring match on any of `columns`.
    fn search(&mut self, columns: &[&str], term: &str) {
        let pattern = like_pattern(term);
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| {
                self.binds.push(pattern.clone());
                let placeholder = self.binds.len();
                format!("LOWER({column}) LIKE ${placeholder} ESCAPE '\\'")
            })
            .collect();
        self.conditions.push(format!("({})", clauses.join(" OR ")));
    }

    fn equals(&mut self, column: &str, value: &str) {
        self.binds.push(value.to_owned());
        let placeholder = self.binds.len();
        self.conditions.push(format!("{column} = ${placeholder}"));
    }

    fn next_placeholder(&self) -> usize {
        self.binds.len() + 1
    }

    /// `table`, filtered, ordered by `column` with `id` breaking ties, then
    /// limited and offset by the next two placeholders.
    fn select(
        &self,
        columns: &str,
        table: &str,
        column: &str,
        order: SortOrder,
    ) -> String {
        let mut sql = format!("SELECT {columns} FROM {table}");
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        let direction = match order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };
        sql.push_str(&format!(" ORDER BY {column} {direction}"));
        if column != "id" {
            sql.push_str(&format!(", id {direction}"));
        }
        let limit = self.next_placeholder();
        sql.push_str(&format!(" LIMIT ${limit} OFFSET ${}", limit + 1));
        sql
    }
}

/// Lowercased `%term%` with the LIKE wildcards in `term` escaped.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
