//! Dynamic partial-UPDATE builder shared by every repository.
//!
//! Each repository feeds this builder from its own hardcoded column names,
//! one `set` call per field present in the update DTO. User input only ever
//! reaches the statement as a bound parameter; column identifiers are
//! compile-time string literals in repository code.

use esports_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

pub struct UpdateBuilder<'args> {
    qb: QueryBuilder<'args, Postgres>,
    fields: usize,
}

impl<'args> UpdateBuilder<'args> {
    /// Start an `UPDATE <table> SET` statement.
    pub fn new(table: &str) -> Self {
        Self {
            qb: QueryBuilder::new(format!("UPDATE {table} SET ")),
            fields: 0,
        }
    }

    /// Append `column = $n` with a bound value.
    ///
    /// `column` must be a trusted literal, never user input.
    pub fn set<T>(&mut self, column: &str, value: T) -> &mut Self
    where
        T: 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Send,
    {
        if self.fields > 0 {
            self.qb.push(", ");
        }
        self.qb.push(column);
        self.qb.push(" = ");
        self.qb.push_bind(value);
        self.fields += 1;
        self
    }

    /// True when no `set` call has been made; callers must reject the
    /// update before executing rather than issue a no-op statement.
    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    /// Append `WHERE id = $n RETURNING <columns>` and hand back the
    /// finished builder for execution. Also bumps `updated_at`, which keeps
    /// the statement valid even for a (caller-rejected) empty field set.
    pub fn finish(mut self, id: DbId, returning: &str) -> QueryBuilder<'args, Postgres> {
        if self.fields > 0 {
            self.qb.push(", ");
        }
        self.qb.push("updated_at = NOW() WHERE id = ");
        self.qb.push_bind(id);
        self.qb.push(format!(" RETURNING {returning}"));
        self.qb
    }

    /// Like [`finish`](Self::finish) for tables without an `updated_at`
    /// column or with a non-`id` key column.
    pub fn finish_where<T>(
        mut self,
        key_column: &str,
        key: T,
        returning: &str,
    ) -> QueryBuilder<'args, Postgres>
    where
        T: 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Send,
    {
        debug_assert!(self.fields > 0, "empty update must be rejected by the caller");
        self.qb.push(" WHERE ");
        self.qb.push(key_column);
        self.qb.push(" = ");
        self.qb.push_bind(key);
        self.qb.push(format!(" RETURNING {returning}"));
        self.qb
    }
}
