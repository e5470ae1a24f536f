//! Reusable SQL query builder for dynamic WHERE clauses.
//!
//! Conditions and the values they bind are pushed together, so the
//! placeholder a condition receives is always the position of its value in
//! the bind list. Callers never compute `$n` indices by hand.

use sqlx::{Postgres, postgres::PgArguments, query::QueryAs};

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    BigInt(i64),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::BigInt(value)
    }
}

/// A finished SQL statement with its ordered bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Builder for constructing SQL WHERE clauses with parameter tracking.
///
/// # Example
/// ```ignore
/// let mut qb = QueryBuilder::new();
/// qb.add_param_condition("suez", |idx| format!("chokepoint = ${idx}"));
/// qb.add_date_range("date", None, Some("2024-01-31"));
/// assert_eq!(qb.build_where_clause(), "WHERE chokepoint = $1 AND date <= $2::date");
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl QueryBuilder {
    /// Creates a new empty query builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` and adds the condition `condition_fn` renders for its
    /// placeholder index.
    pub fn add_param_condition<F>(&mut self, value: impl Into<SqlParam>, condition_fn: F) -> &mut Self
    where
        F: FnOnce(usize) -> String,
    {
        let idx = self.push_param(value);
        self.conditions.push(condition_fn(idx));
        self
    }

    /// Adds an optional value as a condition if it's Some.
    pub fn add_optional<T, F>(&mut self, value: Option<T>, condition_fn: F) -> &mut Self
    where
        T: Into<SqlParam>,
        F: FnOnce(usize) -> String,
    {
        if let Some(value) = value {
            self.add_param_condition(value, condition_fn);
        }
        self
    }

    /// Adds inclusive lower and upper date bounds on `column`, each only when
    /// supplied. Values are bound as text and cast to `date` by the server.
    pub fn add_date_range(
        &mut self,
        column: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> &mut Self {
        self.add_optional(start_date, |idx| format!("{column} >= ${idx}::date"));
        self.add_optional(end_date, |idx| format!("{column} <= ${idx}::date"));
        self
    }

    /// Binds a value used outside the WHERE clause (e.g. `LIMIT`) and returns
    /// its placeholder index.
    pub fn push_param(&mut self, value: impl Into<SqlParam>) -> usize {
        self.params.push(value.into());
        self.params.len()
    }

    /// Builds the full WHERE clause including the "WHERE" keyword.
    /// Returns "WHERE 1=1" if no conditions (always true).
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "WHERE 1=1".to_string()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Renders `render(where_clause)` into a statement carrying the bound values.
    pub fn finish(self, render: impl FnOnce(&str) -> String) -> Statement {
        let sql = render(&self.build_where_clause());
        Statement {
            sql,
            params: self.params,
        }
    }
}

/// Binds tracked parameters onto a sqlx query in placeholder order.
pub trait BindParams: Sized {
    fn bind_params(self, params: &[SqlParam]) -> Self;
}

impl<'q, O> BindParams for QueryAs<'q, Postgres, O, PgArguments> {
    fn bind_params(self, params: &[SqlParam]) -> Self {
        params.iter().fold(self, |query, param| match param {
            SqlParam::Text(value) => query.bind(value.clone()),
            SqlParam::BigInt(value) => query.bind(*value),
        })
    }
}
