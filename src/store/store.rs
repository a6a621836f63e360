//! Schema-enforcing store
//!
//! [`SchemaStore`] records the schema of every table it creates and checks
//! each insert against it before the rows reach the engine. The engine
//! connection exists only inside a [`Session`].

use rusqlite::{params_from_iter, Connection};
use tracing::{debug, info};

use super::config::{Location, StoreConfig};
use super::session::{Session, SessionState};
use super::value::{Row, Value};
use crate::catalog::{Catalog, ColumnSpec, TableSchema};
use crate::error::{Error, Result};
use crate::sql::{builder, Target};

/// Typed wrapper around an embedded SQLite database
#[derive(Debug)]
pub struct SchemaStore {
    config: StoreConfig,
    catalog: Catalog,
    conn: Option<Connection>,
    state: SessionState,
}

impl SchemaStore {
    /// Create a store over the given location; no connection is opened yet
    pub fn new(location: Location) -> Self {
        Self::with_config(StoreConfig::new(location))
    }

    /// Create a store over an in-memory database
    pub fn in_memory() -> Self {
        Self::with_config(StoreConfig::in_memory())
    }

    /// Create a store from a full configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            conn: None,
            state: SessionState::Unopened,
        }
    }

    // ========== Session Lifecycle ==========

    /// Open a connection and return the guard that closes it again
    pub fn open(&mut self) -> Result<Session<'_>> {
        if self.state.is_active() {
            return Err(Error::AlreadyActive);
        }

        let conn = match &self.config.location {
            Location::Memory => Connection::open_in_memory()?,
            Location::File(path) => Connection::open(path)?,
        };
        conn.busy_timeout(self.config.busy_timeout_duration())?;
        if self.config.foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON")?;
        }

        self.conn = Some(conn);
        self.state = SessionState::Active;
        info!(location = %self.config.location, "session opened");

        Ok(Session::new(self))
    }

    /// Run `f` inside a session, closing it on every exit path
    pub fn with_session<T, E, F>(&mut self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut SchemaStore) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let mut session = self.open()?;
        let output = f(&mut session)?;
        session.close()?;
        Ok(output)
    }

    /// Release the connection if one is held
    pub(crate) fn release(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        self.state = SessionState::Closed;
        info!(location = %self.config.location, "session closed");
        conn.close().map_err(|(_, e)| Error::Engine(e))
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a session is active
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Configured data location
    pub fn location(&self) -> &Location {
        &self.config.location
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::NotActive(self.state))
    }

    fn ensure_active(&self) -> Result<()> {
        self.connection().map(|_| ())
    }

    // ========== Operations ==========

    /// Create a table and record its schema.
    ///
    /// The primary key must name one of the columns; otherwise nothing is
    /// recorded and no statement is issued. Re-creating a recorded table
    /// replaces its schema entry, while the engine decides whether the table
    /// itself may be created again.
    pub fn create<I, C>(&mut self, table: &str, schema: I, primary_key: &str) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnSpec>,
    {
        self.ensure_active()?;

        let columns = schema.into_iter().map(Into::into).collect();
        let schema = TableSchema::new(table, columns, primary_key)?;
        let sql = builder::create_table(table, &schema);

        self.catalog.register(table, schema);

        debug!(table, %sql, "create table");
        self.connection()?.execute(&sql, [])?;
        Ok(())
    }

    /// Insert rows into a table as one batch.
    ///
    /// Every row is checked for arity and then for value types before any
    /// row is submitted; the batch runs in one engine transaction. Returns
    /// the number of rows inserted.
    pub fn insert<I>(&mut self, table: &str, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = Row>,
    {
        self.ensure_active()?;

        let schema = self.catalog.get(table)?;
        let rows: Vec<Row> = rows.into_iter().collect();
        validate_rows(table, schema, &rows)?;

        if rows.is_empty() {
            return Ok(0);
        }

        let sql = builder::insert(table, schema.column_count());
        debug!(table, %sql, rows = rows.len(), "insert");

        let conn = self.conn.as_mut().ok_or(Error::NotActive(self.state))?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in &rows {
                stmt.execute(params_from_iter(row.values()))?;
            }
        }
        tx.commit()?;

        Ok(rows.len())
    }

    /// Select rows from a table.
    ///
    /// Without `columns`, the recorded schema's columns are listed by name
    /// so every returned row has the schema's arity and order.
    pub fn select(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        target: Option<Target>,
    ) -> Result<Vec<Row>> {
        let conn = self.connection()?;

        let columns = match columns {
            Some(columns) => columns.to_vec(),
            None => self.catalog.get(table)?.column_names(),
        };
        let sql = builder::select(table, &columns, target.as_ref());
        debug!(table, %sql, "select");

        let params: Vec<&Value> = target.iter().map(Target::value).collect();
        let mut stmt = conn.prepare(&sql)?;
        let width = stmt.column_count();

        let rows = stmt
            .query_map(params_from_iter(params), |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map(Row::new)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Set one column on every row where `target` matches by equality.
    /// Returns the number of rows changed.
    pub fn update<V, W>(
        &mut self,
        table: &str,
        new_value: (&str, V),
        target: (&str, W),
    ) -> Result<usize>
    where
        V: Into<Value>,
        W: Into<Value>,
    {
        let conn = self.connection()?;

        let (set_column, set_value) = (new_value.0, new_value.1.into());
        let (target_column, target_value) = (target.0, target.1.into());

        let sql = builder::update(table, set_column, target_column);
        debug!(table, %sql, "update");

        let changed = conn.execute(&sql, [&set_value, &target_value])?;
        Ok(changed)
    }

    /// Delete every row where `target` matches by equality.
    /// Returns the number of rows removed.
    pub fn delete<V>(&mut self, table: &str, target: (&str, V)) -> Result<usize>
    where
        V: Into<Value>,
    {
        let conn = self.connection()?;

        let (target_column, target_value) = (target.0, target.1.into());
        let sql = builder::delete(table, target_column);
        debug!(table, %sql, "delete");

        let changed = conn.execute(&sql, [&target_value])?;
        Ok(changed)
    }

    /// Total row changes made through the active connection; 0 outside a session
    pub fn num_transactions(&self) -> Result<u64> {
        let Some(conn) = self.conn.as_ref() else {
            return Ok(0);
        };
        let total: i64 = conn.query_row("SELECT total_changes()", [], |row| row.get(0))?;
        Ok(total.max(0) as u64)
    }

    // ========== Catalog Access ==========

    /// Names of the tables created through this store, in creation order
    pub fn tables(&self) -> Vec<&str> {
        self.catalog.table_names()
    }

    /// Recorded schema of a table
    pub fn schema(&self, table: &str) -> Result<&TableSchema> {
        self.catalog.get(table)
    }

    /// Human-readable description of a table's schema
    pub fn describe(&self, table: &str) -> Result<String> {
        self.catalog.describe(table)
    }

    /// The schema catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Check every row against the schema: all arities first, then all types
fn validate_rows(table: &str, schema: &TableSchema, rows: &[Row]) -> Result<()> {
    let expected = schema.column_count();
    if let Some(row) = rows.iter().find(|row| row.len() != expected) {
        return Err(Error::ArityMismatch {
            table: table.to_string(),
            expected,
            found: row.len(),
        });
    }

    for row in rows {
        for (value, column) in row.values().iter().zip(schema.columns()) {
            if !column.column_type.accepts(value) {
                return Err(Error::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.column_type,
                    found: match value {
                        Value::Real(f) if f.is_nan() => "NaN",
                        _ => value.type_name(),
                    },
                });
            }
        }
    }

    Ok(())
}
