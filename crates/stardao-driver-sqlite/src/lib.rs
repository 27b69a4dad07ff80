mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use stardao_core::{
    driver::{Driver, Operation, Response},
    stmt, Error, Result,
};
use stardao_sql::Serializer;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn stardao_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::engine_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::engine_operation_failed)?;
        Ok(Self { connection })
    }
}

impl stardao_core::driver::Connection for Connection {
    fn exec(&mut self, op: Operation) -> Result<Response> {
        let Operation::QuerySql(op) = op;

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = Serializer::sqlite().serialize(&op.stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "executing statement");

        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::engine_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(width) = op.stmt.returning_width() else {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::engine_operation_failed)?;

            return Ok(Response::count(count as u64));
        };

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::engine_operation_failed)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::engine_operation_failed)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                items.push(Value::from_sql(row, index)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }

    fn execute_script(&mut self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::engine_operation_failed)
    }
}
