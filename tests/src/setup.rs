use crate::{models, ExecLog, LoggingDriver};

use stardao::{engine::Builder, Engine, Entity, GenericMapper, Value};
use stardao_driver_sqlite::Sqlite;

/// Schema every suite runs against.
pub const SCHEMA: &str = "
CREATE TABLE CITIES (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    NAME TEXT NOT NULL
);

CREATE TABLE USERS (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    LOGIN TEXT NOT NULL UNIQUE,
    EMAIL TEXT,
    CITY_ID INTEGER REFERENCES CITIES (ID)
);

CREATE TABLE MEMBERSHIPS (
    USER_ID INTEGER NOT NULL,
    GROUP_ID INTEGER NOT NULL,
    ROLE TEXT NOT NULL,
    PRIMARY KEY (USER_ID, GROUP_ID)
);
";

/// An engine over a fresh in-memory database, with every operation logged.
pub struct Setup {
    pub engine: Engine,
    log: ExecLog,
}

impl Setup {
    pub fn new() -> Setup {
        Setup::configure(|_| {})
    }

    /// Like [`Setup::new`], letting the test adjust the engine builder first.
    pub fn configure(f: impl FnOnce(&mut Builder)) -> Setup {
        init_tracing();

        let mut builder = Engine::builder();
        builder.mappings(models::mappings());
        f(&mut builder);

        let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
        let log = ExecLog::new(driver.ops_log_handle());

        let engine = builder.build(driver).unwrap();
        engine.execute_script(SCHEMA).unwrap();

        tracing::debug!(
            mappings = engine.mappings().namespaces().count(),
            "test database ready"
        );

        Setup { engine, log }
    }

    pub fn mapper<T, K>(&self, mapping: &str) -> GenericMapper<T, K>
    where
        T: Entity + Default,
        K: Into<Value>,
    {
        GenericMapper::new(&self.engine, mapping).unwrap()
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup::new()
    }
}

fn init_tracing() {
    // Several tests share a process; only the first install wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
