//! MySQL sink backed by a single sqlx connection.
//!
//! sqlx is async; the sink owns a current-thread tokio runtime and blocks on
//! each statement so loading stays strictly sequential.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, MySql};
use tokio::runtime::{Builder, Runtime};

use crate::error::{LoadError, Result};
use crate::sink::{SinkResult, TableSink};
use crate::sql::{InsertStatement, TABLE_CHARSET, TABLE_COLLATION};
use crate::types::SqlValue;

/// Port used when the host does not name one.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection parameters for the destination database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Host name, optionally followed by `:port`.
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Splits `host` into a host name and port.
    pub fn endpoint(&self) -> Result<(String, u16)> {
        match self.host.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse().map_err(|_| LoadError::Config {
                    message: format!("invalid port in database host {:?}", self.host),
                })?;
                Ok((host.to_string(), port))
            }
            None => Ok((self.host.clone(), DEFAULT_MYSQL_PORT)),
        }
    }

    pub fn connect_options(&self) -> Result<MySqlConnectOptions> {
        let (host, port) = self.endpoint()?;
        Ok(MySqlConnectOptions::new()
            .host(&host)
            .port(port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .charset(TABLE_CHARSET)
            .collation(TABLE_COLLATION))
    }
}

/// Sink that writes to MySQL over one long-lived connection.
pub struct MySqlSink {
    runtime: Runtime,
    conn: MySqlConnection,
}

impl MySqlSink {
    /// Opens the connection used for the whole run.
    pub fn connect(config: &DbConfig) -> Result<Self> {
        let options = config.connect_options()?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| LoadError::Runtime { source })?;

        let conn = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(|source| LoadError::Connect {
                host: config.host.clone(),
                database: config.database.clone(),
                source,
            })?;

        tracing::info!(host = %config.host, database = %config.database, "connected to database");
        Ok(Self { runtime, conn })
    }

    /// Closes the connection gracefully.
    pub fn close(self) {
        let Self { runtime, conn } = self;
        if let Err(error) = runtime.block_on(conn.close()) {
            tracing::warn!(%error, "failed to close database connection");
        }
    }
}

impl TableSink for MySqlSink {
    fn execute_ddl(&mut self, statement: &str) -> SinkResult {
        let conn = &mut self.conn;
        self.runtime
            .block_on(sqlx::raw_sql(statement).execute(conn))
            .map(|_| ())
    }

    fn insert_row(&mut self, insert: &InsertStatement, values: &[SqlValue]) -> SinkResult {
        let mut query = sqlx::query::<MySql>(&insert.sql);
        for value in values {
            query = match value {
                SqlValue::Text(text) => query.bind(text.as_str()),
                SqlValue::Bigint(number) => query.bind(*number),
                SqlValue::Double(number) => query.bind(*number),
                // MySQL datetime has no zone; store the UTC instant
                SqlValue::Datetime(timestamp) => query.bind(timestamp.naive_utc()),
            };
        }
        let conn = &mut self.conn;
        self.runtime.block_on(query.execute(conn)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> DbConfig {
        DbConfig {
            host: host.to_string(),
            username: "user".to_string(),
            password: "secret".to_string(),
            database: "db".to_string(),
        }
    }

    #[test]
    fn test_endpoint_default_port() {
        assert_eq!(
            config("localhost").endpoint().unwrap(),
            ("localhost".to_string(), DEFAULT_MYSQL_PORT)
        );
    }

    #[test]
    fn test_endpoint_explicit_port() {
        assert_eq!(
            config("db.internal:3307").endpoint().unwrap(),
            ("db.internal".to_string(), 3307)
        );
    }

    #[test]
    fn test_endpoint_invalid_port() {
        assert!(matches!(
            config("localhost:abc").endpoint(),
            Err(LoadError::Config { .. })
        ));
    }

    #[test]
    fn test_connect_options_builds() {
        assert!(config("localhost").connect_options().is_ok());
    }
}
