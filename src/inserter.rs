use sqlx::mysql::MySqlConnection;
use sqlx::{Connection, Executor, Statement};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::record::Record;
use crate::result::{DbResult, InsertError};

/// The one statement this tool ever runs. Values travel as bound parameters,
/// never as interpolated SQL text.
pub const INSERT_SQL: &str = "INSERT INTO dados \
    (AlunoID, Nome, Sobrenome, Endereco, Cidade, Host) \
    VALUES (?, ?, ?, ?, ?, ?)";

/// Performs the whole run: connect, generate a [`Record`], insert it through
/// a prepared statement, close the connection.
pub struct RecordInserter {
    config: Config,
}

impl RecordInserter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Inserts one freshly generated record into `dados`.
    ///
    /// The connection is closed on every path past a successful connect,
    /// whether the insert itself succeeded or not.
    ///
    /// # Returns
    ///
    /// The record that was inserted.
    ///
    /// # Errors
    ///
    /// * [`InsertError::Connection`] - the driver could not reach the server.
    /// * [`InsertError::Hostname`] - the local host name is unavailable.
    /// * [`InsertError::Prepare`] - the server rejected the statement text.
    /// * [`InsertError::Execution`] - the server rejected the bound row.
    pub async fn run(&self) -> DbResult<Record> {
        let mut conn = self.connect().await?;
        let result = Self::insert_one(&mut conn).await;

        if let Err(error) = conn.close().await {
            warn!(%error, "connection did not close cleanly");
        }

        result
    }

    async fn connect(&self) -> DbResult<MySqlConnection> {
        debug!(
            host = %self.config.host,
            database = %self.config.database,
            "connecting"
        );
        MySqlConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(InsertError::Connection)
    }

    async fn insert_one(conn: &mut MySqlConnection) -> DbResult<Record> {
        let record = Record::generate()?;
        debug!(id = record.id, token = %record.name, "record generated");

        let statement = conn
            .prepare(INSERT_SQL)
            .await
            .map_err(InsertError::Prepare)?;

        statement
            .query()
            .bind(record.id)
            .bind(&record.name)
            .bind(&record.surname)
            .bind(&record.address)
            .bind(&record.city)
            .bind(&record.host)
            .execute(&mut *conn)
            .await
            .map_err(InsertError::Execution)?;

        info!(id = record.id, "row inserted");
        Ok(record)
    }
}
