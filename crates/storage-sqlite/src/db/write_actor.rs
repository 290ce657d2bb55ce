//! Serialized write path for the SQLite database.
//!
//! All mutations funnel through one writer thread; each job runs inside an
//! immediate transaction, so a batch submitted as one job commits or rolls
//! back as a unit and readers never observe a partial batch.

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::error;
use tokio::sync::{mpsc, oneshot};

use armory_core::errors::{DatabaseError, Error, Result};

type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) + Send + 'static>;

/// Handle for submitting write jobs to the writer thread.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::UnboundedSender<WriteJob>,
}

enum TxError {
    App(Error),
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        TxError::Db(err)
    }
}

impl WriteHandle {
    /// Run `job` on the writer connection inside an immediate transaction.
    /// An `Err` return rolls the whole job back.
    pub async fn exec<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let boxed: WriteJob = Box::new(move |conn| {
            let outcome = conn
                .immediate_transaction(|tx| job(tx).map_err(TxError::App))
                .map_err(|err| match err {
                    TxError::App(e) => e,
                    TxError::Db(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
                });
            let _ = done_tx.send(outcome);
        });

        self.tx.send(boxed).map_err(|_| writer_gone())?;
        done_rx.await.unwrap_or_else(|_| Err(writer_gone()))
    }
}

fn writer_gone() -> Error {
    Error::Database(DatabaseError::Internal(
        "Database writer is not running".to_string(),
    ))
}

/// Spawn the writer thread. Jobs run one at a time in submission order.
pub fn spawn_writer(pool: Pool<ConnectionManager<SqliteConnection>>) -> WriteHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<WriteJob>();

    std::thread::Builder::new()
        .name("armory-db-writer".to_string())
        .spawn(move || {
            while let Some(job) = rx.blocking_recv() {
                match pool.get() {
                    Ok(mut conn) => job(&mut conn),
                    // Dropping the job drops its result channel; the caller
                    // sees a writer error.
                    Err(e) => error!("Writer could not acquire a connection: {e}"),
                }
            }
        })
        .expect("Failed to spawn database writer thread");

    WriteHandle { tx }
}
