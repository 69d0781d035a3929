pub mod file;
pub mod memory;
pub mod sample;
pub mod ticket;

use std::{io, sync::Arc};

use async_trait::async_trait;
use derive_more::{Display, From};

use crate::config;

pub use self::{file::FileStore, memory::MemoryStore, ticket::Ticket};

#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    #[display("ticket storage I/O failed: {_0}")]
    Io(io::Error),

    #[display("ticket storage holds malformed JSON: {_0}")]
    Json(serde_json::Error),
}

/// Ticket collection shared by all requests.
///
/// Tickets are only ever appended; nothing is updated or removed.
#[async_trait]
pub trait Store: Send + Sync {
    /// All tickets in insertion order.
    async fn list(&self) -> Result<Vec<Ticket>, Error>;

    async fn append(&self, ticket: &Ticket) -> Result<(), Error>;

    /// First ticket with the given id.
    async fn find(&self, id: &ticket::Id) -> Result<Option<Ticket>, Error>;
}

pub type Client = Arc<dyn Store>;

pub async fn connect(config: config::Storage) -> Result<Client, Error> {
    Ok(match config {
        config::Storage::Memory { seed } => {
            let tickets = if seed { sample::tickets() } else { Vec::new() };
            Arc::new(MemoryStore::new(tickets))
        }
        config::Storage::File { path } => {
            Arc::new(FileStore::open(path).await?)
        }
    })
}
