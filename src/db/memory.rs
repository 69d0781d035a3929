use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::{ticket, Error, Store, Ticket};

/// Keeps tickets for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tickets: RwLock<Vec<Ticket>>,
}

impl MemoryStore {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        info!(count = tickets.len(), "loaded tickets into memory");
        Self {
            tickets: RwLock::new(tickets),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list(&self) -> Result<Vec<Ticket>, Error> {
        Ok(self.tickets.read().await.clone())
    }

    async fn append(&self, ticket: &Ticket) -> Result<(), Error> {
        self.tickets.write().await.push(ticket.clone());
        info!(id = %ticket.id, "ticket stored in memory");
        Ok(())
    }

    async fn find(&self, id: &ticket::Id) -> Result<Option<Ticket>, Error> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .find(|ticket| &ticket.id == id)
            .cloned())
    }
}
