use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::Mutex};
use tracing::{info, warn};

use super::{ticket, Error, Store, Ticket};

/// Keeps all tickets as one JSON array in a single file.
///
/// The whole file is read on every call and rewritten on every append.
/// Appends are serialized within this process only, and a crash during
/// a write may leave the file truncated.
///
/// A record that does not parse as a [`Ticket`] is skipped with a warning
/// and left untouched in the file. Only a file that is not a JSON array
/// fails reads with [`Error::Json`].
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens the file at `path`, creating it and its directory as an
    /// empty collection if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
        {
            fs::create_dir_all(dir).await?;
        }
        if !fs::try_exists(&path).await? {
            fs::write(&path, b"[]").await?;
        }

        match read(&path).await {
            Ok(tickets) => {
                info!(
                    count = tickets.len(),
                    path = %path.display(),
                    "loaded tickets from file"
                );
            }
            // Requests will keep failing until the file is repaired.
            Err(e) => warn!(path = %path.display(), "cannot load tickets: {e}"),
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn read_records(path: &Path) -> Result<Vec<Value>, Error> {
    let raw = fs::read(path).await?;
    Ok(serde_json::from_slice(&raw)?)
}

async fn read(path: &Path) -> Result<Vec<Ticket>, Error> {
    Ok(read_records(path)
        .await?
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            serde_json::from_value(record)
                .inspect_err(|e| {
                    warn!(
                        path = %path.display(),
                        index,
                        "skipping unreadable ticket: {e}"
                    );
                })
                .ok()
        })
        .collect())
}

#[async_trait]
impl Store for FileStore {
    async fn list(&self) -> Result<Vec<Ticket>, Error> {
        read(&self.path).await
    }

    async fn append(&self, ticket: &Ticket) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let mut records = read_records(&self.path).await?;
        records.push(serde_json::to_value(ticket)?);
        fs::write(&self.path, serde_json::to_vec_pretty(&records)?).await?;

        info!(id = %ticket.id, "ticket saved to file");
        Ok(())
    }

    async fn find(&self, id: &ticket::Id) -> Result<Option<Ticket>, Error> {
        Ok(read(&self.path)
            .await?
            .into_iter()
            .find(|ticket| &ticket.id == id))
    }
}
