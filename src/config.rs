use std::{net, path::PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub http: Http,
    pub storage: Storage,
}

#[derive(Deserialize)]
pub struct Http {
    pub server: Server,
    #[serde(default)]
    pub cors: Cors,
    /// Directory of the browser client. API-only when unset.
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Server {
    pub addr: net::SocketAddr,
}

#[derive(Default, Deserialize)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}

/// Where tickets live. Exactly one backend is active per process.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Storage {
    /// Lost on restart. `seed` preloads the demo tickets.
    Memory {
        #[serde(default)]
        seed: bool,
    },
    /// A single JSON array file, rewritten on every new ticket.
    File { path: PathBuf },
}
