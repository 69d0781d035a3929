pub mod ticket;
pub mod user;

use serde::{Deserialize, Serialize};

pub use self::{ticket::Ticket, user::User};

/// Body of every failed request except validation failures.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Error {
    pub error: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Ping {
    pub success: bool,
    pub message: String,
}
