use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    api::ticket::TicketInput,
    query,
    validate::{self, ValidationError},
};

/// Support ticket as it is stored and as it is returned by the API.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    /// Request date in `mm/dd/yyyy` form.
    pub req_date: String,
    #[serde(rename = "empID")]
    pub emp_id: String,
    pub f_name: String,
    pub l_name: String,
    pub prob_desc: String,
    pub ticket_type: TicketType,
    #[serde(flatten)]
    pub details: Details,
    /// Addresses found in `prob_desc`, in order of appearance.
    #[serde(default)]
    pub contact_emails: Vec<String>,
    #[serde(default)]
    pub status: Status,
    /// Absent on seeded records that were never created through the API.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

impl Ticket {
    /// A non-empty `id` in the input is kept as is.
    pub fn create(
        input: &TicketInput,
        now: OffsetDateTime,
    ) -> Result<Self, Vec<ValidationError>> {
        let fields = validate::check_ticket(input)?;

        let id = input
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map_or_else(|| Id::generate(now), Id::from);

        Ok(Self {
            id,
            req_date: fields.req_date.to_string(),
            emp_id: fields.emp_id.to_string(),
            f_name: fields.f_name.to_string(),
            l_name: fields.l_name.to_string(),
            prob_desc: fields.prob_desc.to_string(),
            ticket_type: fields.ticket_type,
            details: Details::for_type(fields.ticket_type, input),
            contact_emails: query::extract_emails(fields.prob_desc),
            status: Status::Open,
            created_at: Some(now),
        })
    }
}

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// `TK` followed by the last six digits of the epoch milliseconds.
    ///
    /// Two tickets created within the same millisecond, or exactly
    /// 1000 seconds apart, get the same id. Nothing checks for this.
    pub fn generate(now: OffsetDateTime) -> Self {
        let millis = (now.unix_timestamp_nanos() / 1_000_000).to_string();
        let tail = &millis[millis.len().saturating_sub(6)..];
        Self(format!("TK{tail}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Computer,
    Software,
    Network,
}

impl TicketType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "computer" => Some(Self::Computer),
            "software" => Some(Self::Software),
            "network" => Some(Self::Network),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Software => "software",
            Self::Network => "network",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Status {
    /// Tickets are created open and never leave this state.
    #[default]
    Open,
}

/// Type-specific attributes. At most one pair is set, matching the
/// ticket's [`TicketType`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

impl Details {
    pub fn for_type(ticket_type: TicketType, input: &TicketInput) -> Self {
        let mut details = Self::default();
        match ticket_type {
            TicketType::Computer => {
                if let Some((model, serial)) =
                    pair(&input.computer_model, &input.serial_number)
                {
                    details.computer_model = Some(model);
                    details.serial_number = Some(serial);
                }
            }
            TicketType::Software => {
                if let Some((name, version)) =
                    pair(&input.software_name, &input.software_version)
                {
                    details.software_name = Some(name);
                    details.software_version = Some(version);
                }
            }
            TicketType::Network => {
                if let Some((location, mac)) =
                    pair(&input.network_location, &input.mac_address)
                {
                    details.network_location = Some(location);
                    details.mac_address = Some(mac);
                }
            }
        }
        details
    }
}

fn pair(
    first: &Option<String>,
    second: &Option<String>,
) -> Option<(String, String)> {
    match (first.as_deref(), second.as_deref()) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            Some((a.to_string(), b.to_string()))
        }
        _ => None,
    }
}
