use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use crate::db::ticket::{Details, Id, Status, Ticket, TicketType};

/// Raw ticket fields as submitted by a client.
///
/// Every field is optional. Values that are present but not JSON strings
/// (numbers, objects, `null`) are read as absent so that the validator,
/// not the deserializer, reports them.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInput {
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_date: Option<String>,
    #[serde(rename = "empID")]
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_desc: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_model: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_location: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

impl From<&Ticket> for TicketInput {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: Some(ticket.id.to_string()),
            req_date: Some(ticket.req_date.clone()),
            emp_id: Some(ticket.emp_id.clone()),
            f_name: Some(ticket.f_name.clone()),
            l_name: Some(ticket.l_name.clone()),
            prob_desc: Some(ticket.prob_desc.clone()),
            ticket_type: Some(ticket.ticket_type.as_str().to_string()),
            computer_model: ticket.details.computer_model.clone(),
            serial_number: ticket.details.serial_number.clone(),
            software_name: ticket.details.software_name.clone(),
            software_version: ticket.details.software_version.clone(),
            network_location: ticket.details.network_location.clone(),
            mac_address: ticket.details.mac_address.clone(),
        }
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
