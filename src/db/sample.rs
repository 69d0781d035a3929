use super::ticket::{Details, Id, Status, Ticket, TicketType};

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            details: Details {
                computer_model: Some("Dell XPS 15".into()),
                serial_number: Some("XPS15-9876543".into()),
                ..Details::default()
            },
            ..seed(
                "T1001",
                TicketType::Computer,
                "05/09/2025",
                "A12345",
                ("Jane", "Doe"),
                "Monitor displays blue screen intermittently. \
                 Contact me at jane.doe@example.com",
            )
        },
        Ticket {
            details: Details {
                software_name: Some("Windows File Explorer".into()),
                software_version: Some("11.0".into()),
                ..Details::default()
            },
            ..seed(
                "T1002",
                TicketType::Software,
                "05/08/2025",
                "B54321",
                ("John", "Smith"),
                "Cannot access shared network drive. \
                 Please email john.smith@example.com for details.",
            )
        },
        Ticket {
            details: Details {
                network_location: Some("Building 2, Floor 3".into()),
                mac_address: Some("AB:CD:EF:12:34:56".into()),
                ..Details::default()
            },
            ..seed(
                "T1003",
                TicketType::Network,
                "05/07/2025",
                "C98765",
                ("Alex", "Johnson"),
                "Wi-Fi keeps disconnecting in meeting room B. \
                 alex.j@example.com",
            )
        },
        Ticket {
            details: Details {
                software_name: Some("SalesPro CRM".into()),
                software_version: Some("3.2.1".into()),
                ..Details::default()
            },
            ..seed(
                "T1004",
                TicketType::Software,
                "05/06/2025",
                "D45678",
                ("Maria", "Garcia"),
                "CRM application crashes when generating reports. \
                 Contact: m.garcia@example.com",
            )
        },
        Ticket {
            details: Details {
                computer_model: Some("HP LaserJet Pro".into()),
                serial_number: Some("HP-LJ-5432109".into()),
                ..Details::default()
            },
            ..seed(
                "T1005",
                TicketType::Computer,
                "05/05/2025",
                "E87654",
                ("David", "Kim"),
                "Printer not responding to print jobs. \
                 Email d.kim@example.com for status.",
            )
        },
    ]
}

fn seed(
    id: &str,
    ticket_type: TicketType,
    req_date: &str,
    emp_id: &str,
    (f_name, l_name): (&str, &str),
    prob_desc: &str,
) -> Ticket {
    Ticket {
        id: Id::from(id),
        req_date: req_date.into(),
        emp_id: emp_id.into(),
        f_name: f_name.into(),
        l_name: l_name.into(),
        prob_desc: prob_desc.into(),
        ticket_type,
        details: Details::default(),
        contact_emails: crate::query::extract_emails(prob_desc),
        status: Status::Open,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::ticket::TicketInput, validate::validate_ticket};

    #[test]
    fn samples_pass_validation() {
        for ticket in tickets() {
            let input = TicketInput::from(&ticket);
            assert!(validate_ticket(&input).is_empty(), "{}", ticket.id);
            assert_eq!(ticket.contact_emails.len(), 1, "{}", ticket.id);
        }
    }
}
