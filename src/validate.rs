use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

use crate::{api::ticket::TicketInput, db::ticket::TicketType};

static REQ_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$")
        .expect("request date pattern is valid")
});

static EMP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][0-9]{5}$").expect("employee id pattern is valid")
});

static CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]").expect("capitalized name pattern is valid")
});

/// One failed field rule. Displays as the message shown to the user.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ValidationError {
    #[display("Request date must be in mm/dd/yyyy format")]
    RequestDate,

    #[display(
        "Employee ID must start with a capital letter followed by 5 numbers"
    )]
    EmployeeId,

    #[display("First name must start with a capital letter")]
    FirstName,

    #[display("Last name must start with a capital letter")]
    LastName,

    #[display("Problem description is required")]
    ProblemDescription,

    #[display("Invalid ticket type")]
    TicketType,
}

/// Fields of a [`TicketInput`] that passed every rule.
#[derive(Clone, Copy, Debug)]
pub struct CheckedTicket<'a> {
    pub req_date: &'a str,
    pub emp_id: &'a str,
    pub f_name: &'a str,
    pub l_name: &'a str,
    pub prob_desc: &'a str,
    pub ticket_type: TicketType,
}

pub fn validate_ticket(input: &TicketInput) -> Vec<ValidationError> {
    check_ticket(input).err().unwrap_or_default()
}

pub fn check_ticket(
    input: &TicketInput,
) -> Result<CheckedTicket<'_>, Vec<ValidationError>> {
    use ValidationError as E;

    let req_date = matching(&input.req_date, &REQ_DATE);
    let emp_id = matching(&input.emp_id, &EMP_ID);
    let f_name = matching(&input.f_name, &CAPITALIZED);
    let l_name = matching(&input.l_name, &CAPITALIZED);
    let prob_desc = input
        .prob_desc
        .as_deref()
        .filter(|desc| !desc.trim_matches(is_js_whitespace).is_empty());
    let ticket_type = input.ticket_type.as_deref().and_then(TicketType::parse);

    match (req_date, emp_id, f_name, l_name, prob_desc, ticket_type) {
        (
            Some(req_date),
            Some(emp_id),
            Some(f_name),
            Some(l_name),
            Some(prob_desc),
            Some(ticket_type),
        ) => Ok(CheckedTicket {
            req_date,
            emp_id,
            f_name,
            l_name,
            prob_desc,
            ticket_type,
        }),
        _ => Err([
            (req_date.is_none(), E::RequestDate),
            (emp_id.is_none(), E::EmployeeId),
            (f_name.is_none(), E::FirstName),
            (l_name.is_none(), E::LastName),
            (prob_desc.is_none(), E::ProblemDescription),
            (ticket_type.is_none(), E::TicketType),
        ]
        .into_iter()
        .filter_map(|(failed, error)| failed.then_some(error))
        .collect()),
    }
}

fn matching<'a>(
    field: &'a Option<String>,
    pattern: &Regex,
) -> Option<&'a str> {
    field.as_deref().filter(|value| pattern.is_match(value))
}

// Same set as JavaScript's `String.prototype.trim`: BOM in, U+0085 out.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
