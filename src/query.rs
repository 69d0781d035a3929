use std::{
    cmp::{Ordering, Reverse},
    sync::LazyLock,
};

use deunicode::deunicode;
use itertools::Itertools as _;
use regex::Regex;
use time::{Date, Duration, Month};

use crate::db::Ticket;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is valid")
});

pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Id matches are case-sensitive, name matches are not.
pub fn search(tickets: &[Ticket], query: &str) -> Vec<Ticket> {
    let needle = query.to_lowercase();
    tickets
        .iter()
        .filter(|ticket| matches(ticket, query, &needle))
        .cloned()
        .collect()
}

fn matches(ticket: &Ticket, query: &str, needle: &str) -> bool {
    ticket.id.as_str().contains(query)
        || ticket.f_name.to_lowercase().contains(needle)
        || ticket.l_name.to_lowercase().contains(needle)
        || format!("{} {}", ticket.f_name, ticket.l_name)
            .to_lowercase()
            .contains(needle)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    /// Ascending by id.
    Id,
    /// Ascending by last name, then first name.
    Name,
    /// Newest request date first.
    Date,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

pub fn sort(tickets: &[Ticket], key: SortKey) -> Vec<Ticket> {
    let tickets = tickets.iter().cloned();
    match key {
        SortKey::Id => tickets
            .sorted_by(|a, b| locale_cmp(a.id.as_str(), b.id.as_str()))
            .collect(),
        SortKey::Name => tickets
            .sorted_by(|a, b| {
                locale_cmp(&a.l_name, &b.l_name)
                    .then_with(|| locale_cmp(&a.f_name, &b.f_name))
            })
            .collect(),
        // Unparseable dates sort last.
        SortKey::Date => tickets
            .sorted_by_key(|t| Reverse(request_date(&t.req_date)))
            .collect(),
    }
}

pub fn sort_by(tickets: &[Ticket], key: &str) -> Vec<Ticket> {
    match SortKey::parse(key) {
        Some(key) => sort(tickets, key),
        None => tickets.to_vec(),
    }
}

/// `02/30/2025` is read as March 2nd.
pub fn request_date(raw: &str) -> Option<Date> {
    let (month, day, year) = raw
        .split('/')
        .map(|part| part.parse::<i32>().ok())
        .collect_tuple()?;
    let month = Month::try_from(u8::try_from(month?).ok()?).ok()?;
    Date::from_calendar_date(year?, month, 1)
        .ok()?
        .checked_add(Duration::days(i64::from(day?) - 1))
}

/// Accents and case break ties only.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    deunicode(a)
        .to_lowercase()
        .cmp(&deunicode(b).to_lowercase())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or_else(
                    || a.len().cmp(&b.len()),
                    |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    },
                )
        })
}
