pub mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn retrieves_ticket() {
    let client = common::Client::empty().await;

    let created = client.add_ticket(&common::ticket_input()).await.unwrap();
    let ticket = client.get_ticket(created.id.as_str()).await.unwrap();

    assert_eq!(ticket, created);
}

#[tokio::test]
async fn retrieves_seeded_ticket() {
    let ticket = common::Client::seeded()
        .await
        .get_ticket("T1003")
        .await
        .unwrap();

    assert_eq!(ticket.f_name, "Alex");
    assert_eq!(ticket.contact_emails, ["alex.j@example.com"]);
    assert_eq!(
        ticket.details.mac_address.as_deref(),
        Some("AB:CD:EF:12:34:56"),
    );
    assert_eq!(ticket.created_at, None);
}

#[tokio::test]
async fn reports_missing_ticket() {
    let rejection = common::Client::seeded()
        .await
        .get_ticket("T9999")
        .await
        .unwrap_err();

    assert_eq!(rejection.status, StatusCode::NOT_FOUND);
    assert_eq!(rejection.body["error"], "Ticket not found");
}
