pub mod common;

use reqwest::StatusCode;

fn ids(tickets: &[it_helpdesk::api::Ticket]) -> Vec<&str> {
    tickets.iter().map(|t| t.id.as_str()).collect()
}

#[tokio::test]
async fn finds_by_last_name_ignoring_case() {
    let tickets = common::Client::seeded()
        .await
        .search_tickets(Some("doe"))
        .await
        .unwrap();
    assert_eq!(ids(&tickets), ["T1001"]);
}

#[tokio::test]
async fn finds_by_full_name() {
    let tickets = common::Client::seeded()
        .await
        .search_tickets(Some("MARIA gar"))
        .await
        .unwrap();
    assert_eq!(ids(&tickets), ["T1004"]);
}

#[tokio::test]
async fn finds_by_id_with_exact_case() {
    let client = common::Client::seeded().await;

    let tickets = client.search_tickets(Some("T1002")).await.unwrap();
    assert_eq!(ids(&tickets), ["T1002"]);

    let tickets = client.search_tickets(Some("t1002")).await.unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn keeps_stored_order() {
    // "Jane", "John", "Alex Johnson" all contain a "j".
    let tickets = common::Client::seeded()
        .await
        .search_tickets(Some("j"))
        .await
        .unwrap();
    assert_eq!(ids(&tickets), ["T1001", "T1002", "T1003"]);
}

#[tokio::test]
async fn returns_empty_list_when_nothing_matches() {
    let tickets = common::Client::seeded()
        .await
        .search_tickets(Some("zzz"))
        .await
        .unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn requires_query() {
    let client = common::Client::seeded().await;

    for query in [None, Some("")] {
        let rejection = client.search_tickets(query).await.unwrap_err();
        assert_eq!(rejection.status, StatusCode::BAD_REQUEST);
        assert_eq!(rejection.body["error"], "Search query is required");
    }
}
