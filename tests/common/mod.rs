use constcat::concat;
use it_helpdesk::{api, config, db, server};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;

const API: &str = "/api";
const PING: &str = concat!(API, "/ping");
const LOGIN: &str = concat!(API, "/login");
const TICKETS: &str = concat!(API, "/tickets");
const SEARCH: &str = concat!(TICKETS, "/search");

pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

/// Status and JSON body of a non-2xx response.
#[derive(Debug)]
pub struct Rejection {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl Client {
    /// Starts a server on an ephemeral port backed by `storage`.
    pub async fn spawn(storage: config::Storage) -> Self {
        let db_client =
            db::connect(storage).await.expect("failed to open storage");
        let http = config::Http {
            server: config::Server {
                addr: "127.0.0.1:0".parse().expect("valid address"),
            },
            cors: config::Cors::default(),
            public_dir: None,
        };
        let app = server::app(&http, db_client).expect("valid CORS config");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("no local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            inner: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    pub async fn seeded() -> Self {
        Self::spawn(config::Storage::Memory { seed: true }).await
    }

    pub async fn empty() -> Self {
        Self::spawn(config::Storage::Memory { seed: false }).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn ping(&self) -> Result<api::Ping, Rejection> {
        read(self.inner.get(self.url(PING))).await
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<api::User, Rejection> {
        read(self.inner.post(self.url(LOGIN)).json(&api::user::Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }))
        .await
    }

    pub async fn get_tickets(
        &self,
        sort: Option<&str>,
    ) -> Result<Vec<api::Ticket>, Rejection> {
        let mut req = self.inner.get(self.url(TICKETS));
        if let Some(sort) = sort {
            req = req.query(&[("sort", sort)]);
        }
        read(req).await
    }

    pub async fn search_tickets(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<api::Ticket>, Rejection> {
        let mut req = self.inner.get(self.url(SEARCH));
        if let Some(query) = query {
            req = req.query(&[("query", query)]);
        }
        read(req).await
    }

    pub async fn get_ticket(
        &self,
        id: &str,
    ) -> Result<api::Ticket, Rejection> {
        read(self.inner.get(self.url(&format!("{TICKETS}/{id}")))).await
    }

    pub async fn add_ticket(
        &self,
        input: &api::ticket::TicketInput,
    ) -> Result<api::Ticket, Rejection> {
        read(self.inner.post(self.url(TICKETS)).json(input)).await
    }

    pub async fn add_raw_ticket(
        &self,
        body: &serde_json::Value,
    ) -> Result<api::Ticket, Rejection> {
        read(self.inner.post(self.url(TICKETS)).json(body)).await
    }

    /// Sends `body` as-is with the given content type, if any.
    pub async fn send_raw(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<(&str, &str)>,
    ) -> Rejection {
        let mut req = self.inner.request(method, self.url(path));
        if let Some((content_type, body)) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(body.to_string());
        }
        let res = req.send().await.expect("failed to send a request");
        Rejection {
            status: res.status(),
            body: res.json().await.unwrap_or(serde_json::Value::Null),
        }
    }
}

async fn read<T: DeserializeOwned>(
    req: reqwest::RequestBuilder,
) -> Result<T, Rejection> {
    let res = req.send().await.expect("failed to send a request");
    let status = res.status();
    if !status.is_success() {
        return Err(Rejection {
            status,
            body: res.json().await.expect("failed to get a response"),
        });
    }
    Ok(res.json::<T>().await.expect("failed to get a response"))
}

pub fn ticket_input() -> api::ticket::TicketInput {
    api::ticket::TicketInput {
        req_date: Some("05/10/2025".to_string()),
        emp_id: Some("F13579".to_string()),
        f_name: Some("Olga".to_string()),
        l_name: Some("Petrova".to_string()),
        prob_desc: Some(
            "Laptop will not boot. Reach me at olga.p@example.com".to_string(),
        ),
        ticket_type: Some("computer".to_string()),
        computer_model: Some("ThinkPad T14".to_string()),
        serial_number: Some("PF-2XK91".to_string()),
        ..Default::default()
    }
}
