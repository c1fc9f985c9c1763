pub mod routes;
pub mod state;
pub mod ws;

use axum::Router;
use status_sim::SimConfig;

pub fn app(sim_config: SimConfig) -> Router {
    routes::router(state::AppState::new(sim_config))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use futures_util::{SinkExt, StreamExt};
    use serde_json::Value;
    use status_sim::SimConfig;
    use tokio::net::{TcpListener, TcpStream};
    use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
    use tower::ServiceExt;

    use crate::app;

    type ClientSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

    fn test_app() -> Router {
        app(SimConfig::default().with_seed(21))
    }

    async fn get(path: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let (status, body) = get(path).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn index_serves_dashboard_page() {
        let (status, body) = get("/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("FlashBTC"));
        assert!(html.contains("/static/app.js"));
    }

    #[tokio::test]
    async fn static_assets_have_content_types() {
        let response = test_app()
            .oneshot(Request::get("/static/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn panel_list_follows_button_order() {
        let (status, json) = get_json("/api/panels").await;

        assert_eq!(status, StatusCode::OK);
        let panels = json.as_array().unwrap();
        assert_eq!(panels.len(), 8);
        assert_eq!(panels[0]["id"], "architecture");
        assert_eq!(panels[7]["title"], "8. Integration Methods");
    }

    #[tokio::test]
    async fn panel_detail_returns_catalog_entry() {
        let (status, json) = get_json("/api/panels/risk").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "3. Risk Management");
        assert!(json["body"].as_str().unwrap().contains("Slippage Protection"));
    }

    #[tokio::test]
    async fn unknown_panel_is_not_found() {
        let (status, json) = get_json("/api/panels/roadmap").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "unknown panel: roadmap");
    }

    async fn connect() -> ClientSocket {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, test_app()).await.unwrap();
        });

        let (socket, _) = connect_async(format!("ws://{addr}/ws/session"))
            .await
            .unwrap();
        socket
    }

    async fn next_json(socket: &mut ClientSocket) -> Value {
        loop {
            let message = tokio::time::timeout(Duration::from_secs(5), socket.next())
                .await
                .expect("timed out waiting for a message")
                .expect("socket closed")
                .expect("socket error");
            if let Message::Text(text) = message {
                return serde_json::from_str(&text).unwrap();
            }
        }
    }

    async fn next_matching(socket: &mut ClientSocket, accept: impl Fn(&Value) -> bool) -> Value {
        loop {
            let json = next_json(socket).await;
            if accept(&json) {
                return json;
            }
        }
    }

    async fn send_command(socket: &mut ClientSocket, command: &str) {
        socket.send(Message::Text(command.to_owned())).await.unwrap();
    }

    #[tokio::test]
    async fn session_socket_connects_and_streams_initial_snapshot() {
        let mut socket = connect().await;

        let connected = next_json(&mut socket).await;
        assert_eq!(connected["event_type"], "connected");
        assert_eq!(connected["session_id"], 1);

        let snapshot = next_json(&mut socket).await;
        assert_eq!(snapshot["event_type"], "snapshot");
        assert_eq!(snapshot["is_open"], false);
        assert!(snapshot["panel"].is_null());
        assert_eq!(snapshot["metrics"]["total_value_locked"], "$1.25M");
    }

    #[tokio::test]
    async fn session_socket_selects_replaces_and_closes_panels() {
        let mut socket = connect().await;
        next_json(&mut socket).await;

        send_command(&mut socket, r#"{"command":"select","panel":"risk"}"#).await;
        let opened = next_matching(&mut socket, |json| json["panel"]["id"] == "risk").await;
        assert_eq!(opened["is_open"], true);

        send_command(&mut socket, r#"{"command":"select","panel":"token"}"#).await;
        let replaced = next_matching(&mut socket, |json| json["panel"]["id"] == "token").await;
        assert_eq!(replaced["panel"]["title"], "4. Token Utility");

        send_command(&mut socket, r#"{"command":"close"}"#).await;
        let closed = next_matching(&mut socket, |json| json["is_open"] == false).await;
        assert!(closed["panel"].is_null());
    }

    #[tokio::test]
    async fn session_socket_rejects_unknown_panels_and_garbage() {
        let mut socket = connect().await;
        next_json(&mut socket).await;

        send_command(&mut socket, r#"{"command":"select","panel":"roadmap"}"#).await;
        let rejected =
            next_matching(&mut socket, |json| json["event_type"] == "rejected").await;
        assert_eq!(rejected["reason"], "unknown panel: roadmap");

        send_command(&mut socket, "not json").await;
        let rejected =
            next_matching(&mut socket, |json| json["event_type"] == "rejected").await;
        assert!(rejected["reason"]
            .as_str()
            .unwrap()
            .starts_with("malformed command"));
    }
}
