use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use runtime::{Session, TracingLogWriter};

use crate::state::{AppState, ClientCommand, ServerMessage};

/// Each socket is one page view: the session mounts on upgrade and unmounts
/// when the socket goes away.
pub async fn session_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| serve_session(socket, state))
}

async fn serve_session(mut socket: WebSocket, state: AppState) {
    let session_id = match state.start_session() {
        Ok(session_id) => session_id,
        Err(err) => {
            tracing::error!(?err, "could not allocate a session id");
            return;
        }
    };

    let session = match Session::mount(session_id, state.sim_config(), Box::new(TracingLogWriter)) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(session_id, %err, "could not mount session");
            let _ = send_message(&mut socket, &ServerMessage::rejected(err.to_string())).await;
            return;
        }
    };

    if send_message(&mut socket, &ServerMessage::Connected { session_id })
        .await
        .is_ok()
    {
        stream_session(&mut socket, &session).await;
    }

    if let Err(err) = session.unmount().await {
        tracing::warn!(session_id, %err, "session teardown failed");
    }
}

async fn stream_session(socket: &mut WebSocket, session: &Session) {
    let mut snapshots = session.subscribe();
    let initial = ServerMessage::Snapshot(snapshots.borrow_and_update().clone());
    if send_message(socket, &initial).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(rejection) = apply_command(session, &text).await {
                            if send_message(socket, &rejection).await.is_err() {
                                return;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => return,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => return,
                }
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    return;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if send_message(socket, &ServerMessage::Snapshot(snapshot)).await.is_err() {
                    return;
                }
            }
        }
    }
}

/// Returns a rejection to send back, or `None` once the command is applied.
async fn apply_command(session: &Session, text: &str) -> Option<ServerMessage> {
    let command = match serde_json::from_str::<ClientCommand>(text) {
        Ok(command) => command,
        Err(err) => return Some(ServerMessage::rejected(format!("malformed command: {err}"))),
    };

    let applied = match command {
        ClientCommand::Select { panel } => session.select_key(&panel).await,
        ClientCommand::Close => session.clear().await,
    };

    match applied {
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(session_id = session.id(), %err, "command rejected");
            Some(ServerMessage::rejected(err.to_string()))
        }
    }
}

async fn send_message(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), ()> {
    let payload = serde_json::to_string(message).map_err(|_| ())?;
    socket.send(Message::Text(payload)).await.map_err(|_| ())
}
