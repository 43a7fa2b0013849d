use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;

use crate::sync::{ConnectionRegistry, outbound_queue, protocol};

/// WebSocket upgrade handler for presenter sync.
///
/// The connection joins the registry once the handshake succeeds and leaves
/// it when the socket closes, errors, the server can no longer write to it,
/// or its outbound queue fills up.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    registry: web::Data<ConnectionRegistry>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (tx, mut rx) = outbound_queue();
    let id = registry.add(tx);
    log::info!("Connection {id} opened ({} connected)", registry.len());

    let registry = registry.into_inner();

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                msg = rx.recv() => {
                    // `None` means the registry dropped this connection.
                    let Some(msg) = msg else { break };
                    if ws_session.text(msg).await.is_err() {
                        break;
                    }
                }
                msg = msg_stream.recv() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            protocol::dispatch(&registry, id, &text);
                        }
                        Some(Ok(Message::Ping(bytes))) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                        Some(Ok(_)) => {}
                    }
                }
            }
        }

        registry.remove(id);
        let _ = ws_session.close(None).await;
        log::info!("Connection {id} closed ({} connected)", registry.len());
    });

    Ok(response)
}
