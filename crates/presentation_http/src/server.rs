//! Serving with a bounded graceful shutdown

use std::{future::Future, future::IntoFuture, io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain for at most `grace`
///
/// Connections still open when the grace period ends are dropped.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let fired = Arc::new(Notify::new());
    let notify = Arc::clone(&fired);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            notify.notify_one();
        })
        .into_future();
    tokio::pin!(server);

    let finished = tokio::select! {
        result = &mut server => Some(result),
        () = fired.notified() => None,
    };
    if let Some(result) = finished {
        return result;
    }

    info!("Waiting up to {:?} for connections to close...", grace);
    if let Ok(result) = tokio::time::timeout(grace, server).await {
        result
    } else {
        warn!(
            grace_secs = grace.as_secs_f32(),
            "Shutdown grace period elapsed, dropping open connections"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use tokio::{io::AsyncWriteExt, net::TcpStream, sync::oneshot};

    use super::*;

    #[tokio::test]
    async fn hung_connection_does_not_block_shutdown() {
        let entered = Arc::new(Notify::new());
        let app = Router::new().route(
            "/hang",
            get({
                let entered = Arc::clone(&entered);
                move || async move {
                    entered.notify_one();
                    std::future::pending::<&'static str>().await
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = stopped.await;
            },
            Duration::from_millis(100),
        ));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /hang HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        entered.notified().await;

        stop.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop once the grace period ends");
        assert!(result.unwrap().is_ok());
    }

    #[tokio::test]
    async fn idle_server_stops_on_signal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = tokio::spawn(serve(
            listener,
            Router::new(),
            async {},
            Duration::from_secs(30),
        ));

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap();
        assert!(result.unwrap().is_ok());
    }
}
