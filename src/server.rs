// src/server.rs
//! Listener lifecycle for the stats endpoint.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::rt::System;
use actix_web::{middleware, web, App, HttpServer};
use log::{debug, info};
use std::io;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc};
use std::thread;
use tokio::sync::oneshot;

use crate::config::Config;
use crate::error::ListenerError;
use crate::game::GameServer;
use crate::handlers::{self, AppState};

/// `Server` header value. Characters a header cannot carry are dropped.
pub fn server_header(plugin_name: &str, plugin_version: &str, software: &str) -> String {
    format!("{} {} on {};", plugin_name, plugin_version, software)
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// The stats application: every request goes through [`handlers::dispatch`].
pub fn app(
    state: web::Data<AppState>,
    server_header: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(middleware::DefaultHeaders::new().add(("Server", server_header)))
        .wrap(middleware::Logger::default())
        .default_service(web::to(handlers::dispatch))
}

struct Running {
    addrs: Vec<SocketAddr>,
    // Dropping the sender also stops the server.
    shutdown: oneshot::Sender<()>,
    thread: thread::JoinHandle<io::Result<()>>,
}

/// Handle owned by the hosting integration. Built once, started on load and
/// stopped on unload; both are no-ops when repeated.
///
/// The server runs on its own thread with its own actix system, so the host
/// may call `start` and `stop` from any thread, inside a runtime or not.
pub struct StatsServer {
    config: Config,
    game: Arc<dyn GameServer>,
    running: Option<Running>,
}

impl StatsServer {
    pub fn new(config: Config, game: Arc<dyn GameServer>) -> Self {
        Self {
            config,
            game,
            running: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// First bound address, while running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().and_then(|r| r.addrs.first().copied())
    }

    /// Binds the socket and serves on a dedicated listener thread. Returns
    /// once the socket is bound or binding failed.
    pub fn start(&mut self) -> Result<(), ListenerError> {
        if let Some(running) = &self.running {
            debug!("Stats listener already running on {:?}", running.addrs);
            return Ok(());
        }

        let header = server_header(
            &self.config.plugin_name,
            &self.config.plugin_version,
            &self.game.software_version(),
        );
        let state = web::Data::new(AppState::new(self.game.clone()));
        let config = self.config.clone();

        let (ready_tx, ready_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = thread::Builder::new()
            .name("stats-listener".to_string())
            .spawn(move || {
                System::new().block_on(async move {
                    let server = HttpServer::new(move || app(state.clone(), header.clone()))
                        .workers(config.workers)
                        .shutdown_timeout(config.shutdown_timeout_secs)
                        .disable_signals()
                        .bind(config.bind_address());
                    let server = match server {
                        Ok(server) => server,
                        Err(e) => {
                            let _ = ready_tx.send(Err(e));
                            return Ok(());
                        }
                    };
                    let _ = ready_tx.send(Ok(server.addrs()));

                    let server = server.run();
                    let handle = server.handle();
                    actix_web::rt::spawn(async move {
                        let _ = shutdown_rx.await;
                        handle.stop(true).await;
                    });
                    server.await
                })
            })
            .map_err(ListenerError::Spawn)?;

        let addrs = match ready_rx.recv() {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => {
                let _ = thread.join();
                return Err(ListenerError::Bind(e));
            }
            Err(_) => {
                let _ = thread.join();
                return Err(ListenerError::Stopped(
                    "listener thread exited before binding".to_string(),
                ));
            }
        };

        for addr in &addrs {
            info!("Listening on http://{}/", addr);
        }
        self.running = Some(Running {
            addrs,
            shutdown: shutdown_tx,
            thread,
        });
        Ok(())
    }

    /// Stops accepting, lets in-flight responses finish and releases the
    /// socket. Blocks until the listener thread has exited.
    pub fn stop(&mut self) -> Result<(), ListenerError> {
        let running = match self.running.take() {
            Some(running) => running,
            None => {
                debug!("Stats listener not running");
                return Ok(());
            }
        };

        let _ = running.shutdown.send(());
        match running.thread.join() {
            Ok(Ok(())) => {
                info!("Stopped listening on {:?}", running.addrs);
                Ok(())
            }
            Ok(Err(e)) => Err(ListenerError::Stopped(e.to_string())),
            Err(_) => Err(ListenerError::Stopped(
                "listener thread panicked".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_plugin_and_host() {
        assert_eq!(
            server_header("Classic Web Stats", "0.1.0", "MCGalaxy 1.9.5.0"),
            "Classic Web Stats 0.1.0 on MCGalaxy 1.9.5.0;"
        );
    }

    #[test]
    fn header_drops_unsendable_characters() {
        assert_eq!(server_header("Stats\n", "1", "Hôst"), "Stats 1 on Hst;");
    }
}
