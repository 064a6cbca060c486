//! Start/stop behaviour of the real listener.

use std::sync::Arc;
use std::time::SystemTime;

use classic_web_stats::storage::memory::{MemoryLevel, MemoryServer};
use classic_web_stats::{Config, ListenerError, StatsServer, WebStatsPlugin};

fn config(port: u16) -> Config {
    Config {
        bind_host: "127.0.0.1".to_string(),
        port,
        ..Config::default()
    }
}

fn game() -> Arc<MemoryServer> {
    let server = MemoryServer::new("MCGalaxy 1.9.5.0", SystemTime::now(), MemoryLevel::flat("main", 16, 8, 16));
    server.add_level(MemoryLevel::flat("testmap", 64, 32, 64));
    Arc::new(server)
}

#[test]
fn start_twice_keeps_one_socket() {
    let mut server = StatsServer::new(config(0), game());
    server.start().unwrap();
    let addr = server.local_addr().unwrap();

    server.start().unwrap();
    assert_eq!(server.local_addr(), Some(addr));

    let resp = reqwest::blocking::get(format!("http://{}/level/testmap/bounds", addr)).unwrap();
    assert_eq!(resp.status(), 200);
    let header = resp.headers().get("server").unwrap().to_str().unwrap().to_string();
    assert_eq!(
        header,
        format!("Classic Web Stats {} on MCGalaxy 1.9.5.0;", env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(resp.text().unwrap(), r#"{"Width":64,"Length":64,"Height":32}"#);

    server.stop().unwrap();
}

#[test]
fn stop_releases_socket_and_repeats_quietly() {
    let mut server = StatsServer::new(config(0), game());
    server.stop().unwrap();

    server.start().unwrap();
    let addr = server.local_addr().unwrap();
    assert!(server.is_running());

    server.stop().unwrap();
    server.stop().unwrap();
    assert!(!server.is_running());
    assert_eq!(server.local_addr(), None);

    assert!(reqwest::blocking::get(format!("http://{}/", addr)).is_err());

    // and the handle can be started again
    server.start().unwrap();
    let resp = reqwest::blocking::get(format!("http://{}/", server.local_addr().unwrap())).unwrap();
    assert!(resp.status().is_success());
    server.stop().unwrap();
}

#[test]
fn busy_port_fails_to_bind() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let mut server = StatsServer::new(config(port), game());
    assert!(matches!(server.start(), Err(ListenerError::Bind(_))));
    assert!(!server.is_running());
}

#[tokio::test(flavor = "multi_thread")]
async fn starts_from_a_multi_thread_runtime() {
    let mut server = StatsServer::new(config(0), game());
    server.start().unwrap();
    let addr = server.local_addr().unwrap();

    let body = reqwest::get(format!("http://{}/level/main/bounds", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, r#"{"Width":16,"Length":16,"Height":8}"#);

    server.stop().unwrap();
    assert!(!server.is_running());
}

#[actix_web::test]
async fn starts_from_an_actix_system() {
    let mut server = StatsServer::new(config(0), game());
    server.start().unwrap();
    let addr = server.local_addr().unwrap();

    let resp = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert!(resp.status().is_success());

    server.stop().unwrap();
}

#[test]
fn dropping_a_running_server_releases_the_socket() {
    let mut server = StatsServer::new(config(0), game());
    server.start().unwrap();
    let addr = server.local_addr().unwrap();
    drop(server);

    // the listener thread shuts down on its own once the handle is gone
    let mut released = false;
    for _ in 0..50 {
        if std::net::TcpListener::bind(addr).is_ok() {
            released = true;
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    assert!(released);
}

#[test]
fn plugin_load_and_unload() {
    let mut plugin = WebStatsPlugin::new(config(0), game());
    assert_eq!(plugin.name(), "Classic Web Stats");

    plugin.load(true).unwrap();
    plugin.load(false).unwrap();
    assert!(plugin.server().is_running());

    plugin.unload(false).unwrap();
    plugin.unload(true).unwrap();
    assert!(!plugin.server().is_running());
}
