//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of routes keyed by request target (path plus query)
//! and records every target it was asked for. Unknown targets get a 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Route {
            status: "200 OK",
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn status(status: &'static str) -> Self {
        Route {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn redirect(location: String) -> Self {
        Route {
            status: "302 Found",
            headers: vec![("Location", location)],
            body: b"moved".to_vec(),
        }
    }
}

/// A bound listener whose base URL is known before routes are added, so page
/// bodies can point at images on the same server.
pub struct PageServer {
    listener: TcpListener,
    base: String,
    routes: HashMap<String, Route>,
    hits: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        PageServer {
            listener,
            base: format!("http://127.0.0.1:{}", port),
            routes: HashMap::new(),
            hits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:12345`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn route(mut self, target: &str, route: Route) -> Self {
        self.routes.insert(target.to_string(), route);
        self
    }

    /// Starts serving in a background thread; returns the shared request log.
    /// The server runs until the process exits.
    pub fn start(self) -> Arc<Mutex<Vec<String>>> {
        let routes = Arc::new(self.routes);
        let hits = Arc::clone(&self.hits);
        let listener = self.listener;
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&hits);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });
        self.hits
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request_target(request).to_string();
    hits.lock().unwrap().push(target.clone());

    let not_found = Route::status("404 Not Found");
    let route = routes.get(&target).unwrap_or(&not_found);
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for (name, value) in &route.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Second token of the request line (`GET /watch?v=abc123 HTTP/1.1`).
fn request_target(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
}
