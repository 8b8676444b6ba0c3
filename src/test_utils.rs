use crate::github::{FetchError, HttpResponse, HttpTransport};
use reqwest::Url;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Replays canned responses in order and records requested URLs.
/// Once the queue is empty every request fails with a transport error.
#[derive(Clone, Debug)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(url.to_string());
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .ok_or_else(|| FetchError::Transport("no mock responses left".to_string()))
    }
}

/// Accept one connection on a local port, answer it with the given status and
/// JSON body, and return the request head through the join handle.
pub fn serve_once(status: u16, reason: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).expect("read request");
            if n == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        head
    });

    (format!("http://{}", addr), handle)
}

/// Proxy variables reqwest reads when building a client.
const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Sets an environment variable and clears proxy settings, restoring the
/// previous values on drop. Use only from `#[serial]` tests.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let mut saved = vec![(key.to_string(), std::env::var(key).ok())];
        std::env::set_var(key, value);
        for var in PROXY_VARS {
            saved.push((var.to_string(), std::env::var(var).ok()));
            std::env::remove_var(var);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
