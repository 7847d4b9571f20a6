use crate::writer::Destination;
use std::sync::{Arc, Mutex};

/// In-memory destination plus the buffer the test inspects.
pub fn capture() -> (Destination, Arc<Mutex<Vec<u8>>>) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    (Destination::shared(Arc::clone(&buf)), buf)
}

pub fn lines(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<String> {
    String::from_utf8_lossy(&buf.lock().unwrap())
        .lines()
        .map(str::to_string)
        .collect()
}
