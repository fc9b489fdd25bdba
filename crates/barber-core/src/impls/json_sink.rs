//! JsonLinesSink - 1 イベント 1 行の JSON を書き出す sink

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::domain::ShopEvent;
use crate::ports::EventSink;

pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Give the writer back, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn record(&self, event: ShopEvent) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let written = serde_json::to_writer(&mut *writer, &event)
            .map_err(std::io::Error::from)
            .and_then(|()| writer.write_all(b"\n"));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Actor, BarberId, ClientId, EventKind};
    use chrono::Utc;

    #[test]
    fn writes_one_json_object_per_line() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.record(ShopEvent::new(
            Utc::now(),
            Actor::Customer(ClientId::new(1)),
            EventKind::Arrived,
        ));
        sink.record(ShopEvent::new(
            Utc::now(),
            Actor::Barber(BarberId::new(1)),
            EventKind::TookForService {
                client: ClientId::new(1),
            },
        ));

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ShopEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.kind, EventKind::Arrived);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "took_for_service");
        assert_eq!(second["client"], 1);
    }
}
