//! Tracing event capture for unit tests

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// An event seen by the [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub target: String,
    pub level: Level,
    pub message: String,
}

/// Layer storing every event it sees
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S> Layer<S> for Recorder
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        self.events.lock().unwrap().push(Captured {
            target: meta.target().to_string(),
            level: *meta.level(),
            message: visitor.0,
        });
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Run `f` with a recording subscriber as the thread default and return
/// its result along with every event emitted meanwhile
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);

    let events = recorder.events.lock().unwrap().clone();
    (result, events)
}

/// Events of `events` emitted under `target`
pub fn from_target<'a>(events: &'a [Captured], target: &str) -> Vec<&'a Captured> {
    events.iter().filter(|e| e.target == target).collect()
}
