//! Shared test utilities used across ravelin crates.

pub mod tracing {
    //! Recording layer for capturing spans and events in tests.
    //!
    //! The pipeline replaces print-style tracing with structured `tracing`
    //! diagnostics; installing this layer lets tests assert on the emitted
    //! spans and events instead of scraping text output.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;

    /// A span observed by the [`RecordingLayer`], with the fields recorded
    /// at creation.
    #[derive(Clone, Debug)]
    pub struct SpanRecord {
        /// Name declared at the instrumentation site.
        pub name: String,
        /// Field values rendered to strings.
        pub fields: HashMap<String, String>,
    }

    /// An event observed by the [`RecordingLayer`].
    #[derive(Clone, Debug)]
    pub struct EventRecord {
        /// Severity of the event.
        pub level: Level,
        /// Field values rendered to strings; the message lives under
        /// `"message"`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the event's message, when one was recorded.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    /// Layer installed during tests to capture spans and events for later
    /// assertions.
    ///
    /// # Examples
    /// ```
    /// use ravelin_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(answer = 42, "computed");
    /// });
    /// assert!(layer.has_event(tracing::Level::INFO, "computed"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns a snapshot of the spans recorded so far, in creation
        /// order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans.lock().expect("lock poisoned").clone()
        }

        /// Returns a snapshot of the events recorded so far, in emission
        /// order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events.lock().expect("lock poisoned").clone()
        }

        /// Returns whether an event with the given level and message was
        /// recorded.
        #[must_use]
        pub fn has_event(&self, level: Level, message: &str) -> bool {
            self.events()
                .iter()
                .any(|event| event.level == level && event.message() == Some(message))
        }
    }

    impl<S: Subscriber> Layer<S> for RecordingLayer {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            self.spans.lock().expect("lock poisoned").push(SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.events.lock().expect("lock poisoned").push(EventRecord {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }

}
