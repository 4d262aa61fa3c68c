//! tests/api/helpers.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use newsletter_signup::form::{AnalyticsReporter, ErrorTracker, LeadEvent, SubscribeForm};
use newsletter_signup::subscribe_client::SubscribeClient;
use newsletter_signup::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so the two
    // branches cannot be collapsed into one variable.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Analytics fake that records every reported event.
pub struct RecordingAnalytics {
    pub events: Mutex<Vec<(String, LeadEvent)>>,
}

impl AnalyticsReporter for RecordingAnalytics {
    fn lead_generated(&self, name: &str, event: LeadEvent) {
        self.events.lock().unwrap().push((name.to_string(), event));
    }
}

/// Error-tracking fake that records the display form of every tracked error.
pub struct RecordingErrorTracker {
    pub errors: Mutex<Vec<String>>,
}

impl ErrorTracker for RecordingErrorTracker {
    fn track(&self, error: &(dyn std::error::Error + 'static)) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

pub struct TestHarness {
    /// Stand-in for the newsletter subscription endpoint.
    pub newsletter_server: MockServer,
    pub client: SubscribeClient,
    pub analytics: Arc<RecordingAnalytics>,
    pub error_tracker: Arc<RecordingErrorTracker>,
}

impl TestHarness {
    /// A form wired to the recording collaborators, fields already filled in.
    pub fn filled_form(&self) -> SubscribeForm {
        let mut form = SubscribeForm::new("https://example.com/some-post".into())
            .with_analytics(self.analytics.clone())
            .with_error_tracker(self.error_tracker.clone());
        form.enter_email("ursula_le_guin@gmail.com");
        form.enter_first_name("Ursula");
        form
    }

    pub fn recorded_events(&self) -> Vec<(String, LeadEvent)> {
        self.analytics.events.lock().unwrap().clone()
    }

    pub fn tracked_errors(&self) -> Vec<String> {
        self.error_tracker.errors.lock().unwrap().clone()
    }
}

pub async fn spawn_harness() -> TestHarness {
    Lazy::force(&TRACING);

    let newsletter_server = MockServer::start().await;
    let client = SubscribeClient::new(newsletter_server.uri(), Duration::from_millis(500))
        .expect("Failed to build the subscribe client.");

    TestHarness {
        newsletter_server,
        client,
        analytics: Arc::new(RecordingAnalytics {
            events: Mutex::new(vec![]),
        }),
        error_tracker: Arc::new(RecordingErrorTracker {
            errors: Mutex::new(vec![]),
        }),
    }
}
