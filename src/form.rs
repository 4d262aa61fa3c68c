//! src/form.rs

use std::sync::Arc;

use crate::domain::SubscriberRequest;
use crate::error::SubscribeError;
use crate::subscribe_client::{SubscribeClient, SubscribeResponse};

/// Shown when the endpoint accepted the subscription.
pub const CONFIRMATION_MESSAGE: &str =
    "Thanks for subscribing! Check your inbox to confirm your email address.";

/// Shown for any failure that did not produce a user-safe message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Event name reported to the analytics collaborator on success.
pub const LEAD_EVENT_NAME: &str = "generate_lead";

/// Fixed value/currency payload attached to the lead event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadEvent {
    pub value: f64,
    pub currency: &'static str,
}

pub const LEAD_EVENT: LeadEvent = LeadEvent {
    value: 1.0,
    currency: "USD",
};

/// Capability to report a conversion event. Best effort: implementations must
/// not fail the submission.
pub trait AnalyticsReporter: Send + Sync {
    fn lead_generated(&self, name: &str, event: LeadEvent);
}

/// Capability to forward an unexpected failure to an error collector.
/// Fire-and-forget: the outcome never feeds back into the form.
pub trait ErrorTracker: Send + Sync {
    fn track(&self, error: &(dyn std::error::Error + 'static));
}

/// Single source of truth for what the form currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Inactive,
    Loading,
    Success { message: String },
    Error { message: String },
}

impl SubscriptionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The subscribe form state machine.
///
/// States: {Inactive, Loading, Success, Error}. Valid transitions:
/// Inactive→Loading (submit), Loading→Success, Loading→Error,
/// Success→Inactive (dismiss), Error→Inactive (dismiss). Nothing else.
///
/// Each instance owns its status and field values exclusively; at most one
/// request is outstanding at a time because submissions are rejected while
/// the status is `Loading`. An in-flight request is not aborted when the form
/// is dropped.
pub struct SubscribeForm {
    email: String,
    first_name: String,
    referrer: String,
    status: SubscriptionStatus,
    analytics: Option<Arc<dyn AnalyticsReporter>>,
    error_tracker: Option<Arc<dyn ErrorTracker>>,
}

impl SubscribeForm {
    pub fn new(referrer: String) -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            referrer,
            status: SubscriptionStatus::Inactive,
            analytics: None,
            error_tracker: None,
        }
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsReporter>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_error_tracker(mut self, error_tracker: Arc<dyn ErrorTracker>) -> Self {
        self.error_tracker = Some(error_tracker);
        self
    }

    pub fn enter_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn enter_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn status(&self) -> &SubscriptionStatus {
        &self.status
    }

    /// Synchronous head of a submission.
    ///
    /// Returns `None` without side effects while a request is in flight, so
    /// rapid repeated triggers collapse into a single network call. Otherwise
    /// the status moves to `Loading` before any I/O happens and the request
    /// payload is built from the current field values. A field that fails
    /// domain validation short-circuits to `Error` with the user-safe
    /// validation message.
    pub fn begin_submission(&mut self) -> Option<SubscriberRequest> {
        if self.status.is_loading() {
            tracing::info!("A submission is already in flight, ignoring.");
            return None;
        }
        self.status = SubscriptionStatus::Loading;
        match SubscriberRequest::new(
            self.email.clone(),
            self.first_name.clone(),
            self.referrer.clone(),
        ) {
            Ok(request) => Some(request),
            Err(e) => {
                self.status = SubscriptionStatus::Error {
                    message: e.to_string(),
                };
                None
            }
        }
    }

    /// Tail of a submission: translate the call outcome into the next status.
    ///
    /// Neither error kind escapes to the caller; both are absorbed into the
    /// `Error` status here.
    pub fn finish_submission(&mut self, outcome: Result<SubscribeResponse, SubscribeError>) {
        match outcome {
            Ok(_) => {
                self.status = SubscriptionStatus::Success {
                    message: CONFIRMATION_MESSAGE.into(),
                };
                self.email.clear();
                self.first_name.clear();
                if let Some(analytics) = &self.analytics {
                    analytics.lead_generated(LEAD_EVENT_NAME, LEAD_EVENT);
                }
            }
            Err(SubscribeError::Validation { message }) => {
                self.status = SubscriptionStatus::Error { message };
            }
            Err(error) => {
                if let Some(error_tracker) = &self.error_tracker {
                    error_tracker.track(&error);
                }
                self.status = SubscriptionStatus::Error {
                    message: FALLBACK_ERROR_MESSAGE.into(),
                };
            }
        }
    }

    /// Submit the current field values: one network call at most.
    #[tracing::instrument(
        name = "Submitting the subscribe form.",
        skip(self, client),
        fields(subscriber_email = %self.email)
    )]
    pub async fn submit(&mut self, client: &SubscribeClient) {
        let Some(request) = self.begin_submission() else {
            return;
        };
        let outcome = client.subscribe(&request).await;
        self.finish_submission(outcome);
    }

    /// Dismiss the success/error banner. A no-op in any other state, since no
    /// banner is shown then.
    pub fn dismiss(&mut self) {
        if matches!(
            self.status,
            SubscriptionStatus::Success { .. } | SubscriptionStatus::Error { .. }
        ) {
            self.status = SubscriptionStatus::Inactive;
        }
    }
}

/// Analytics reporter that logs the event through `tracing`.
pub struct TracingAnalytics;

impl AnalyticsReporter for TracingAnalytics {
    fn lead_generated(&self, name: &str, event: LeadEvent) {
        tracing::info!(
            event = name,
            value = event.value,
            currency = event.currency,
            "Analytics event emitted."
        );
    }
}

/// Error tracker that logs the failure chain through `tracing`.
pub struct TracingErrorTracker;

impl ErrorTracker for TracingErrorTracker {
    fn track(&self, error: &(dyn std::error::Error + 'static)) {
        tracing::error!(error.message = %error, "Reported an unexpected subscription failure.");
    }
}
