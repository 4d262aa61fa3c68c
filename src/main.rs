//! main.rs

use std::sync::Arc;

use anyhow::Context;
use newsletter_signup::configuration::get_configuration;
use newsletter_signup::form::{
    SubscribeForm, SubscriptionStatus, TracingAnalytics, TracingErrorTracker,
};
use newsletter_signup::subscribe_client::SubscribeClient;
use newsletter_signup::telemetry::{get_subscriber, init_subscriber};

const USAGE: &str = "Usage: newsletter-signup <email> <first-name> [referrer]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("newsletter-signup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration.");

    let mut args = std::env::args().skip(1);
    let email = args.next().context(USAGE)?;
    let first_name = args.next().context(USAGE)?;
    let referrer = args.next().unwrap_or_default();

    let client = SubscribeClient::new(
        configuration.newsletter.base_url.clone(),
        configuration.newsletter.timeout(),
    )?;
    let mut form = SubscribeForm::new(referrer)
        .with_analytics(Arc::new(TracingAnalytics))
        .with_error_tracker(Arc::new(TracingErrorTracker));
    form.enter_email(email);
    form.enter_first_name(first_name);

    form.submit(&client).await;

    match form.status() {
        SubscriptionStatus::Success { message } => {
            tracing::info!("{message}");
            Ok(())
        }
        SubscriptionStatus::Error { message } => Err(anyhow::anyhow!("{message}")),
        // `submit` always resolves to a terminal status
        SubscriptionStatus::Inactive | SubscriptionStatus::Loading => Ok(()),
    }
}
