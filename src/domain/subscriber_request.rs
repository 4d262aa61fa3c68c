//! src/domain/subscriber_request.rs

use crate::domain::{SubscriberEmail, SubscriberName, ValidationError};

/// The payload of one subscription attempt. Built fresh from the form's
/// current field values on every submission, never persisted.
#[derive(Debug)]
pub struct SubscriberRequest {
    pub email: SubscriberEmail,
    pub first_name: SubscriberName,
    /// Page URL at submission time, forwarded for attribution.
    pub referrer: String,
}

impl SubscriberRequest {
    pub fn new(
        email: String,
        first_name: String,
        referrer: String,
    ) -> Result<Self, ValidationError> {
        let email = SubscriberEmail::parse(email)?;
        let first_name = SubscriberName::parse(first_name)?;
        Ok(Self {
            email,
            first_name,
            referrer,
        })
    }
}
