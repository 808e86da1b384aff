// SPDX-License-Identifier: MPL-2.0
//! Transient session store.
//!
//! Holds the last submitted registration for the receipt screen. Nothing
//! here survives the process; there is deliberately no persistence.

use crate::relay::Registration;

/// Per-session scratch state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    last_registration: Option<Registration>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted registration, replacing any previous one.
    pub fn store_registration(&mut self, registration: Registration) {
        self.last_registration = Some(registration);
    }

    /// The last submitted registration, if any.
    #[must_use]
    pub fn last_registration(&self) -> Option<&Registration> {
        self.last_registration.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(payment_id: &str) -> Registration {
        Registration::new(
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            "9876543210".to_string(),
            "Bidar".to_string(),
            "Architect".to_string(),
            payment_id.to_string(),
            "500".to_string(),
        )
    }

    #[test]
    fn new_store_is_empty() {
        assert!(SessionStore::new().last_registration().is_none());
    }

    #[test]
    fn storing_replaces_the_previous_registration() {
        let mut store = SessionStore::new();
        store.store_registration(registration("pay_1"));
        store.store_registration(registration("pay_2"));
        assert_eq!(
            store.last_registration().map(|r| r.payment_id.as_str()),
            Some("pay_2")
        );
    }
}
