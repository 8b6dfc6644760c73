//! Fixed notification template for shared capsules.

use chrono::DateTime;

use capsule_core::types::Capsule;

/// Subject line of the share notification.
pub const SHARE_SUBJECT: &str = "Une capsule temporelle a été partagée avec vous";

/// Renders the notification body for a shared capsule.
pub fn notification_body(capsule: &Capsule) -> String {
    format!(
        "Bonjour,\n\
         Une capsule temporelle a été partagée avec vous sur Capsule Time.\n\
         Elle sera disponible à partir du {}.\n\
         Connectez-vous à l'application pour la voir.\n\
         Cordialement,\n\
         L'équipe Capsule Time\n",
        opening_date(capsule.date_ouverture)
    )
}

/// Human-readable rendering of the reveal time (epoch milliseconds, UTC).
/// Falls back to the raw value when out of range; notification formatting
/// must never fail a share.
fn opening_date(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(date) => date.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}
