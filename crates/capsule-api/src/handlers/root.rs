//! Root welcome handler.

/// GET /
pub async fn welcome() -> &'static str {
    "Bienvenue sur l'API CapsuleTime!"
}
