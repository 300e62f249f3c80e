pub const DEFAULT_CONNECTOR_ID: &str = "https://accounts.google.com";

/// Keys removed on every invocation so stale signing settings never linger.
/// Order is fixed for deterministic cleanup.
pub const CLEANUP_KEYS: &[&str] = &[
    "user.email",
    "commit.gpgsign",
    "tag.gpgsign",
    "gpg.x509.program",
    "gpg.format",
    "gitsign.connectorID",
    "user.signingkey",
    "gpg.ssh.program",
];

/// The full set of local keys written after cleanup. Everything except the
/// email and connector identity is fixed.
pub fn signing_config(email: &str, connector_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("commit.gpgsign", "true".to_string()),
        ("tag.gpgsign", "true".to_string()),
        ("gpg.x509.program", "gitsign".to_string()),
        ("gpg.format", "x509".to_string()),
        ("gitsign.connectorID", connector_id.to_string()),
        ("user.email", email.to_string()),
    ]
}
