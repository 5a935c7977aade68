use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose wiring logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Shown in the error notification when the contact form cannot be delivered.
pub const FALLBACK_EMAIL: &str = "tangent.analytics.ca@gmail.com";

/// Company name used in the prefilled inquiry subject.
pub const COMPANY_NAME: &str = "Tangent Analytics";

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_DURATION_MS: u32 = 5_000;
