use log::Level;

/// Third-party estimate form behind every "Schedule Estimate" button.
pub const BOOKING_URL: &str = "https://form.jotform.com/253238851265057";

pub const BUSINESS_NAME: &str = "TruCo Painting";
pub const TAGLINE: &str = "Quality You Can Trust";
pub const LOGO_SRC: &str = "/truco-logo.svg";

pub const PHONE: &str = "(417) 818-3616";
pub const EMAIL: &str = "info@trucopaint.com";
pub const SERVICE_AREA: &str = "Springfield & surrounding";

pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61581862051113";

/// Vertical offset (px) past which the nav switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Testimonials shown per carousel page.
pub const TESTIMONIALS_PER_PAGE: usize = 3;

/// Seconds between the entry animations of consecutive list items.
pub const STAGGER_SECONDS: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
