//! Application pages module
//!
//! - Home page (single scrolling marketing page)
//! - Privacy page
//! - Not found page

mod home;
mod not_found;
mod privacy;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
