pub mod analytics;
pub mod back_to_top;
pub mod common;
pub mod contact_form;
pub mod faq;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod scroll;
pub mod timer;
pub mod viewport;

pub use analytics::{Analytics, provide_analytics, use_analytics};
pub use back_to_top::BackToTop;
pub use contact_form::ContactSection;
pub use faq::FaqSection;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use viewport::ViewportEffects;
