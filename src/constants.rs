//! Application constants and static profile data

pub const APP_NAME: &str = "MyCard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed display data shown on the card. Edit these to make the card yours.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ana Chapa",
    title: "Software Engineer",
    phone: "+1 (555) 010-3344",
    github: "github.com/anachapa",
    linkedin: "linkedin.com/in/anachapa",
};
