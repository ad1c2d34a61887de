pub mod features;
pub mod layout;
pub mod motion;
pub mod ui;
