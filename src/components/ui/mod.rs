//! Presentational primitives shared by every page.

mod button;
mod card;
mod icon;
mod section;

pub use button::{button_classes, Button, ButtonProps, ButtonSize, ButtonType, ButtonVariant};
pub use card::{card_classes, Card, CardProps, CardVariant};
pub use icon::{Icon, IconKind, IconProps};
pub use section::{Section, SectionBackground, SectionProps};
