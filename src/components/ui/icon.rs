use yew::prelude::*;

/// Every glyph the site draws. Outline style, 24×24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Strategy,
    Brain,
    Zap,
    Settings,
    Target,
    Trending,
    Lightbulb,
    Users,
    Check,
    CheckCircle,
    ArrowRight,
    Mail,
    Phone,
    MapPin,
    Send,
    Menu,
    Close,
    GitPullRequest,
    Package,
    Refresh,
}

impl IconKind {
    /// Icon names used by feature content. Unknown names get the strategy
    /// chart.
    pub fn from_key(key: &str) -> Self {
        match key {
            "strategy" => IconKind::Strategy,
            "brain" => IconKind::Brain,
            "zap" => IconKind::Zap,
            "settings" => IconKind::Settings,
            "target" => IconKind::Target,
            "trending" => IconKind::Trending,
            "lightbulb" => IconKind::Lightbulb,
            "users" => IconKind::Users,
            _ => IconKind::Strategy,
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Strategy => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            IconKind::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
            ],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconKind::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            IconKind::Target => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M18 12a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
                "M14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            IconKind::Trending => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            IconKind::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::Check => &["M20 6 9 17l-5-5"],
            IconKind::CheckCircle => &["M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z", "m9 12 2 2 4-4"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            IconKind::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::GitPullRequest => &[
                "M21 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
                "M9 6a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
                "M13 6h3a2 2 0 0 1 2 2v7",
                "M6 9v12",
            ],
            IconKind::Package => &[
                "m7.5 4.27 9 5.15",
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            IconKind::Refresh => &[
                "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
                "M21 3v5h-5",
                "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
                "M8 16H3v5",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("2"))]
    pub stroke_width: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.clone()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_their_glyph() {
        assert_eq!(IconKind::from_key("brain"), IconKind::Brain);
        assert_eq!(IconKind::from_key("users"), IconKind::Users);
        assert_eq!(IconKind::from_key("trending"), IconKind::Trending);
    }

    #[test]
    fn unknown_keys_fall_back_to_strategy() {
        assert_eq!(IconKind::from_key("rocket"), IconKind::Strategy);
        assert_eq!(IconKind::from_key(""), IconKind::Strategy);
        assert_eq!(IconKind::from_key("Brain"), IconKind::Strategy);
    }

    #[test]
    fn every_glyph_has_geometry() {
        for kind in [IconKind::Strategy, IconKind::Send, IconKind::Package, IconKind::Refresh] {
            assert!(!kind.paths().is_empty());
        }
    }
}
