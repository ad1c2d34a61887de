//! Motion presets shared by every animated section.
//!
//! A preset describes where an element starts, where it ends and how it gets
//! there. [`Reveal`](crate::components::motion::Reveal) renders the two
//! states as inline styles and lets a CSS transition interpolate between
//! them. Only `opacity` and `transform` are animated.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseIn,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

/// One visual state of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn delayed(self, extra: f32) -> Self {
        Self {
            delay: self.delay + extra,
            ..self
        }
    }

    pub fn css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = self.duration,
            e = easing,
            w = self.delay
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub initial: Pose,
    pub animate: Pose,
    pub transition: Transition,
}

impl Preset {
    /// Inline style for the element before (`shown == false`) or after its
    /// entrance, with `delay` seconds added to the preset's own delay.
    pub fn style(&self, shown: bool, delay: f32) -> String {
        let pose = if shown { self.animate } else { self.initial };
        let mut style = pose.css();
        style.push(' ');
        style.push_str(&self.transition.delayed(delay).css());
        style
    }
}

/// Children timing inside a staggered container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub each: f32,
    pub delay: f32,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay + self.each * index as f32
    }
}

/// When an in-view animation fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub once: bool,
    /// Fraction of the element that has to be visible.
    pub amount: f64,
}

const EASE_OUT_06: Transition = Transition {
    duration: 0.6,
    delay: 0.0,
    easing: Easing::EaseOut,
};

pub const FADE_IN: Preset = Preset {
    initial: Pose { opacity: 0.0, x: 0.0, y: 20.0, scale: 1.0 },
    animate: Pose::REST,
    transition: EASE_OUT_06,
};

pub const SLIDE_IN_LEFT: Preset = Preset {
    initial: Pose { opacity: 0.0, x: -50.0, y: 0.0, scale: 1.0 },
    animate: Pose::REST,
    transition: EASE_OUT_06,
};

pub const SLIDE_IN_RIGHT: Preset = Preset {
    initial: Pose { opacity: 0.0, x: 50.0, y: 0.0, scale: 1.0 },
    animate: Pose::REST,
    transition: EASE_OUT_06,
};

pub const SCALE_IN: Preset = Preset {
    initial: Pose { opacity: 0.0, x: 0.0, y: 0.0, scale: 0.95 },
    animate: Pose::REST,
    transition: Transition {
        duration: 0.5,
        delay: 0.0,
        easing: Easing::EaseOut,
    },
};

pub const STAGGER_ITEM: Preset = Preset {
    initial: Pose { opacity: 0.0, x: 0.0, y: 20.0, scale: 1.0 },
    animate: Pose::REST,
    transition: Transition {
        duration: 0.5,
        delay: 0.0,
        easing: Easing::EaseOut,
    },
};

pub const HERO_TEXT: Preset = Preset {
    initial: Pose { opacity: 0.0, x: 0.0, y: 30.0, scale: 1.0 },
    animate: Pose::REST,
    transition: Transition {
        duration: 0.8,
        delay: 0.0,
        easing: Easing::CubicBezier(0.25, 0.46, 0.45, 0.94),
    },
};

pub const PAGE_TRANSITION: Preset = Preset {
    initial: Pose::hidden(),
    animate: Pose::REST,
    transition: Transition {
        duration: 0.4,
        delay: 0.0,
        easing: Easing::EaseOut,
    },
};

pub const STAGGER: Stagger = Stagger {
    each: 0.1,
    delay: 0.1,
};

pub const VIEWPORT: Viewport = Viewport {
    once: true,
    amount: 0.3,
};

/// Hover lift used by cards and pressable elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub lift: f32,
    pub scale: f32,
    pub press_scale: f32,
    pub shadow: &'static str,
    pub transition: Transition,
}

pub const CARD_HOVER: Hover = Hover {
    lift: -8.0,
    scale: 1.0,
    press_scale: 1.0,
    shadow: "0 20px 25px -5px rgb(0 0 0 / 0.1)",
    transition: Transition {
        duration: 0.3,
        delay: 0.0,
        easing: Easing::EaseOut,
    },
};

pub const SCALE_ON_HOVER: Hover = Hover {
    lift: 0.0,
    scale: 1.05,
    press_scale: 0.98,
    shadow: "none",
    transition: Transition {
        duration: 0.3,
        delay: 0.0,
        easing: Easing::EaseInOut,
    },
};

impl Hover {
    /// CSS rules applying this hover to `selector`.
    pub fn rules(&self, selector: &str) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "{selector} {{ transition: transform {d}s {e}, box-shadow {d}s {e}; }}\n",
            d = self.transition.duration,
            e = self.transition.easing.css()
        );
        let _ = write!(
            css,
            "{selector}:hover {{ transform: translateY({}px) scale({});",
            self.lift, self.scale
        );
        if self.shadow != "none" {
            let _ = write!(css, " box-shadow: {};", self.shadow);
        }
        css.push_str(" }\n");
        if (self.press_scale - 1.0).abs() > f32::EPSILON {
            let _ = write!(
                css,
                "{selector}:active {{ transform: scale({}); }}\n",
                self.press_scale
            );
        }
        css
    }
}

/// Hover rules for the shared primitives, injected once by the layout.
pub fn hover_stylesheet() -> String {
    let mut css = CARD_HOVER.rules(".card--hover");
    css.push_str(&SCALE_ON_HOVER.rules(".pressable"));
    css
}
