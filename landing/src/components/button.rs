//! Button primitive: a closed variant × size table mapped to fixed classes.
//!
//! Hover (scale 1.05) and press (scale 0.95) live in the stylesheet on `.btn`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Resolved presentation for one variant/size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant_class: &'static str,
    pub size_class: &'static str,
}

impl ButtonStyle {
    pub const BASE: &'static str = "btn";

    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let variant_class = match variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        };
        let size_class = match size {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        };
        Self {
            variant_class,
            size_class,
        }
    }

    pub fn class(&self) -> String {
        format!("{} {} {}", Self::BASE, self.variant_class, self.size_class)
    }

    /// `class()` plus caller overrides, e.g. the light-on-dark hero buttons.
    pub fn class_with(&self, extra: Option<&str>) -> String {
        match extra {
            Some(extra) if !extra.is_empty() => format!("{} {}", self.class(), extra),
            _ => self.class(),
        }
    }
}

/// Inert call-to-action button.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] extra_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = ButtonStyle::resolve(variant, size).class_with(extra_class);
    view! {
        <button type="button" class=class>
            {children()}
        </button>
    }
}
