//! SVG Icons
//!
//! Inline stroke icons, so the page needs no icon font or sprite request.

use admindash::model::{FeatureIcon, NavSection};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Logo,
    Bell,
    Calculator,
    Calendar,
    Message,
    Dashboard,
    Listings,
    Users,
    Request,
    Applications,
    Search,
    ArrowUp,
    AngleRight,
    RightArrow,
    ArrowLeft,
    Close,
    Settings,
    TrendUp,
    AlignBottom,
}

impl Glyph {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Logo => &["M4 20V8l8-5 8 5v12", "M9 20v-6h6v6"],
            Glyph::Bell => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.94 1.94 0 0 0 3.4 0"],
            Glyph::Calculator => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M8 6h8",
                "M8 12h.01",
                "M12 12h.01",
                "M16 12h.01",
                "M8 17h.01",
                "M12 17h.01",
                "M16 17h.01",
            ],
            Glyph::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Glyph::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Glyph::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Glyph::Listings => &["M3 10l9-7 9 7v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Glyph::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::Request => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
            Glyph::Applications => &[
                "M9 2h6v4H9z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
            ],
            Glyph::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.35-4.35"],
            Glyph::ArrowUp => &["M12 19V5", "M5 12l7-7 7 7"],
            Glyph::AngleRight => &["M9 18l6-6-6-6"],
            Glyph::RightArrow => &["M5 12h14", "M12 5l7 7-7 7"],
            Glyph::ArrowLeft => &["M19 12H5", "M12 19l-7-7 7-7"],
            Glyph::Close => &["M18 6L6 18", "M6 6l12 12"],
            Glyph::Settings => &[
                "M4 21v-7", "M4 10V3", "M12 21v-9", "M12 8V3", "M20 21v-5", "M20 12V3",
                "M1 14h6", "M9 8h6", "M17 16h6",
            ],
            Glyph::TrendUp => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
            Glyph::AlignBottom => &["M3 22h18", "M8 4h3v14H8z", "M13 10h3v8h-3z"],
        }
    }
}

pub fn section_glyph(section: NavSection) -> Glyph {
    match section {
        NavSection::Dashboard => Glyph::Dashboard,
        NavSection::Listings => Glyph::Listings,
        NavSection::Users => Glyph::Users,
        NavSection::Request => Glyph::Request,
        NavSection::Applications => Glyph::Applications,
    }
}

pub fn feature_glyph(icon: FeatureIcon) -> Glyph {
    match icon {
        FeatureIcon::Settings => Glyph::Settings,
        FeatureIcon::TrendUp => Glyph::TrendUp,
        FeatureIcon::AlignBottom => Glyph::AlignBottom,
    }
}

/// Stroke icon, 20px unless `class` sets a size
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Extra classes, e.g. `rotate-180` or `size-6`
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            class=format!("size-5 shrink-0 {}", class)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}
