//! Dashboard Model Types
//!
//! Immutable records rendered by the dashboard. Nothing here is mutated after
//! construction; view state lives in [`crate::state`].

use serde::Serialize;

/// Signed-in user shown in the header and greeting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub display_name: String,
}

impl Profile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// First word of the display name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }

    /// Letter shown in the avatar button.
    ///
    /// Uses the initial of the second word ("Ahmed D." -> 'D'), falling back
    /// to the first word when the name has only one.
    pub fn avatar_initial(&self) -> Option<char> {
        let mut words = self.display_name.split_whitespace();
        let first = words.next()?;
        words
            .next()
            .and_then(|w| w.chars().next())
            .or_else(|| first.chars().next())
    }
}

/// Top-level navigation sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Dashboard,
    Listings,
    Users,
    Request,
    Applications,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Dashboard,
        NavSection::Listings,
        NavSection::Users,
        NavSection::Request,
        NavSection::Applications,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "dashboard",
            NavSection::Listings => "listings",
            NavSection::Users => "users",
            NavSection::Request => "request",
            NavSection::Applications => "applications",
        }
    }

    /// Capitalized label ("Listings")
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Listings => "Listings",
            NavSection::Users => "Users",
            NavSection::Request => "Request",
            NavSection::Applications => "Applications",
        }
    }

    pub fn href(&self) -> String {
        format!("/{}", self.slug())
    }

    /// Whether this section's link is highlighted for `path`.
    ///
    /// The root path belongs to the dashboard.
    pub fn is_active(&self, path: &str) -> bool {
        path == self.href() || (*self == NavSection::Dashboard && path == "/")
    }

    pub fn from_path(path: &str) -> Option<NavSection> {
        Self::ALL.into_iter().find(|s| s.is_active(path))
    }
}

/// A headline revenue figure in the sales overview grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesStat {
    /// Amount in naira
    pub amount: f64,
    pub label: &'static str,
    /// Change rate in percent
    pub rate: f64,
    /// CSS color of the amount
    pub color: &'static str,
}

/// One labelled count in an overview card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountRow {
    pub label: &'static str,
    pub count: u64,
}

/// Summary card for a navigation section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewCard {
    pub section: NavSection,
    pub rows: Vec<CountRow>,
}

impl OverviewCard {
    pub fn title(&self) -> String {
        format!("{} Overview", self.section.label())
    }

    /// Target of the "View all" link
    pub fn href(&self) -> String {
        self.section.href()
    }
}

/// Image carousel definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSpec {
    /// Kebab-case name, also the image file prefix
    pub slug: &'static str,
    /// Caption per slide
    pub titles: Vec<&'static str>,
}

impl CarouselSpec {
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Icon shown beside a budgeting feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Settings,
    TrendUp,
    AlignBottom,
}

/// A promo row in the budgeting modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetFeature {
    pub icon: FeatureIcon,
    pub heading: &'static str,
    pub body: &'static str,
}

/// A bar series in the sales chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Grouped bar chart definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub series: Vec<BarSeries>,
    /// Share of a series slot filled by its bar
    pub bar_percentage: f64,
    /// Share of a category filled by its bar group
    pub category_percentage: f64,
    /// Lower bound for the top of the y axis
    pub suggested_max: f64,
    /// Appended to y tick labels
    pub tick_suffix: &'static str,
}

impl ChartData {
    /// Largest value across all series, 0 when empty
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}
