//! Dashboard Model
//!
//! The literal content of the dashboard page and the layout checks it must
//! pass before rendering.

pub mod types;

pub use types::{
    BarSeries, BudgetFeature, CarouselSpec, ChartData, CountRow, FeatureIcon, NavSection,
    OverviewCard, Profile, SalesStat,
};

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// Number of tiles in the 2x2 sales stat grid
pub const STAT_TILES: usize = 4;

/// Number of counts per overview card
pub const CARD_ROWS: usize = 3;

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub profile: Profile,
    pub sales_caption: &'static str,
    pub transactions_href: &'static str,
    pub search_placeholder: &'static str,
    pub stats: Vec<SalesStat>,
    pub cards: Vec<OverviewCard>,
    pub chart: ChartData,
    pub carousels: Vec<CarouselSpec>,
    pub budget_features: Vec<BudgetFeature>,
}

const LISTING_TITLE: &str = "Urban Prime Plaza Premiere";

impl Dashboard {
    /// The built-in dashboard content
    pub fn fixture() -> Self {
        Self {
            profile: Profile::new("Ahmed D."),
            sales_caption: "Showing overview Jan 2022 - Sep 2022",
            transactions_href: "/transactions",
            search_placeholder: "Search listings, users here...",
            stats: vec![
                SalesStat { amount: 120_000_000.0, label: "Total Inflow", rate: 2.5, color: "#4545FE" },
                SalesStat { amount: 50_000_000.0, label: "MRR", rate: 2.5, color: "#12B76A" },
                SalesStat { amount: 200_000_000.0, label: "Commission Revenue", rate: 0.5, color: "#14B8A6" },
                SalesStat { amount: 100_000_000.0, label: "GMV", rate: 0.5, color: "#F04438" },
            ],
            cards: vec![
                OverviewCard {
                    section: NavSection::Listings,
                    rows: vec![
                        CountRow { label: "total", count: 1800 },
                        CountRow { label: "active", count: 80 },
                        CountRow { label: "archived", count: 1000 },
                    ],
                },
                OverviewCard {
                    section: NavSection::Users,
                    rows: vec![
                        CountRow { label: "total", count: 20_700 },
                        CountRow { label: "riders", count: 8500 },
                        CountRow { label: "subscribers", count: 7500 },
                    ],
                },
            ],
            chart: ChartData {
                labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep"],
                series: vec![
                    BarSeries {
                        label: "Dataset 1",
                        color: "#4545FE",
                        values: vec![35.0, 5.0, 15.0, 16.0, 10.0, 36.0, 23.0, 23.0, 36.0],
                    },
                    BarSeries {
                        label: "Dataset 2",
                        color: "#12B76A",
                        values: vec![28.0, 28.0, 25.0, 26.0, 2.0, 48.0, 35.0, 10.0, 32.0],
                    },
                    BarSeries {
                        label: "Dataset 3",
                        color: "#F04438",
                        values: vec![10.0, 10.0, 3.0, 10.0, 8.0, 8.0, 18.0, 18.0, 7.0],
                    },
                ],
                bar_percentage: 0.6,
                category_percentage: 0.5,
                suggested_max: 50.0,
                tick_suffix: "m",
            },
            carousels: vec![
                CarouselSpec { slug: "most-clicked", titles: vec![LISTING_TITLE; 2] },
                CarouselSpec { slug: "most-watchlisted", titles: vec![LISTING_TITLE; 5] },
                CarouselSpec { slug: "hottest-listing", titles: vec![LISTING_TITLE; 5] },
            ],
            budget_features: vec![
                BudgetFeature {
                    icon: FeatureIcon::Settings,
                    heading: "Set up annual budgets by account category",
                    body: "Allocate funds across income and expense lines with full visibility.",
                },
                BudgetFeature {
                    icon: FeatureIcon::TrendUp,
                    heading: "Track actuals vs budget in real time",
                    body: "See how your community is performing against plan, month by month.",
                },
                BudgetFeature {
                    icon: FeatureIcon::AlignBottom,
                    heading: "Adjust figures and forecast with ease",
                    body: "Edit amounts, apply percentage changes, or roll forward last year\u{2019}s data, all in one place.",
                },
            ],
        }
    }

    /// Check that every collection has the shape its layout expects
    pub fn validate(&self) -> DashboardResult<()> {
        expect_len("sales stats", STAT_TILES, self.stats.len())?;

        for card in &self.cards {
            expect_len(&card.title(), CARD_ROWS, card.rows.len())?;
        }

        if let Some(empty) = self.carousels.iter().find(|c| c.is_empty()) {
            return Err(DashboardError::EmptyCarousel(empty.slug.to_string()));
        }

        if self.chart.series.is_empty() {
            return Err(DashboardError::Layout {
                what: "chart series".to_string(),
                expected: 1,
                actual: 0,
            });
        }
        for series in &self.chart.series {
            expect_len(
                &format!("chart series '{}'", series.label),
                self.chart.labels.len(),
                series.values.len(),
            )?;
        }

        tracing::debug!(
            stats = self.stats.len(),
            cards = self.cards.len(),
            carousels = self.carousels.len(),
            "dashboard layout validated"
        );
        Ok(())
    }

    pub fn carousel(&self, slug: &str) -> Option<&CarouselSpec> {
        self.carousels.iter().find(|c| c.slug == slug)
    }
}

fn expect_len(what: &str, expected: usize, actual: usize) -> DashboardResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DashboardError::Layout {
            what: what.to_string(),
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_valid() {
        assert_eq!(Dashboard::fixture().validate(), Ok(()));
    }

    #[test]
    fn test_fixture_shapes() {
        let dashboard = Dashboard::fixture();
        assert_eq!(dashboard.stats.len(), 4);
        assert_eq!(dashboard.cards.len(), 2);
        assert_eq!(dashboard.carousel("most-clicked").unwrap().len(), 2);
        assert_eq!(dashboard.carousel("hottest-listing").unwrap().len(), 5);
        assert!(dashboard.carousel("missing").is_none());
        assert_eq!(dashboard.chart.max_value(), 48.0);
    }

    #[test]
    fn test_validate_rejects_short_stat_grid() {
        let mut dashboard = Dashboard::fixture();
        dashboard.stats.pop();

        assert_eq!(
            dashboard.validate(),
            Err(DashboardError::Layout {
                what: "sales stats".to_string(),
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_carousel() {
        let mut dashboard = Dashboard::fixture();
        dashboard.carousels[1].titles.clear();

        assert_eq!(
            dashboard.validate(),
            Err(DashboardError::EmptyCarousel("most-watchlisted".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_ragged_series() {
        let mut dashboard = Dashboard::fixture();
        dashboard.chart.series[2].values.push(1.0);

        let err = dashboard.validate().unwrap_err();
        assert!(err.to_string().contains("Dataset 3"));
    }

    #[test]
    fn test_validate_rejects_card_rows() {
        let mut dashboard = Dashboard::fixture();
        dashboard.cards[0].rows.truncate(2);

        let err = dashboard.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout mismatch in Listings Overview: expected 3 items, found 2"
        );
    }

    #[test]
    fn test_profile_names() {
        let profile = Profile::new("Ahmed D.");
        assert_eq!(profile.first_name(), "Ahmed");
        assert_eq!(profile.avatar_initial(), Some('D'));

        assert_eq!(Profile::new("Cher").avatar_initial(), Some('C'));
        assert_eq!(Profile::new("  ").avatar_initial(), None);
        assert_eq!(Profile::new("").first_name(), "");
    }

    #[test]
    fn test_nav_active_paths() {
        assert!(NavSection::Dashboard.is_active("/"));
        assert!(NavSection::Dashboard.is_active("/dashboard"));
        assert!(!NavSection::Listings.is_active("/"));
        assert!(NavSection::Users.is_active("/users"));

        assert_eq!(NavSection::from_path("/request"), Some(NavSection::Request));
        assert_eq!(NavSection::from_path("/transactions"), None);
    }

    #[test]
    fn test_card_title_and_link() {
        let dashboard = Dashboard::fixture();
        assert_eq!(dashboard.cards[1].title(), "Users Overview");
        assert_eq!(dashboard.cards[0].href(), "/listings");
    }
}
