//! Carousel slide state

use crate::error::{DashboardError, DashboardResult};
use crate::model::CarouselSpec;

/// Current slide of one carousel.
///
/// `slide` is always below `len`, and `len` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    slide: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> DashboardResult<Self> {
        if len == 0 {
            return Err(DashboardError::EmptyCarousel(String::new()));
        }
        Ok(Self { len, slide: 0 })
    }

    pub fn for_spec(spec: &CarouselSpec) -> DashboardResult<Self> {
        Self::new(spec.len()).map_err(|_| DashboardError::EmptyCarousel(spec.slug.to_string()))
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slide == index
    }

    /// Jump to a slide (dot button)
    pub fn select(&mut self, index: usize) -> DashboardResult<()> {
        if index >= self.len {
            return Err(DashboardError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.slide = index;
        Ok(())
    }

    /// Advance, wrapping to the first slide
    pub fn next(&mut self) {
        self.slide = (self.slide + 1) % self.len;
    }

    /// Step back, wrapping to the last slide
    pub fn prev(&mut self) {
        self.slide = (self.slide + self.len - 1) % self.len;
    }

    /// Image path for the current slide; files are numbered from 1
    pub fn image_src(&self, slug: &str) -> String {
        format!("/{}-{}.jpg", slug, self.slide + 1)
    }

    pub fn title<'a>(&self, spec: &'a CarouselSpec) -> Option<&'a str> {
        spec.titles.get(self.slide).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(CarouselState::new(0).is_err());

        let spec = CarouselSpec {
            slug: "hottest-listing",
            titles: vec![],
        };
        assert_eq!(
            CarouselState::for_spec(&spec),
            Err(DashboardError::EmptyCarousel("hottest-listing".to_string()))
        );
    }

    #[test]
    fn test_select_in_and_out_of_range() {
        let mut state = CarouselState::new(5).unwrap();
        state.select(3).unwrap();
        assert_eq!(state.slide(), 3);
        assert!(state.is_active(3));
        assert!(!state.is_active(0));

        assert_eq!(
            state.select(5),
            Err(DashboardError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(state.slide(), 3);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut state = CarouselState::new(2).unwrap();
        state.next();
        assert_eq!(state.slide(), 1);
        state.next();
        assert_eq!(state.slide(), 0);
        state.prev();
        assert_eq!(state.slide(), 1);

        let mut single = CarouselState::new(1).unwrap();
        single.next();
        single.prev();
        assert_eq!(single.slide(), 0);
    }

    #[test]
    fn test_image_src_is_one_based() {
        let mut state = CarouselState::new(5).unwrap();
        assert_eq!(state.image_src("most-watchlisted"), "/most-watchlisted-1.jpg");
        state.select(4).unwrap();
        assert_eq!(state.image_src("most-watchlisted"), "/most-watchlisted-5.jpg");
    }

    #[test]
    fn test_title_follows_slide() {
        let spec = CarouselSpec {
            slug: "most-clicked",
            titles: vec!["First", "Second"],
        };
        let mut state = CarouselState::for_spec(&spec).unwrap();
        assert_eq!(state.title(&spec), Some("First"));
        state.next();
        assert_eq!(state.title(&spec), Some("Second"));
    }
}
