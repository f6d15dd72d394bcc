/// How far below the top of the viewport a section may start and still count
/// as the one being read.
pub const LOOKAHEAD_PX: f64 = 200.0;

/// The page sections reachable from the dock, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Highlights,
    Connect,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Highlights,
        Section::Connect,
    ];

    /// Anchor id of the section's wrapper element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Highlights => "highlights",
            Self::Connect => "connect",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Highlights => "Highlights",
            Self::Connect => "Connect",
        }
    }
}

/// Scroll-spy state: which section the dock marks as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSpy {
    active: Section,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// `offset_of` yields a section's top offset, or `None` if it is not in the
    /// document. Every section in declared order whose top is at or above
    /// `scroll_y + LOOKAHEAD_PX` overwrites the previous match, so the last one
    /// wins. With no match the previous value is kept.
    pub fn observe<F>(&mut self, scroll_y: f64, offset_of: F) -> Section
    where
        F: Fn(Section) -> Option<f64>,
    {
        let threshold = scroll_y + LOOKAHEAD_PX;
        for section in Section::ALL {
            if offset_of(section).is_some_and(|top| top <= threshold) {
                self.active = section;
            }
        }
        self.active
    }

    /// Optimistic update for a click; does not wait for the scroll to land.
    pub fn navigate(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tops: [Option<f64>; 4]) -> impl Fn(Section) -> Option<f64> {
        move |s| tops[Section::ALL.iter().position(|x| *x == s).unwrap()]
    }

    #[test]
    fn test_section_order_and_ids() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "about", "highlights", "connect"]);
        assert_eq!(ScrollSpy::new().active(), Section::Home);
        assert_eq!(Section::Highlights.label(), "Highlights");
    }

    #[test]
    fn test_top_of_page_is_home() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), Some(700.0), Some(1400.0), Some(2100.0)]);
        assert_eq!(spy.observe(0.0, &offsets), Section::Home);
    }

    #[test]
    fn test_lookahead_activates_early() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), Some(150.0), Some(900.0), Some(1600.0)]);
        assert_eq!(spy.observe(0.0, &offsets), Section::About);

        // exactly on the threshold counts
        let offsets = layout([Some(0.0), Some(200.0), Some(900.0), Some(1600.0)]);
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.observe(0.0, &offsets), Section::About);

        let offsets = layout([Some(0.0), Some(201.0), Some(900.0), Some(1600.0)]);
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.observe(0.0, &offsets), Section::Home);
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), Some(700.0), Some(1400.0), Some(2100.0)]);
        assert_eq!(spy.observe(1300.0, &offsets), Section::Highlights);
        assert_eq!(spy.observe(5000.0, &offsets), Section::Connect);
        assert_eq!(spy.observe(600.0, &offsets), Section::About);
    }

    #[test]
    fn test_ties_go_to_later_section() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), Some(500.0), Some(500.0), Some(2000.0)]);
        assert_eq!(spy.observe(400.0, &offsets), Section::Highlights);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), None, Some(900.0), None]);
        assert_eq!(spy.observe(800.0, &offsets), Section::Highlights);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut spy = ScrollSpy::new();
        spy.navigate(Section::Highlights);
        let offsets = layout([Some(900.0), Some(1000.0), Some(1100.0), Some(1200.0)]);
        assert_eq!(spy.observe(0.0, &offsets), Section::Highlights);

        let nothing = layout([None, None, None, None]);
        assert_eq!(spy.observe(0.0, &nothing), Section::Highlights);
    }

    #[test]
    fn test_navigate_is_immediate() {
        let mut spy = ScrollSpy::new();
        let offsets = layout([Some(0.0), Some(700.0), Some(1400.0), Some(2100.0)]);
        spy.observe(0.0, &offsets);
        spy.navigate(Section::Connect);
        assert_eq!(spy.active(), Section::Connect);

        // a later scroll event still wins
        assert_eq!(spy.observe(750.0, &offsets), Section::About);
    }

    #[test]
    fn test_every_scroll_matches_rule() {
        let tops = [0.0, 640.0, 1210.0, 1980.0];
        let offsets = layout(tops.map(Some));
        let mut spy = ScrollSpy::new();
        for y in (0..2500).step_by(37) {
            let y = f64::from(y);
            let expected = Section::ALL
                .iter()
                .zip(tops)
                .filter(|(_, top)| *top <= y + LOOKAHEAD_PX)
                .map(|(s, _)| *s)
                .last()
                .unwrap();
            assert_eq!(spy.observe(y, &offsets), expected, "scroll_y = {y}");
        }
    }
}
