//! Section navigation state.
//!
//! The renderer measures where each section starts in the laid-out
//! page and reports the anchors back here; navigation requests are
//! consumed by the renderer on the next frame, once the anchor offsets
//! for the current width are known.

use folio_types::Section;

#[derive(Debug, Default)]
pub struct NavState {
    /// Section start offsets in page lines, in scroll order.
    anchors: Vec<(Section, u16)>,
    /// Jump requested by input, not yet applied to the scroll.
    pending: Option<Section>,
}

impl NavState {
    pub fn set_anchors(&mut self, anchors: Vec<(Section, u16)>) {
        self.anchors = anchors;
    }

    #[must_use]
    pub fn anchor(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
    }

    /// The section the viewport is currently in: the last section
    /// whose anchor is at or above the scroll offset. A fully scrolled
    /// page counts as the last section.
    #[must_use]
    pub fn active(&self, scroll: u16, scroll_max: u16) -> Section {
        if scroll_max > 0 && scroll >= scroll_max {
            if let Some((section, _)) = self.anchors.last() {
                return *section;
            }
        }
        self.anchors
            .iter()
            .take_while(|(_, offset)| *offset <= scroll)
            .last()
            .map_or(Section::Hero, |(section, _)| *section)
    }

    pub fn request_jump(&mut self, section: Section) {
        self.pending = Some(section);
    }

    pub fn take_request(&mut self) -> Option<Section> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::NavState;
    use folio_types::Section;

    fn anchored() -> NavState {
        let mut nav = NavState::default();
        nav.set_anchors(vec![
            (Section::Hero, 0),
            (Section::About, 20),
            (Section::Skills, 55),
            (Section::Projects, 90),
            (Section::Contact, 140),
        ]);
        nav
    }

    #[test]
    fn active_tracks_scroll_offset() {
        let nav = anchored();
        assert_eq!(nav.active(0, 160), Section::Hero);
        assert_eq!(nav.active(19, 160), Section::Hero);
        assert_eq!(nav.active(20, 160), Section::About);
        assert_eq!(nav.active(100, 160), Section::Projects);
    }

    #[test]
    fn bottom_of_page_is_last_section() {
        let nav = anchored();
        assert_eq!(nav.active(160, 160), Section::Contact);
        assert_eq!(nav.active(200, 160), Section::Contact);
    }

    #[test]
    fn no_anchors_defaults_to_hero() {
        let nav = NavState::default();
        assert_eq!(nav.active(42, 100), Section::Hero);
    }

    #[test]
    fn jump_request_is_consumed_once() {
        let mut nav = anchored();
        nav.request_jump(Section::Contact);
        assert_eq!(nav.take_request(), Some(Section::Contact));
        assert_eq!(nav.take_request(), None);
    }
}
