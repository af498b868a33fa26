#![forbid(unsafe_code)]

//! Pure paging controller for image carousels.
//!
//! One page per image, in order, with forward/backward navigation.
//! The sequence is immutable for the controller's lifetime; the
//! platform paging widget only asks "what comes before/after this
//! page" and renders the answer.

/// Handle to one page of a [`Carousel`].
///
/// Only obtainable from a carousel, so its index is always in range
/// for the carousel that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    index: usize,
}

impl Page {
    /// Position of this page in the image sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Ordered, immutable sequence of image pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    start: usize,
}

impl Carousel {
    /// Build one page per image, starting at `start_index`.
    ///
    /// An out-of-bounds `start_index` clamps to the last valid page
    /// rather than failing. An empty sequence is tolerated; it simply
    /// has no initial page.
    #[must_use]
    pub fn new(images: Vec<String>, start_index: usize) -> Self {
        let start = match images.len() {
            0 => 0,
            len => start_index.min(len - 1),
        };
        Self { images, start }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Page at the (clamped) start index, or `None` when empty.
    #[must_use]
    pub fn initial_page(&self) -> Option<Page> {
        if self.is_empty() {
            None
        } else {
            Some(Page { index: self.start })
        }
    }

    /// The page immediately before `page`, or `None` at the first page.
    #[must_use]
    pub fn page_before(&self, page: Page) -> Option<Page> {
        if page.index == 0 || page.index >= self.len() {
            None
        } else {
            Some(Page {
                index: page.index - 1,
            })
        }
    }

    /// The page immediately after `page`, or `None` at the last page.
    #[must_use]
    pub fn page_after(&self, page: Page) -> Option<Page> {
        let next = page.index + 1;
        if next >= self.len() {
            None
        } else {
            Some(Page { index: next })
        }
    }

    /// Image URL for `page`, or `None` for a foreign page handle.
    #[must_use]
    pub fn image(&self, page: Page) -> Option<&str> {
        self.images.get(page.index).map(String::as_str)
    }

    /// All pages, first to last.
    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        (0..self.len()).map(|index| Page { index })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}.jpg")).collect()
    }

    #[rstest]
    #[case(3, 0, 0)]
    #[case(3, 2, 2)]
    #[case(3, 5, 2)] // out of bounds clamps to last
    #[case(1, 9, 0)]
    fn initial_page_clamps_start_index(
        #[case] len: usize,
        #[case] start: usize,
        #[case] expected: usize,
    ) {
        let carousel = Carousel::new(images(len), start);
        assert_eq!(carousel.initial_page().unwrap().index(), expected);
    }

    #[test]
    fn empty_sequence_has_no_initial_page() {
        let carousel = Carousel::new(Vec::new(), 0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.initial_page(), None);
    }

    #[test]
    fn single_image_has_no_neighbors() {
        let carousel = Carousel::new(images(1), 0);
        let page = carousel.initial_page().unwrap();
        assert_eq!(carousel.page_before(page), None);
        assert_eq!(carousel.page_after(page), None);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let carousel = Carousel::new(images(3), 1);
        let middle = carousel.initial_page().unwrap();

        let first = carousel.page_before(middle).unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(carousel.page_before(first), None);

        let last = carousel.page_after(middle).unwrap();
        assert_eq!(last.index(), 2);
        assert_eq!(carousel.page_after(last), None);
    }

    #[test]
    fn walking_forward_visits_every_page_once() {
        let carousel = Carousel::new(images(4), 0);
        let mut seen = Vec::new();
        let mut page = carousel.initial_page();
        while let Some(current) = page {
            seen.push(current.index());
            page = carousel.page_after(current);
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn image_lookup_follows_page_order() {
        let carousel = Carousel::new(images(2), 0);
        let pages: Vec<_> = carousel.pages().collect();
        assert_eq!(carousel.image(pages[0]), Some("img-0.jpg"));
        assert_eq!(carousel.image(pages[1]), Some("img-1.jpg"));
    }

    #[test]
    fn foreign_page_handle_yields_no_image() {
        let big = Carousel::new(images(5), 4);
        let small = Carousel::new(images(1), 0);
        let page = big.initial_page().unwrap();
        assert_eq!(small.image(page), None);
    }
}
