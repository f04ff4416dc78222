use std::ops::RangeInclusive;

/// Page numbers to link, `window` wide and centred on `current` where the
/// bounds allow.
pub fn page_window(current: usize, total_pages: usize, window: usize) -> RangeInclusive<usize> {
    let total = total_pages.max(1);
    let window = window.clamp(1, total);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(window / 2).max(1);
    if start + window - 1 > total {
        start = total + 1 - window;
    }
    start..=start + window - 1
}

/// One entry of the numbered part of a pagination block.
#[derive(Clone, Debug, PartialEq)]
pub struct PageItem {
    pub label: String,
    pub href: String,
    pub current: bool,
    pub gap: bool,
}

impl PageItem {
    fn link(number: usize, href: String) -> Self {
        Self { label: number.to_string(), href, current: false, gap: false }
    }

    fn current(number: usize) -> Self {
        Self { label: number.to_string(), href: String::new(), current: true, gap: false }
    }

    fn gap() -> Self {
        Self { label: String::new(), href: String::new(), current: false, gap: true }
    }
}

/// Numbered links for `current`, with a link to the first/last page and
/// a gap marker when the window stops short of them.
pub fn page_items<F>(current: usize, total_pages: usize, window: usize, href: F) -> Vec<PageItem>
where
    F: Fn(usize) -> String,
{
    let total = total_pages.max(1);
    let range = page_window(current, total, window);
    let (first, last) = (*range.start(), *range.end());
    let mut items = Vec::with_capacity(last - first + 5);

    if first > 1 {
        items.push(PageItem::link(1, href(1)));
        if first > 2 {
            items.push(PageItem::gap());
        }
    }
    for n in range {
        if n == current {
            items.push(PageItem::current(n));
        } else {
            items.push(PageItem::link(n, href(n)));
        }
    }
    if last < total {
        if last + 1 < total {
            items.push(PageItem::gap());
        }
        items.push(PageItem::link(total, href(total)));
    }
    items
}
