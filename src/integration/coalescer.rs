/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to render this loop. Many requests in one loop still draw a
    /// single frame.
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Only the last resize of a loop matters
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::Coalescer;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, false)]
    #[case(1, false, true)]
    #[case(3, false, true)]
    #[case(0, true, true)]
    #[case(2, true, true)]
    fn test_decide_render(#[case] reqs: usize, #[case] saw: bool, #[case] expected: bool) {
        assert_eq!(Coalescer::decide_render(reqs, saw), expected);
    }

    #[test]
    fn test_decide_resize_keeps_last() {
        assert_eq!(Coalescer::decide_resize(None, &[]), None);
        assert_eq!(
            Coalescer::decide_resize(None, &[(10, 10), (20, 30)]),
            Some((20, 30))
        );
        assert_eq!(Coalescer::decide_resize(Some((5, 5)), &[]), Some((5, 5)));
    }
}
