use carousel::constants::ACTIVE_CLASS;
use carousel::{Carousel, Document, MemoryDocument, NodeId};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Previous,
    Jump(i64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Previous),
        (-20i64..40).prop_map(Step::Jump),
    ]
}

fn page(slides: usize, indicators: usize) -> (MemoryDocument, Vec<NodeId>, Vec<NodeId>) {
    let mut doc = MemoryDocument::new();
    let s = doc.append_many("carousel-item", slides);
    let i = doc.append_many("indicator", indicators);
    (doc, s, i)
}

fn active(doc: &MemoryDocument, nodes: &[NodeId]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| doc.has_class(**n, ACTIVE_CLASS))
        .map(|(i, _)| i + 1)
        .collect()
}

fn run(carousel: &mut Carousel, doc: &mut MemoryDocument, step: Step) {
    match step {
        Step::Next => carousel.advance_next(doc),
        Step::Previous => carousel.advance_previous(doc),
        Step::Jump(n) => carousel.jump_to(n, doc),
    }
}

proptest! {
    /// Exactly one slide and its indicator are active after every call.
    #[test]
    fn exactly_one_active_after_each_call(
        n in 1usize..12,
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let (mut doc, slides, indicators) = page(n, n);
        let mut carousel = Carousel::new();
        carousel.initialize(&mut doc);

        for step in steps {
            run(&mut carousel, &mut doc, step);
            let s = active(&doc, &slides);
            prop_assert_eq!(s.len(), 1);
            prop_assert_eq!(&active(&doc, &indicators), &s);
            prop_assert_eq!(s[0] as i64, carousel.current_index());
        }
    }

    #[test]
    fn previous_from_first_lands_on_last(n in 1usize..20) {
        let (mut doc, slides, _) = page(n, n);
        let mut carousel = Carousel::new();
        carousel.initialize(&mut doc);
        carousel.advance_previous(&mut doc);
        prop_assert_eq!(active(&doc, &slides), vec![n]);
    }

    #[test]
    fn next_from_last_lands_on_first(n in 1usize..20) {
        let (mut doc, slides, _) = page(n, n);
        let mut carousel = Carousel::new();
        carousel.jump_to(n as i64, &mut doc);
        carousel.advance_next(&mut doc);
        prop_assert_eq!(active(&doc, &slides), vec![1]);
    }

    #[test]
    fn out_of_range_jumps_wrap(n in 1usize..20, below in 0i64..100, above in 1i64..100) {
        let (mut doc, slides, _) = page(n, n);
        let mut carousel = Carousel::new();

        carousel.jump_to(-below, &mut doc);
        prop_assert_eq!(active(&doc, &slides), vec![n]);

        carousel.jump_to(n as i64 + above, &mut doc);
        prop_assert_eq!(active(&doc, &slides), vec![1]);
    }

    #[test]
    fn empty_carousel_never_activates(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let (mut doc, _, _) = page(0, 0);
        let mut carousel = Carousel::new();
        carousel.initialize(&mut doc);
        for step in steps {
            run(&mut carousel, &mut doc, step);
            prop_assert!(doc.with_class(ACTIVE_CLASS).is_empty());
        }
    }

    #[test]
    fn short_indicator_row_is_tolerated(
        n in 2usize..10,
        missing in 1usize..5,
        steps in prop::collection::vec(step_strategy(), 0..30),
    ) {
        let dots = n.saturating_sub(missing);
        let (mut doc, slides, indicators) = page(n, dots);
        let mut carousel = Carousel::new();
        carousel.initialize(&mut doc);

        for step in steps {
            run(&mut carousel, &mut doc, step);
            let s = active(&doc, &slides);
            prop_assert_eq!(s.len(), 1);
            let expected: Vec<usize> = s.iter().copied().filter(|i| *i <= dots).collect();
            prop_assert_eq!(active(&doc, &indicators), expected);
        }
    }
}

#[test]
fn three_slides_advance_two_three_one() {
    let (mut doc, slides, indicators) = page(3, 3);
    let mut carousel = Carousel::new();
    carousel.initialize(&mut doc);
    assert_eq!(active(&doc, &slides), vec![1]);
    assert_eq!(active(&doc, &indicators), vec![1]);

    let mut seen = Vec::new();
    for _ in 0..3 {
        carousel.advance_next(&mut doc);
        seen.extend(active(&doc, &slides));
    }
    assert_eq!(seen, vec![2, 3, 1]);
}

#[test]
fn two_indicators_for_three_slides() {
    let (mut doc, slides, indicators) = page(3, 2);
    let mut carousel = Carousel::new();
    carousel.initialize(&mut doc);
    carousel.jump_to(3, &mut doc);

    assert_eq!(active(&doc, &slides), vec![3]);
    assert!(active(&doc, &indicators).is_empty());
}

#[test]
fn jump_zero_matches_jump_last() {
    let (mut a, slides_a, _) = page(4, 4);
    let (mut b, slides_b, _) = page(4, 4);
    Carousel::new().jump_to(0, &mut a);
    Carousel::new().jump_to(4, &mut b);
    assert_eq!(active(&a, &slides_a), active(&b, &slides_b));
}
