use landing::ui::mvi::Reducer;
use landing::ui::slider::{Carousel, SliderIntent, SliderReducer, SliderState};

fn init(slide_count: usize) -> SliderState {
    SliderReducer::reduce(SliderState::Empty, SliderIntent::Init { slide_count })
}

fn carousel(state: &SliderState) -> &Carousel {
    state.carousel().expect("slider should be active")
}

fn apply(state: SliderState, intents: impl IntoIterator<Item = SliderIntent>) -> SliderState {
    intents
        .into_iter()
        .fold(state, |state, intent| SliderReducer::reduce(state, intent))
}

/// Exactly one active dot, tagged with the current index, and offsets relative to it.
fn assert_consistent(carousel: &Carousel) {
    let active: Vec<_> = carousel.dots().iter().filter(|dot| dot.active).collect();
    assert_eq!(active.len(), 1, "exactly one active dot");
    assert_eq!(active[0].tag, carousel.current().to_string());
    for slide in 0..carousel.slide_count() {
        let expected = 100 * (slide as i32 - carousel.current() as i32);
        assert_eq!(carousel.offset(slide), Some(expected), "slide {}", slide);
    }
}

#[test]
fn init_positions_slides_and_dots() {
    for n in 1..=6 {
        let state = init(n);
        let carousel = carousel(&state);
        assert_eq!(carousel.current(), 0);
        let expected: Vec<i32> = (0..n as i32).map(|i| 100 * i).collect();
        assert_eq!(carousel.offsets(), expected.as_slice());
        assert_eq!(carousel.dots().len(), n);
        assert!(carousel.dots()[0].active);
        assert_consistent(carousel);
    }
}

#[test]
fn n_next_calls_return_to_start() {
    for n in 1..=5 {
        for start in 0..n {
            let state = apply(init(n), [SliderIntent::GoTo { slide: start }]);
            let state = apply(state, (0..n).map(|_| SliderIntent::Next));
            assert_eq!(state.current(), Some(start), "n={} start={}", n, start);
        }
    }
}

#[test]
fn n_previous_calls_return_to_start() {
    for n in 1..=5 {
        for start in 0..n {
            let state = apply(init(n), [SliderIntent::GoTo { slide: start }]);
            let state = apply(state, (0..n).map(|_| SliderIntent::Previous));
            assert_eq!(state.current(), Some(start), "n={} start={}", n, start);
        }
    }
}

#[test]
fn boundaries_wrap() {
    let state = apply(init(4), [SliderIntent::GoTo { slide: 3 }, SliderIntent::Next]);
    assert_eq!(state.current(), Some(0));

    let state = apply(init(4), [SliderIntent::Previous]);
    assert_eq!(state.current(), Some(3));
}

#[test]
fn single_slide_stays_put() {
    let state = apply(init(1), [SliderIntent::Next, SliderIntent::Previous]);
    assert_eq!(state.current(), Some(0));
    assert_consistent(carousel(&state));
}

#[test]
fn goto_sets_exact_index_from_any_start() {
    let n = 5;
    for start in 0..n {
        for target in 0..n {
            let state = apply(
                init(n),
                [
                    SliderIntent::GoTo { slide: start },
                    SliderIntent::GoTo { slide: target },
                ],
            );
            let carousel = carousel(&state);
            assert_eq!(carousel.current(), target);
            assert_eq!(carousel.active_dot().map(|dot| dot.slide), Some(target));
        }
    }
}

#[test]
fn goto_out_of_range_is_ignored() {
    let state = apply(
        init(3),
        [SliderIntent::Next, SliderIntent::GoTo { slide: 3 }],
    );
    assert_eq!(state.current(), Some(1));
    assert_consistent(carousel(&state));
}

#[test]
fn every_transition_keeps_render_consistent() {
    let intents = [
        SliderIntent::Next,
        SliderIntent::Next,
        SliderIntent::Previous,
        SliderIntent::GoTo { slide: 4 },
        SliderIntent::Next,
        SliderIntent::DotClicked {
            tag: "2".to_string(),
        },
        SliderIntent::Previous,
        SliderIntent::Previous,
        SliderIntent::Previous,
    ];
    let mut state = init(5);
    for intent in intents {
        state = SliderReducer::reduce(state, intent);
        assert_consistent(carousel(&state));
    }
}

#[test]
fn three_slides_forward_scenario() {
    let state = init(3);

    let state = SliderReducer::reduce(state, SliderIntent::Next);
    let c = carousel(&state);
    assert_eq!(c.current(), 1);
    assert_eq!(c.offsets(), &[-100, 0, 100]);
    assert_eq!(c.active_dot().map(|dot| dot.slide), Some(1));

    let state = SliderReducer::reduce(state, SliderIntent::Next);
    let c = carousel(&state);
    assert_eq!(c.current(), 2);
    assert_eq!(c.offsets(), &[-200, -100, 0]);
    assert_eq!(c.active_dot().map(|dot| dot.slide), Some(2));

    let state = SliderReducer::reduce(state, SliderIntent::Next);
    let c = carousel(&state);
    assert_eq!(c.current(), 0);
    assert_eq!(c.offsets(), &[0, 100, 200]);
    assert_eq!(c.active_dot().map(|dot| dot.slide), Some(0));
}

#[test]
fn dot_click_scenario_with_five_slides() {
    let state = SliderReducer::reduce(
        init(5),
        SliderIntent::DotClicked {
            tag: "3".to_string(),
        },
    );
    let c = carousel(&state);
    assert_eq!(c.current(), 3);
    assert_eq!(c.offsets(), &[-300, -200, -100, 0, 100]);
    assert_eq!(c.active_dot().map(|dot| dot.tag.as_str()), Some("3"));
}

#[test]
fn unparseable_and_out_of_range_tags_are_noops() {
    for tag in ["", "x", "-1", "5", "1.5"] {
        let state = apply(
            init(5),
            [
                SliderIntent::Next,
                SliderIntent::DotClicked {
                    tag: tag.to_string(),
                },
            ],
        );
        assert_eq!(state.current(), Some(1), "tag {:?}", tag);
    }
}
