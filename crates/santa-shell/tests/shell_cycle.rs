use std::cell::RefCell;
use std::rc::Rc;

use santa_core::Color;
use santa_figure::{Geometry, Part};
use santa_shell::{ControlError, ControlEvent, Phase, Shell};

fn suit_color(shell: &Shell) -> Color {
    let fig = shell.figure().expect("figure after load");
    let body = fig.shapes_of(Part::Body).next().expect("body");
    body.fill()
}

fn beard_width(shell: &Shell) -> f32 {
    let fig = shell.figure().expect("figure after load");
    match fig.shapes_of(Part::Beard).next().expect("beard").geometry() {
        Geometry::Ellipse { width, .. } => *width,
        other => panic!("beard should be an ellipse, got {other:?}"),
    }
}

fn loaded() -> Shell {
    let mut shell = Shell::default();
    assert_eq!(shell.handle(ControlEvent::Load), Ok(true));
    shell
}

#[test]
fn nothing_is_rendered_before_load() {
    let shell = Shell::default();
    assert!(shell.figure().is_none());
    assert_eq!(shell.phase(), Phase::Idle);
    assert_eq!(shell.render_count(), 0);
}

#[test]
fn load_renders_defaults() {
    let shell = loaded();
    assert_eq!(shell.render_count(), 1);
    assert_eq!(suit_color(&shell), Color::rgb(255, 0, 0));
    assert_eq!(beard_width(&shell), 2.5);
    assert_eq!(shell.figure().map(|f| f.title()), Some("Santa Claus"));
}

#[test]
fn every_render_passes_through_rendering_back_to_idle() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut shell = Shell::default();
    let sink = Rc::clone(&log);
    shell.set_observer(move |from, to| sink.borrow_mut().push((from, to)));

    shell.handle(ControlEvent::Load).unwrap();
    shell.handle(ControlEvent::BeardWidth(3.0)).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            (Phase::Idle, Phase::Rendering),
            (Phase::Rendering, Phase::Idle),
            (Phase::Idle, Phase::Rendering),
            (Phase::Rendering, Phase::Idle),
        ]
    );
    assert_eq!(shell.phase(), Phase::Idle);
}

#[test]
fn green_suit_with_narrow_beard() {
    let mut shell = loaded();
    shell.handle(ControlEvent::SuitColor("#00FF00".into())).unwrap();
    shell.handle(ControlEvent::BeardWidth(1.5)).unwrap();
    assert_eq!(suit_color(&shell), Color::rgb(0, 255, 0));
    assert_eq!(beard_width(&shell), 1.5);
    assert_eq!(shell.render_count(), 3);
}

#[test]
fn widest_beard_by_dragging_past_the_track_end() {
    let mut shell = loaded();
    assert_eq!(shell.handle(ControlEvent::BeardWidthFraction(1.7)), Ok(true));
    assert_eq!(beard_width(&shell), 4.0);
    assert_eq!(shell.handle(ControlEvent::NudgeBeardWidth(1)), Ok(false));
    assert_eq!(shell.render_count(), 2);
}

#[test]
fn unchanged_values_do_not_re_render() {
    let mut shell = loaded();
    assert_eq!(shell.handle(ControlEvent::SuitColor("#ff0000".into())), Ok(false));
    assert_eq!(shell.handle(ControlEvent::BeardWidth(2.5)), Ok(false));
    assert_eq!(shell.handle(ControlEvent::BeardWidth(2.52)), Ok(false));
    assert_eq!(shell.render_count(), 1);
}

#[test]
fn invalid_color_keeps_previous_figure() {
    let mut shell = loaded();
    shell.handle(ControlEvent::SuitColor("#0000FF".into())).unwrap();
    let before = shell.figure().cloned();

    let err = shell.handle(ControlEvent::SuitColor("not-a-color".into()));
    assert_eq!(err, Err(ControlError::InvalidColor("not-a-color".into())));
    assert_eq!(shell.figure().cloned(), before);
    assert_eq!(shell.color_picker().value(), Color::rgb(0, 0, 255));
    assert_eq!(shell.render_count(), 2);
}

#[test]
fn swatches_select_preset_colors() {
    let mut shell = Shell::new(vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 128)]);
    shell.handle(ControlEvent::Load).unwrap();
    assert_eq!(shell.handle(ControlEvent::SuitSwatch(1)), Ok(true));
    assert_eq!(suit_color(&shell), Color::rgb(0, 0, 128));
    assert_eq!(shell.handle(ControlEvent::SuitSwatch(5)), Ok(false));
}

#[test]
fn parameters_follow_the_controls() {
    let mut shell = loaded();
    shell.handle(ControlEvent::NudgeBeardWidth(-3)).unwrap();
    let params = shell.parameters();
    assert_eq!(params.beard_width, 2.2);
    assert_eq!(params.suit_color, Color::rgb(255, 0, 0));
}
