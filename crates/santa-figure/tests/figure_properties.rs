use anyhow::Result;
use santa_core::Color;
use santa_figure::{
    BOOT_BLACK, EYE_BLACK, Figure, Geometry, NOSE_BROWN, Part, RenderParameters, SKIN, TRIM_WHITE,
    build_santa,
};

fn build(hex: &str, width: f32) -> Result<Figure> {
    let color = Color::parse(hex)?;
    Ok(build_santa(&RenderParameters::new(color, width)))
}

fn beard_geometry(fig: &Figure) -> ([f32; 2], f32, f32) {
    let beards: Vec<_> = fig.shapes_of(Part::Beard).collect();
    assert_eq!(beards.len(), 1);
    match beards[0].geometry() {
        Geometry::Ellipse {
            center,
            width,
            height,
            ..
        } => (*center, *width, *height),
        other => panic!("beard should be an ellipse, got {other:?}"),
    }
}

fn fixed_color(part: Part) -> Option<Color> {
    match part {
        Part::Boot => Some(BOOT_BLACK),
        Part::Beard | Part::HatTrim | Part::Pompom => Some(TRIM_WHITE),
        Part::Hand | Part::Head => Some(SKIN),
        Part::Eye => Some(EYE_BLACK),
        Part::Nose => Some(NOSE_BROWN),
        _ => None,
    }
}

fn assert_colors(fig: &Figure, suit: Color) {
    for shape in fig.shapes() {
        if shape.part().is_suit() {
            assert_eq!(shape.fill(), suit, "{:?} should wear the suit color", shape.part());
        } else {
            assert_eq!(Some(shape.fill()), fixed_color(shape.part()), "{:?}", shape.part());
        }
    }
}

#[test]
fn suit_shapes_follow_the_chosen_color() -> Result<()> {
    for hex in ["#FF0000", "#00FF00", "#0000FF", "#123456", "gold", "rgb(10, 20, 30)"] {
        let fig = build(hex, 2.5)?;
        assert_colors(&fig, Color::parse(hex)?);
    }
    Ok(())
}

#[test]
fn beard_width_tracks_input_across_slider_range() -> Result<()> {
    for i in 0..=25 {
        let w = 1.5 + i as f32 * 0.1;
        let fig = build("#FF0000", w)?;
        let (center, width, height) = beard_geometry(&fig);
        assert_eq!(width, w);
        assert_eq!(height, 2.0);
        assert_eq!(center, [0.0, 0.0]);
    }
    Ok(())
}

#[test]
fn shape_counts_do_not_depend_on_inputs() -> Result<()> {
    let expected = [
        (Part::Boot, 2),
        (Part::Leg, 2),
        (Part::Body, 1),
        (Part::Beard, 1),
        (Part::Arm, 2),
        (Part::HatBase, 1),
        (Part::HatCone, 1),
        (Part::Hand, 2),
        (Part::HatTrim, 1),
        (Part::Pompom, 1),
        (Part::Head, 1),
        (Part::Eye, 2),
        (Part::Nose, 1),
    ];
    for (hex, w) in [("#FF0000", 2.5), ("#00FF00", 1.5), ("#0000FF", 4.0), ("black", 10.0)] {
        let fig = build(hex, w)?;
        for (part, n) in expected {
            assert_eq!(fig.count(part), n, "{part:?} with ({hex}, {w})");
        }
        assert_eq!(fig.shapes().len(), expected.iter().map(|(_, n)| n).sum::<usize>());
    }
    Ok(())
}

#[test]
fn face_always_draws_above_footing() -> Result<()> {
    let fig = build("#FF0000", 2.5)?;
    let footing_max = fig
        .shapes()
        .iter()
        .filter(|s| s.part().is_footing())
        .map(|s| s.layer())
        .max()
        .unwrap();
    let face_min = fig
        .shapes()
        .iter()
        .filter(|s| s.part().is_face())
        .map(|s| s.layer())
        .min()
        .unwrap();
    assert!(face_min > footing_max);

    // Paint order never puts a footing shape after a face shape.
    let order = fig.draw_order();
    let last_footing = order.iter().rposition(|s| s.part().is_footing()).unwrap();
    let first_face = order.iter().position(|s| s.part().is_face()).unwrap();
    assert!(last_footing < first_face);
    Ok(())
}

#[test]
fn scenario_default_red() -> Result<()> {
    let fig = build("#FF0000", 2.5)?;
    assert_eq!(beard_geometry(&fig).1, 2.5);
    assert_colors(&fig, Color::rgb(255, 0, 0));
    Ok(())
}

#[test]
fn scenario_minimum_width_green() -> Result<()> {
    let fig = build("#00FF00", 1.5)?;
    assert_eq!(beard_geometry(&fig).1, 1.5);
    assert_colors(&fig, Color::rgb(0, 255, 0));
    Ok(())
}

#[test]
fn scenario_maximum_width_blue() -> Result<()> {
    let fig = build("#0000FF", 4.0)?;
    assert_eq!(beard_geometry(&fig).1, 4.0);
    assert_colors(&fig, Color::rgb(0, 0, 255));
    Ok(())
}

#[test]
fn building_twice_gives_identical_figures() -> Result<()> {
    let a = build("#00FF00", 3.3)?;
    let b = build("#00FF00", 3.3)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn out_of_range_width_is_accepted() -> Result<()> {
    let fig = build("#FF0000", 9.75)?;
    assert_eq!(beard_geometry(&fig).1, 9.75);
    Ok(())
}
