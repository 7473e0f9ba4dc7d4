use camera_preview::Viewport;

#[test]
fn centers_the_fitted_rectangle_inside_the_envelope() {
    let viewport = Viewport::new((1440, 1080), (1920, 1080));

    assert_eq!(viewport, Viewport { x: 240, y: 0, width: 1440, height: 1080 });
}

#[test]
fn clamps_an_overshooting_fit_to_the_envelope() {
    // An envelope narrower than the ratio measures taller than the envelope;
    // the viewport crops it back so the GPU accepts it.
    let viewport = Viewport::new((800, 1422), (800, 800));

    assert_eq!(viewport, Viewport { x: 0, y: 0, width: 800, height: 800 });
}

#[test]
fn a_fit_that_fills_the_envelope_has_no_margins() {
    let viewport = Viewport::new((640, 480), (640, 480));

    assert_eq!(viewport, Viewport { x: 0, y: 0, width: 640, height: 480 });
}

#[test]
fn a_zero_sized_envelope_produces_an_empty_viewport() {
    let viewport = Viewport::new((1440, 1080), (0, 0));

    assert!(viewport.is_empty());
}
