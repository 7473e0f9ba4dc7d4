use camera_preview::{AspectFitted, Error};

#[test]
fn measures_to_the_envelope_when_no_ratio_is_set() {
    let aspect = AspectFitted::new();

    assert_eq!(aspect.measure(1920, 1080), (1920, 1080));
}

#[test]
fn fits_a_wider_envelope_by_height() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(4, 3).unwrap();

    assert_eq!(aspect.measure(1920, 1080), (1440, 1080));
}

#[test]
fn fits_a_narrow_envelope_by_width() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(16, 9).unwrap();

    // The width-limited branch keeps the ratio's orientation and does not
    // clamp the height back to the envelope.
    assert_eq!(aspect.measure(800, 800), (800, 1422));
}

#[test]
fn truncates_toward_zero_when_the_ratio_does_not_divide_evenly() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(4, 3).unwrap();

    assert_eq!(aspect.measure(100, 50), (66, 50));
}

#[test]
fn rejects_negative_ratio_components() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(4, 3).unwrap();

    assert!(matches!(aspect.set_ratio(-1, 5), Err(Error::InvalidArgument { .. })));
    assert!(matches!(aspect.set_ratio(5, -1), Err(Error::InvalidArgument { .. })));

    // The stored ratio is untouched by a rejected call.
    assert_eq!(aspect.ratio(), (4, 3));
    assert_eq!(aspect.measure(1920, 1080), (1440, 1080));
}

#[test]
fn clears_the_ratio_when_both_components_are_zero() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(16, 9).unwrap();
    aspect.set_ratio(0, 0).unwrap();

    assert_eq!(aspect.measure(500, 400), (500, 400));
}

#[test]
fn a_single_zero_component_also_means_unset() {
    let mut aspect = AspectFitted::new();
    aspect.set_ratio(16, 0).unwrap();

    assert_eq!(aspect.measure(500, 400), (500, 400));

    aspect.set_ratio(0, 9).unwrap();

    assert_eq!(aspect.measure(500, 400), (500, 400));
}

#[test]
fn setting_a_ratio_requests_a_re_measure() {
    let mut aspect = AspectFitted::new();

    assert!(!aspect.take_measure_request());

    aspect.set_ratio(16, 9).unwrap();

    assert!(aspect.take_measure_request());
    assert!(!aspect.take_measure_request());
}

#[test]
fn a_rejected_ratio_does_not_request_a_re_measure() {
    let mut aspect = AspectFitted::new();

    assert!(aspect.set_ratio(-1, 5).is_err());
    assert!(!aspect.take_measure_request());
}

#[test]
fn the_fit_is_maximal_against_one_dimension_of_the_envelope() {
    let ratios = [(1, 1), (4, 3), (3, 4), (16, 9), (9, 16), (21, 9), (1, 100)];
    let envelopes = [(1920, 1080), (1080, 1920), (800, 800), (640, 480), (1, 1), (0, 0)];

    for (ratio_width, ratio_height) in ratios {
        for (available_width, available_height) in envelopes {
            let mut aspect = AspectFitted::new();
            aspect.set_ratio(ratio_width, ratio_height).unwrap();

            let (chosen_width, chosen_height) = aspect.measure(available_width, available_height);

            assert!(
                chosen_width == available_width || chosen_height == available_height,
                "fit ({chosen_width}, {chosen_height}) for {ratio_width}:{ratio_height} \
                 in ({available_width}, {available_height}) is not maximal",
            );
            assert!(chosen_width <= available_width);
        }
    }
}
