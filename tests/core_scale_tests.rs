use scatter_rs::core::{LinearScale, Margin, PlotArea, Viewport};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    let epsilon = 1e-9;
    assert!((recovered - original).abs() <= epsilon);
}

#[test]
fn inverted_range_maps_domain_max_to_range_top() {
    let scale = LinearScale::new(0.0, 25.0, 420.0, 0.0).expect("valid scale");

    let top = scale.value_to_pixel(25.0).expect("top pixel");
    let bottom = scale.value_to_pixel(0.0).expect("bottom pixel");

    assert_eq!(top, 0.0);
    assert_eq!(bottom, 420.0);
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(f64::NAN, 5.0, 0.0, 100.0).is_err());
}

#[test]
fn degenerate_range_is_rejected() {
    assert!(LinearScale::new(0.0, 10.0, 50.0, 50.0).is_err());
    assert!(LinearScale::new(0.0, 10.0, 0.0, f64::INFINITY).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.value_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_value(f64::INFINITY).is_err());
}

#[test]
fn plot_area_subtracts_margins() {
    let plot = PlotArea::from_viewport(Viewport::new(960, 540), Margin::default())
        .expect("valid plot area");

    assert_eq!(plot.left, 120.0);
    assert_eq!(plot.top, 20.0);
    assert_eq!(plot.width, 960.0 - 120.0 - 40.0);
    assert_eq!(plot.height, 540.0 - 20.0 - 60.0);
    assert_eq!(plot.right(), 920.0);
    assert_eq!(plot.bottom(), 480.0);
}

#[test]
fn oversized_margins_are_rejected() {
    let margin = Margin {
        top: 300.0,
        right: 40.0,
        bottom: 300.0,
        left: 120.0,
    };
    assert!(PlotArea::from_viewport(Viewport::new(960, 540), margin).is_err());
}

#[test]
fn zero_viewport_is_rejected() {
    assert!(PlotArea::from_viewport(Viewport::new(0, 540), Margin::default()).is_err());
}
