use proptest::prelude::*;
use scatter_rs::core::{
    Margin, PlotArea, Viewport, project_markers, x_scale_from_records, y_scale_from_records,
};
use scatter_rs::data::StateRecord;

fn records_from_pairs(pairs: &[(f64, f64)]) -> Vec<StateRecord> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, (poverty, healthcare))| {
            StateRecord::new(format!("State {index}"), format!("S{index}"), *poverty, *healthcare)
        })
        .collect()
}

proptest! {
    #[test]
    fn marker_x_is_monotone_in_poverty(
        mut poverty_values in proptest::collection::vec(0.1f64..90.0, 2..40),
        healthcare in 0.5f64..40.0
    ) {
        poverty_values.sort_by(f64::total_cmp);
        poverty_values.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
        prop_assume!(poverty_values.len() >= 2);

        let pairs: Vec<(f64, f64)> =
            poverty_values.iter().map(|p| (*p, healthcare)).collect();
        let records = records_from_pairs(&pairs);

        let plot = PlotArea::from_viewport(Viewport::new(960, 540), Margin::default())
            .expect("plot area");
        let x_scale = x_scale_from_records(&records, plot).expect("x scale");
        let y_scale = y_scale_from_records(&records, plot).expect("y scale");
        let markers = project_markers(&records, x_scale, y_scale, 15.0).expect("markers");

        for pair in markers.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn x_scale_round_trips_arbitrary_values(
        low in 0.1f64..40.0,
        span in 1.0f64..50.0,
        fraction in 0.0f64..1.0
    ) {
        let pairs = [(low, 10.0), (low + span, 12.0)];
        let records = records_from_pairs(&pairs);
        let plot = PlotArea::from_viewport(Viewport::new(960, 540), Margin::default())
            .expect("plot area");
        let scale = x_scale_from_records(&records, plot).expect("x scale");

        let (domain_start, domain_end) = scale.domain();
        let value = domain_start + (domain_end - domain_start) * fraction;
        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn markers_stay_inside_the_horizontal_plot_band(
        pairs in proptest::collection::vec((0.1f64..90.0, 0.5f64..40.0), 1..40)
    ) {
        let records = records_from_pairs(&pairs);
        let plot = PlotArea::from_viewport(Viewport::new(960, 540), Margin::default())
            .expect("plot area");
        let x_scale = x_scale_from_records(&records, plot).expect("x scale");
        let y_scale = y_scale_from_records(&records, plot).expect("y scale");
        let markers = project_markers(&records, x_scale, y_scale, 15.0).expect("markers");

        for marker in &markers {
            prop_assert!(marker.x >= -1e-9);
            prop_assert!(marker.x <= plot.width + 1e-9);
        }
    }
}
