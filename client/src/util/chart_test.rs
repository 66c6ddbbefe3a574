use super::*;

#[test]
fn nice_max_rounds_up_to_friendly_steps() {
    assert_eq!(nice_max(0.0), 1.0);
    assert_eq!(nice_max(7.0), 10.0);
    assert_eq!(nice_max(12.0), 20.0);
    assert_eq!(nice_max(45.0), 50.0);
    assert_eq!(nice_max(100.0), 100.0);
}

#[test]
fn x_positions_span_plot_area() {
    let plot = Plot::default();
    assert_eq!(plot.x_at(0, 3), plot.left);
    assert_eq!(plot.x_at(2, 3), plot.right_edge());
    assert_eq!(plot.x_at(0, 1), 320.0);
}

#[test]
fn y_positions_are_clamped() {
    let plot = Plot::default();
    assert_eq!(plot.y_at(0.0, 10.0), plot.baseline());
    assert_eq!(plot.y_at(10.0, 10.0), plot.top);
    assert_eq!(plot.y_at(50.0, 10.0), plot.top);
    assert_eq!(plot.y_at(5.0, 0.0), plot.baseline());
}

#[test]
fn polyline_points_are_space_separated_pairs() {
    let plot = Plot { width: 100.0, height: 100.0, left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 };
    assert_eq!(plot.points(&[0.0, 5.0, 10.0], 10.0), "0.0,100.0 50.0,50.0 100.0,0.0");
    assert_eq!(plot.points(&[], 10.0), "");
}

#[test]
fn ticks_and_labels() {
    assert_eq!(ticks(20.0, 4), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(tick_label(5.0), "5");
    assert_eq!(tick_label(2.5), "2.5");
    assert_eq!(label_stride(30, 8), 4);
    assert_eq!(label_stride(5, 8), 1);
    assert_eq!(label_stride(0, 8), 1);
}
