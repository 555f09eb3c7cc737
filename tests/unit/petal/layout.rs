use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn angles(petals: &[PetalSpec]) -> Vec<f64> {
    petals.iter().map(|p| p.angle_degrees).collect()
}

#[test]
fn no_tags_no_petals() {
    let empty: [&str; 0] = [];
    assert!(layout(&empty, 10).is_empty());

    let geo = PetalLayout::default().arrange(&empty, &TagColorAssigner::default());
    assert!(geo.is_empty());
    assert_eq!(geo.span_degrees, 0.0);
}

#[test]
fn single_petal_points_up() {
    let petals = layout(&["a"], 10);
    assert_eq!(petals.len(), 1);
    assert_eq!(petals[0].angle_degrees, 0.0);
}

#[test]
fn three_petals_span_seventy() {
    let petals = layout(&["a", "b", "c"], 10);
    assert_eq!(angles(&petals), vec![-35.0, 0.0, 35.0]);
}

#[test]
fn two_petals_also_span_seventy() {
    assert_eq!(angles(&layout(&["a", "b"], 10)), vec![-35.0, 35.0]);
}

#[test]
fn eleven_tags_truncate_to_ten() {
    let tags = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];
    let geo = PetalLayout::default().arrange(&tags, &TagColorAssigner::default());

    assert_eq!(geo.petals.len(), 10);
    assert_eq!(geo.dropped, 1);
    assert!(geo.petals.iter().all(|p| p.tag != "k"));
    assert_eq!(geo.span_degrees, 245.0);
    assert!(approx(geo.step_degrees, 245.0 / 9.0));
    assert!(approx(geo.petals[0].angle_degrees, -122.5));
    assert!(approx(geo.petals[9].angle_degrees, 122.5));
}

#[test]
fn span_grows_then_caps() {
    let l = PetalLayout::default();
    assert_eq!(l.span_for(4), 95.0);
    assert_eq!(l.span_for(12), 295.0);
    assert_eq!(l.span_for(13), 300.0);
    assert_eq!(l.span_for(40), 300.0);
}

#[test]
fn angles_are_symmetric() {
    let l = PetalLayout::with_max_petals(20);
    for n in 2..20 {
        let a = l.angles(n);
        for i in 0..n {
            assert!(approx(a[i], -a[n - 1 - i]));
        }
        assert!(approx(a[n - 1] - a[0], l.span_for(n)));
    }
}

#[test]
fn ctrl_x_narrows_past_six() {
    let l = PetalLayout::default();
    assert_eq!(l.ctrl_x_for(1), 32.0);
    assert_eq!(l.ctrl_x_for(6), 32.0);
    assert!(approx(l.ctrl_x_for(8), 24.0));
    assert!(approx(l.ctrl_x_for(10), 19.2));
    assert_eq!(l.ctrl_x_for(14), 14.0);
}

#[test]
fn lighten_grows_then_caps() {
    let l = PetalLayout::default();
    assert_eq!(l.lighten_for(1), 12.0);
    assert!(approx(l.lighten_for(10), 17.4));
    assert_eq!(l.lighten_for(15), 20.0);
}

#[test]
fn top_color_is_lightened_base() {
    let geo = PetalLayout::default().arrange(&["climate"], &TagColorAssigner::default());
    let p = &geo.petals[0];
    assert_eq!(p.base_color.to_hex(), "#c2db39");
    assert_eq!(p.top_color.to_hex(), "#d2e46d");

    let geo = PetalLayout::default().arrange(&["climate", "x", "y"], &TagColorAssigner::default());
    assert_eq!(geo.petals[0].top_color.to_hex(), "#d4e572");
}

#[test]
fn output_follows_input_order() {
    let perms = [
        ["ocean", "climate", "soil"],
        ["soil", "ocean", "climate"],
        ["climate", "soil", "ocean"],
    ];
    for tags in perms {
        let petals = layout(&tags, 10);
        let got: Vec<_> = petals.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(got, tags);
    }
}

#[test]
fn colors_do_not_depend_on_position() {
    let a = layout(&["ocean", "climate"], 10);
    let b = layout(&["climate", "ocean"], 10);
    assert_eq!(a[0].base_color, b[1].base_color);
    assert_eq!(a[1].base_color, b[0].base_color);
}

#[test]
fn zero_cap_yields_nothing() {
    let geo = PetalLayout::with_max_petals(0).arrange(&["a", "b"], &TagColorAssigner::default());
    assert!(geo.is_empty());
    assert_eq!(geo.dropped, 2);
}

#[test]
fn validation_rejects_bad_tunables() {
    assert!(PetalLayout::default().validate().is_ok());
    let bad = PetalLayout {
        max_span_deg: f64::NAN,
        ..PetalLayout::default()
    };
    assert!(bad.validate().is_err());
    let bad = PetalLayout {
        max_span_deg: 400.0,
        ..PetalLayout::default()
    };
    assert!(bad.validate().is_err());
}
