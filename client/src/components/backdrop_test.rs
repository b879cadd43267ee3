use super::*;

fn stops(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn aurora_style_scales_duration_by_speed() {
    let style = aurora_style(1.5, &stops(&AURORA_DEFAULT_STOPS));
    assert!(style.contains("--aurora-duration: 8.000s;"), "{style}");
    let style = aurora_style(2.0, &stops(&AURORA_DEFAULT_STOPS));
    assert!(style.contains("--aurora-duration: 6.000s;"), "{style}");
}

#[test]
fn aurora_style_uses_base_cycle_for_bad_speed() {
    for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let style = aurora_style(speed, &stops(&["#000", "#fff"]));
        assert!(style.contains("--aurora-duration: 12.000s;"), "speed {speed}: {style}");
    }
}

#[test]
fn aurora_style_lists_stops_in_order() {
    let style = aurora_style(1.0, &stops(&AURORA_DEFAULT_STOPS));
    assert!(style.contains("linear-gradient(90deg, #d3fa85, #aef129, #d3fa85)"), "{style}");
}

#[test]
fn aurora_style_pads_single_stop() {
    let style = aurora_style(1.0, &stops(&["#123456"]));
    assert!(style.contains("linear-gradient(90deg, #123456, #123456)"), "{style}");
}

#[test]
fn aurora_style_defaults_empty_stops() {
    let style = aurora_style(1.0, &[]);
    assert!(style.contains("#aef129"), "{style}");
}
