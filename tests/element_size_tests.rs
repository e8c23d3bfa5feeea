use candle_chart::core::ElementSize;

#[test]
fn presets_carry_spacing_and_width() {
    let table: Vec<(f64, f64)> = ElementSize::ALL
        .iter()
        .map(|size| (size.spacing_px(), size.width_px()))
        .collect();
    assert_eq!(table, vec![(4.0, 3.0), (8.0, 5.0), (16.0, 11.0), (32.0, 19.0)]);
}

#[test]
fn index_lookup_round_trips() {
    for size in ElementSize::ALL {
        assert_eq!(ElementSize::from_index(size.index()), Some(size));
    }
    assert_eq!(ElementSize::from_index(0), None);
    assert_eq!(ElementSize::from_index(5), None);
}

#[test]
fn zoom_steps_and_saturates() {
    assert_eq!(ElementSize::Small.zoomed_in(), ElementSize::Large);
    assert_eq!(ElementSize::VeryLarge.zoomed_in(), ElementSize::VeryLarge);
    assert_eq!(ElementSize::Small.zoomed_out(), ElementSize::VerySmall);
    assert_eq!(ElementSize::VerySmall.zoomed_out(), ElementSize::VerySmall);
}

#[test]
fn default_preset_is_small() {
    assert_eq!(ElementSize::default(), ElementSize::Small);
}
