use camera_preview::FilterMode;

#[test]
fn defaults_to_linear_filtering() {
    assert_eq!(FilterMode::default(), FilterMode::Linear);
}

#[test]
fn maps_to_the_wgpu_filter_modes() {
    assert_eq!(FilterMode::Linear.to_wgpu(), wgpu::FilterMode::Linear);
    assert_eq!(FilterMode::Nearest.to_wgpu(), wgpu::FilterMode::Nearest);
}
