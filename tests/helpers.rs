use server_debugger::clamp;

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
    assert_eq!(clamp(500, 0, 1000), 500);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-7, 0, 1000), 0);
    assert_eq!(clamp(1001, 0, 1000), 1000);
}

#[test]
fn clamp_keeps_bounds_themselves() {
    assert_eq!(clamp(30.0_f32, 30.0, 120.0), 30.0);
    assert_eq!(clamp(120.0_f32, 30.0, 120.0), 120.0);
}
