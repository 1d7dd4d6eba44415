use proptest::prelude::*;
use racing_wheel_hid_t80_protocol as t80;

fn report_bytes(steering: u16, gas: u16, brake: u16, b5: u8, b6: u8) -> Vec<u8> {
    let mut data = vec![0u8; t80::T80_REPORT_LEN];
    data[5] = b5;
    data[6] = b6;
    data[43..45].copy_from_slice(&steering.to_le_bytes());
    data[45..47].copy_from_slice(&gas.to_le_bytes());
    data[47..49].copy_from_slice(&brake.to_le_bytes());
    data
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    // ── Steering remap ───────────────────────────────────────────────────────

    #[test]
    fn prop_center_maps_to_midpoint(center in 0u16..=65534) {
        prop_assert_eq!(t80::remap_steering(center, center), t80::STEERING_CENTER_OUT);
    }

    #[test]
    fn prop_extremes_reach_full_range(center in 1u16..=65534) {
        prop_assert_eq!(t80::remap_steering(0, center), 0);
        prop_assert_eq!(t80::remap_steering(65535, center), 65535);
    }

    #[test]
    fn prop_remap_is_monotone(center: u16, a: u16, b: u16) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(t80::remap_steering(lo, center) <= t80::remap_steering(hi, center));
    }

    #[test]
    fn prop_remap_keeps_side_of_center(center in 1u16..=65534, raw: u16) {
        let out = t80::remap_steering(raw, center);
        if raw < center {
            prop_assert!(out <= t80::STEERING_CENTER_OUT);
        } else {
            prop_assert!(out >= t80::STEERING_CENTER_OUT);
        }
    }

    // ── Report framing ───────────────────────────────────────────────────────

    #[test]
    fn prop_short_reports_never_decode(data in proptest::collection::vec(any::<u8>(), 0..t80::T80_REPORT_LEN)) {
        let mut decoder = t80::T80ReportDecoder::default();
        prop_assert!(decoder.decode(&data).is_none());
        prop_assert_eq!(decoder.calibrator().last_raw(), 0);
    }

    #[test]
    fn prop_trailing_bytes_are_ignored(
        steering: u16,
        gas: u16,
        brake: u16,
        extra in proptest::collection::vec(any::<u8>(), 1..32),
    ) {
        let base = report_bytes(steering, gas, brake, 0x08, 0);
        let mut long = base.clone();
        long.extend_from_slice(&extra);

        let short_view = t80::T80RawReport::new(&base).ok_or_else(|| TestCaseError::fail("view"))?;
        let long_view = t80::T80RawReport::new(&long).ok_or_else(|| TestCaseError::fail("view"))?;
        prop_assert_eq!(
            t80::decode_input(&short_view, 32767),
            t80::decode_input(&long_view, 32767)
        );
    }

    #[test]
    fn prop_pedals_pass_through(gas: u16, brake: u16, center: u16) {
        let data = report_bytes(0, gas, brake, 0x08, 0);
        let view = t80::T80RawReport::new(&data).ok_or_else(|| TestCaseError::fail("view"))?;
        let state = t80::decode_input(&view, center);
        prop_assert_eq!(state.gas, gas);
        prop_assert_eq!(state.brake, brake);
    }

    // ── Buttons and hat ──────────────────────────────────────────────────────

    #[test]
    fn prop_button_count_matches_set_bits(b5: u8, b6: u8) {
        let buttons = t80::decode_buttons(b5, b6);
        let expected = (b5 >> 4).count_ones() + b6.count_ones();
        prop_assert_eq!(buttons.bits().count_ones(), expected);
    }

    #[test]
    fn prop_hat_nibble_does_not_affect_buttons(high in 0u8..16, low_a in 0u8..16, low_b in 0u8..16, b6: u8) {
        prop_assert_eq!(
            t80::decode_buttons((high << 4) | low_a, b6),
            t80::decode_buttons((high << 4) | low_b, b6)
        );
    }

    #[test]
    fn prop_hat_neutral_above_seven(value in 8u8..=255) {
        prop_assert_eq!(t80::HatSwitch::from_raw(value), t80::HatSwitch::Neutral);
        prop_assert_eq!(
            t80::HatSwitch::from_raw(value).directions(),
            t80::DpadDirections::NEUTRAL
        );
    }

    #[test]
    fn prop_hat_never_presses_opposite_directions(value: u8) {
        let dirs = t80::HatSwitch::from_raw(value).directions();
        prop_assert!(!(dirs.up && dirs.down));
        prop_assert!(!(dirs.left && dirs.right));
    }

    // ── Driver ───────────────────────────────────────────────────────────────

    #[test]
    fn prop_handled_report_always_emits_full_batch(
        steering: u16,
        gas: u16,
        brake: u16,
        b5: u8,
        b6: u8,
    ) {
        use openracing_hid_common::mock::RecordingInputDevice;
        use openracing_hid_common::{HidDeviceInfo, InputEvent};

        let driver = t80::T80Driver::default();
        let mut dev = RecordingInputDevice::new();
        let info = HidDeviceInfo::new(t80::THRUSTMASTER_VENDOR_ID, t80::product_ids::T80, "/dev/hidraw0");
        let mut wheel = driver
            .configure(&info, &mut dev)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let outcome = wheel
            .raw_event(&report_bytes(steering, gas, brake, b5, b6), Some(&mut dev))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(outcome, t80::RawEventOutcome::Handled);
        prop_assert_eq!(dev.events().len(), 20);
        prop_assert_eq!(dev.events().last(), Some(&InputEvent::Sync));
    }
}
