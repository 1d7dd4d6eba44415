use insta::assert_snapshot;
use openracing_calibration::{CenterCalibrationConfig, CenterCalibrator};
use openracing_hid_common::mock::RecordingInputDevice;
use racing_wheel_hid_t80_protocol as t80;

fn report_bytes(steering: u16, gas: u16, brake: u16, b5: u8, b6: u8) -> [u8; t80::T80_REPORT_LEN] {
    let mut data = [0u8; t80::T80_REPORT_LEN];
    data[5] = b5;
    data[6] = b6;
    data[43..45].copy_from_slice(&steering.to_le_bytes());
    data[45..47].copy_from_slice(&gas.to_le_bytes());
    data[47..49].copy_from_slice(&brake.to_le_bytes());
    data
}

fn dpad_glyphs(dirs: t80::DpadDirections) -> String {
    [(dirs.up, 'U'), (dirs.right, 'R'), (dirs.down, 'D'), (dirs.left, 'L')]
        .iter()
        .map(|(held, c)| if *held { *c } else { '-' })
        .collect()
}

#[test]
fn test_snapshot_rest_report() -> Result<(), Box<dyn std::error::Error>> {
    let data = report_bytes(32767, 0, 0, 0x08, 0x00);
    let view = t80::T80RawReport::new(&data).ok_or("view failed")?;
    let state = t80::decode_input(&view, 32767);
    assert_snapshot!(format!(
        "steering={} raw={} gas={} brake={} buttons={:#06x} hat={:?}",
        state.steering,
        state.steering_raw,
        state.gas,
        state.brake,
        state.buttons.bits(),
        state.hat
    ), @"steering=32768 raw=32767 gas=0 brake=0 buttons=0x0000 hat=Neutral");
    Ok(())
}

#[test]
fn test_snapshot_hat_table() {
    let lines: Vec<String> = (0u8..=8)
        .map(|v| {
            let hat = t80::HatSwitch::from_raw(v);
            format!("{v} {hat:?} {}", dpad_glyphs(hat.directions()))
        })
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    0 Up U---
    1 UpRight UR--
    2 Right -R--
    3 DownRight -RD-
    4 Down --D-
    5 DownLeft --DL
    6 Left ---L
    7 UpLeft U--L
    8 Neutral ----
    ");
}

#[test]
fn test_snapshot_event_stream() -> Result<(), Box<dyn std::error::Error>> {
    let driver = t80::T80Driver::default();
    let mut dev = RecordingInputDevice::new();
    let info = openracing_hid_common::HidDeviceInfo::new(
        t80::THRUSTMASTER_VENDOR_ID,
        t80::product_ids::T80,
        "/dev/hidraw0",
    );
    let mut wheel = driver.configure(&info, &mut dev)?;
    wheel.raw_event(&report_bytes(32767, 1234, 4321, 0x21, 0x81), Some(&mut dev))?;

    let lines: Vec<String> = dev.events().iter().map(|e| format!("{e:?}")).collect();
    assert_snapshot!(lines.join("\n"), @r"
    Abs { axis: X, value: 32768 }
    Abs { axis: Y, value: 1234 }
    Abs { axis: Z, value: 4321 }
    Key { key: DpadUp, pressed: true }
    Key { key: DpadRight, pressed: true }
    Key { key: DpadDown, pressed: false }
    Key { key: DpadLeft, pressed: false }
    Key { key: West, pressed: false }
    Key { key: South, pressed: true }
    Key { key: East, pressed: false }
    Key { key: North, pressed: false }
    Key { key: TL, pressed: true }
    Key { key: TR, pressed: false }
    Key { key: TL2, pressed: false }
    Key { key: TR2, pressed: false }
    Key { key: Select, pressed: false }
    Key { key: Start, pressed: false }
    Key { key: ThumbR, pressed: true }
    Key { key: ThumbL, pressed: false }
    Sync
    ");
    Ok(())
}

#[test]
fn test_snapshot_calibration_progress() -> Result<(), Box<dyn std::error::Error>> {
    let mut calibrator = CenterCalibrator::new(CenterCalibrationConfig {
        target_samples: 3,
        ..CenterCalibrationConfig::default()
    })?;
    let lines: Vec<String> = [40000u16, 40, 41, 39, 42, 500]
        .iter()
        .map(|raw| format!("{raw} -> {:?}", calibrator.observe(*raw)))
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    40000 -> Moving
    40 -> Moving
    41 -> Accumulated { sample_count: 1 }
    39 -> Accumulated { sample_count: 2 }
    42 -> Completed { center: 40 }
    500 -> Inactive
    ");
    Ok(())
}

#[test]
fn test_snapshot_remap_curve_offset_center() {
    let center = 20000u16;
    let lines: Vec<String> = [0u16, 5000, 10000, 19999, 20000, 20001, 42767, 65535]
        .iter()
        .map(|raw| format!("{raw} -> {}", t80::remap_steering(*raw, center)))
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    0 -> 0
    5000 -> 8192
    10000 -> 16384
    19999 -> 32767
    20000 -> 32768
    20001 -> 32768
    42767 -> 49151
    65535 -> 65535
    ");
}
