#![no_main]

use bezier_path::parse_spline;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut spline) = parse_spline(json) else {
        return;
    };

    // Gültig geladene Splines müssen sich ohne Panic auswerten lassen
    let _ = spline.position_normalized(0.5);
    let _ = spline.velocity(1.0);
    let _ = spline.calc_bounding_box();
    let _ = spline.distribute(4);
});
