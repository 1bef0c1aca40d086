#![no_main]
use auracle_id::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = validate(&String::from_utf8_lossy(data));
});
