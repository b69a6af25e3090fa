#![no_main]

use bez_path::{parse_path, write_path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Jeder erfolgreich geparste Pfad muss den Round-Trip überstehen
    if let Ok(path) = parse_path(text) {
        let written = write_path(&path);
        let reparsed = parse_path(&written).expect("geschriebener Pfad muss parsebar sein");
        assert_eq!(reparsed, path);
    }
});
