#![no_main]

use libfuzzer_sys::fuzz_target;
use kpl_syntax::config::ScanConfig;
use kpl_syntax::source::CharSource;
use kpl_syntax::trace::Discard;
use kpl_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Raw bytes go straight in; the scanner has no UTF-8 requirement
    let config = ScanConfig::default();
    let _ = lexer::scan_all(CharSource::from_bytes(data), &config);
    let _ = parser::check_source(CharSource::from_bytes(data), &config, &mut Discard);
});
