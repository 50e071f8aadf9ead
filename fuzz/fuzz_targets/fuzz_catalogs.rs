#![no_main]

use cfdi_layout::core::{Catalog, ReceiptKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = std::str::from_utf8(data) {
        for catalog in Catalog::ALL {
            let described = catalog.describe(code);
            assert_eq!(described.is_empty(), catalog.lookup(code).is_none());
        }
        let _ = ReceiptKind::from_code(code).code();
    }
});
