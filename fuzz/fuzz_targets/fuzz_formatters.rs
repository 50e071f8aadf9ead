#![no_main]

use cfdi_layout::core::{break_every_n, format_currency};
use cfdi_layout::words::spell_amount;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let width = data.first().map(|b| *b as usize).unwrap_or(0);
        let broken = break_every_n(s, width);
        let chars = s.chars().count();
        let expected = if width == 0 || chars == 0 { 0 } else { (chars - 1) / width };
        assert_eq!(broken.chars().count() - chars, expected);

        if let Ok(amount) = s.trim().parse() {
            // Must not panic; oversized amounts are errors.
            let _ = spell_amount(amount, "MXN");
            let _ = format_currency(Some(amount));
        }
    }
});
