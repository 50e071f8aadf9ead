#![no_main]

use cfdi_layout::content::sections;
use cfdi_layout::core::Cfdi;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any record that deserializes must lay out without panicking.
    if let Ok(cfdi) = serde_json::from_slice::<Cfdi>(data) {
        let _ = sections::header(&cfdi, Some("logo"));
        let _ = sections::issuer(&cfdi);
        let _ = sections::recipient(&cfdi, None);
        let _ = sections::general_data(&cfdi);
        let _ = sections::concepts(&cfdi);
        let _ = sections::related_and_totals(&cfdi, "");
        let _ = sections::payments(&cfdi);
        let _ = sections::stamp(&cfdi, &cfdi.original_chain);
    }
});
