//! Property-based tests for the field formatters and catalogs.
//!
//! Run with: `cargo test --test proptest_tests`

use cfdi_layout::core::*;
use cfdi_layout::layout::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn currency_has_two_decimals(amount in arb_amount()) {
        let formatted = format_currency(amount);
        let (_, frac) = formatted.rsplit_once('.').unwrap();
        prop_assert_eq!(frac.len(), 2);
    }

    #[test]
    fn currency_grouping_round_trips(amount in arb_amount()) {
        let formatted = format_currency(amount);
        let digits: String = formatted.chars().filter(|c| *c != ',').collect();
        let parsed: Decimal = digits.parse().unwrap();
        let expected = amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn currency_groups_have_three_digits(amount in arb_amount()) {
        let formatted = format_currency(amount);
        let int_part = formatted.trim_start_matches('-').split('.').next().unwrap();
        let groups: Vec<&str> = int_part.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn break_preserves_content(value in "[A-Za-z0-9+/=ñ|]{0,400}", n in 1usize..120) {
        let broken = break_every_n(&value, n);
        let rejoined: String = broken.chars().filter(|c| *c != '\n').collect();
        prop_assert_eq!(&rejoined, &value);

        let lines: Vec<&str> = broken.split('\n').collect();
        for line in &lines {
            prop_assert!(line.chars().count() <= n);
        }
        let chars = value.chars().count();
        let expected_breaks = if chars == 0 { 0 } else { (chars - 1) / n };
        prop_assert_eq!(lines.len() - 1, expected_breaks);
    }

    #[test]
    fn describe_is_total(code in "[A-Z0-9]{0,5}") {
        for catalog in Catalog::ALL {
            let described = catalog.describe(&code);
            match catalog.lookup(&code) {
                Some(desc) => prop_assert_eq!(described, format!("{code} - {desc}")),
                None => prop_assert_eq!(described, ""),
            }
        }
    }

    #[test]
    fn receipt_kind_ignores_case(code in "[iIeEpPtTnN]") {
        let kind = ReceiptKind::from_code(&code);
        prop_assert!(!matches!(kind, ReceiptKind::Unrecognized(_)));
        prop_assert_eq!(kind.code(), code.to_ascii_uppercase());
    }

    #[test]
    fn rows_are_padded_to_width(width in 1usize..12, filled in 0usize..12, span in 1usize..4) {
        let filled = filled.min(width.saturating_sub(span));
        let mut row = RowBuilder::new(width);
        for i in 0..filled {
            row = row.cell(i.to_string());
        }
        let row = row.span(Block::text("x"), span.min(width - filled)).build();
        prop_assert_eq!(row.len(), width);
    }
}
