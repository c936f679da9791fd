#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate("🍔🚗🛍🎬", 3), "🍔🚗…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "₹1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "₹0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-150)), "-₹150.00");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "₹12,34,567.89");
}

#[test]
fn test_format_amount_lakh_and_crore_groups() {
    assert_eq!(format_amount(dec!(100000)), "₹1,00,000.00");
    assert_eq!(format_amount(dec!(12345678)), "₹1,23,45,678.00");
    assert_eq!(format_amount(dec!(999)), "₹999.00");
    assert_eq!(format_amount(dec!(-1000)), "-₹1,000.00");
}

// ── format_whole ──────────────────────────────────────────────

#[test]
fn test_format_whole() {
    assert_eq!(format_whole(dec!(123456.7)), "₹1,23,457");
    assert_eq!(format_whole(dec!(0.4)), "₹0");
    assert_eq!(format_whole(dec!(-2500)), "-₹2,500");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "₹1.50");
}

#[test]
fn test_format_amount_rounds() {
    assert_eq!(format_amount(dec!(2.499)), "₹2.50");
}

// ── format_signed ─────────────────────────────────────────────

#[test]
fn test_format_signed() {
    assert_eq!(format_signed(dec!(50)), "+₹50.00");
    assert_eq!(format_signed(dec!(-12.5)), "-₹12.50");
}

// ── capitalize ────────────────────────────────────────────────

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("food"), "Food");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("Other"), "Other");
}
