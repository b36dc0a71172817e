//! Snapshot tests for the text each serializer produces.

use insta::assert_snapshot;
use swatch::{Color, HexCase};

#[test]
fn hsl_of_red() {
    let red = Color::from_u8(255, 0, 0, 255);
    assert_snapshot!(red.to_hsl_string(false), @"hsl(0, 100%, 50%)");
    assert_snapshot!(red.to_hsl_string(true), @"hsla(0, 100%, 50%, 1)");
}

#[test]
fn hsl_rounds_to_whole_units() {
    let color = Color::from_u8(100, 150, 200, 128);
    assert_snapshot!(color.to_hsl_string(false), @"hsl(210, 48%, 59%)");
    assert_snapshot!(color.to_hsl_string(true), @"hsla(210, 48%, 59%, 0.502)");
}

#[test]
fn hsl_of_grays() {
    assert_snapshot!(Color::BLACK.to_hsl_string(false), @"hsl(0, 0%, 0%)");
    assert_snapshot!(Color::WHITE.to_hsl_string(false), @"hsl(0, 0%, 100%)");
}

#[test]
fn rgb_forms() {
    let color = Color::from_u8(255, 87, 51, 64);
    assert_snapshot!(color.to_rgb_string(false), @"rgb(255, 87, 51)");
    assert_snapshot!(color.to_rgb_string(true), @"rgba(255, 87, 51, 0.251)");
    assert_snapshot!(Color::TRANSPARENT.to_rgb_string(true), @"rgba(0, 0, 0, 0)");
}

#[test]
fn hex_forms() {
    let color = Color::from_u8(0x0a, 0xbc, 0xde, 0x80);
    assert_snapshot!(color.to_hex(false), @"#0abcde");
    assert_snapshot!(color.to_hex(true), @"#0abcde80");
    assert_snapshot!(color.to_hex_with(true, HexCase::Upper), @"#0ABCDE80");
}

#[test]
fn display_form() {
    assert_snapshot!(Color::from_u8(1, 2, 3, 255), @"rgb(1, 2, 3)");
    assert_snapshot!(Color::from_u8(1, 2, 3, 51), @"rgba(1, 2, 3, 0.2)");
}
