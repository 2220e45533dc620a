//! ANSI escape sequence generation.
//!
//! Builds SGR (Select Graphic Rendition) sequences for styled render units.
//! Decimal components are pushed byte by byte instead of going through
//! `format!`, keeping the per-row render path allocation-light.

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette; colors quantize through the 6x6x6 cube.
    Palette256,
}

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Push a u8 as decimal digits without formatting overhead.
#[inline]
fn push_u8_decimal(buf: &mut String, n: u8) {
    if n >= 100 {
        buf.push((b'0' + n / 100) as char);
        buf.push((b'0' + (n / 10) % 10) as char);
        buf.push((b'0' + n % 10) as char);
    } else if n >= 10 {
        buf.push((b'0' + n / 10) as char);
        buf.push((b'0' + n % 10) as char);
    } else {
        buf.push((b'0' + n) as char);
    }
}

/// Append the SGR sequence for a foreground color.
pub fn push_fg(buf: &mut String, color: Rgba, mode: ColorMode) {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            buf.push_str("\x1b[38;2;");
            push_u8_decimal(buf, r);
            buf.push(';');
            push_u8_decimal(buf, g);
            buf.push(';');
            push_u8_decimal(buf, b);
            buf.push('m');
        }
        ColorMode::Palette256 => {
            buf.push_str("\x1b[38;5;");
            push_u8_decimal(buf, color.to_256_color());
            buf.push('m');
        }
    }
}

/// Append the SGR sequence for a background color.
pub fn push_bg(buf: &mut String, color: Rgba, mode: ColorMode) {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            buf.push_str("\x1b[48;2;");
            push_u8_decimal(buf, r);
            buf.push(';');
            push_u8_decimal(buf, g);
            buf.push(';');
            push_u8_decimal(buf, b);
            buf.push('m');
        }
        ColorMode::Palette256 => {
            buf.push_str("\x1b[48;5;");
            push_u8_decimal(buf, color.to_256_color());
            buf.push('m');
        }
    }
}

/// Append the SGR sequence for text attributes. No-op for empty attributes.
pub fn push_attributes(buf: &mut String, attrs: TextAttributes) {
    // Max 6 attribute codes possible.
    let mut codes: [&str; 6] = [""; 6];
    let mut count = 0;

    if attrs.contains(TextAttributes::BOLD) {
        codes[count] = "1";
        count += 1;
    }
    if attrs.contains(TextAttributes::DIM) {
        codes[count] = "2";
        count += 1;
    }
    if attrs.contains(TextAttributes::ITALIC) {
        codes[count] = "3";
        count += 1;
    }
    if attrs.contains(TextAttributes::UNDERLINE) {
        codes[count] = "4";
        count += 1;
    }
    if attrs.contains(TextAttributes::INVERSE) {
        codes[count] = "7";
        count += 1;
    }
    if attrs.contains(TextAttributes::STRIKETHROUGH) {
        codes[count] = "9";
        count += 1;
    }

    if count > 0 {
        buf.push_str("\x1b[");
        for (i, code) in codes[..count].iter().enumerate() {
            if i > 0 {
                buf.push(';');
            }
            buf.push_str(code);
        }
        buf.push('m');
    }
}

/// Append the full SGR prelude for a style: attributes, then colors.
pub fn push_style(buf: &mut String, style: Style, mode: ColorMode) {
    push_attributes(buf, style.attributes);
    if let Some(fg) = style.fg {
        push_fg(buf, fg, mode);
    }
    if let Some(bg) = style.bg {
        push_bg(buf, bg, mode);
    }
}

/// Generate the SGR prelude for a style as a standalone string.
#[must_use]
pub fn style_sgr(style: Style, mode: ColorMode) -> String {
    let mut buf = String::new();
    push_style(&mut buf, style, mode);
    buf
}
