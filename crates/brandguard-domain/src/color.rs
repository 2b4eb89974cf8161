//! Hex colour parsing and WCAG contrast math for the contrast advisory.

/// An sRGB colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let double = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some(Rgb {
                r: double(0)?,
                g: double(1)?,
                b: double(2)?,
            })
        }
        _ => None,
    }
}

/// WCAG 2.x relative luminance, in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// WCAG contrast ratio, in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
