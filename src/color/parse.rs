/// Parsed color channels in `[0, 255]`, kept in floating point so interpolation never rounds
/// early.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Parse a color stop string into its channel triple.
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)`,
/// `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`. Alpha components are validated but not part of
/// the triple; stop alpha is supplied separately at evaluation time.
pub fn parse_color(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    let Some(open) = lower.find('(') else {
        return Err(format!("unrecognized color \"{s}\""));
    };
    let Some(inner) = lower[open + 1..].strip_suffix(')') else {
        return Err(format!("unterminated color function \"{s}\""));
    };
    let func = lower[..open].trim();
    let args: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|a| !a.is_empty())
        .collect();

    match func {
        "rgb" | "rgba" => parse_rgb_fn(&args, s),
        "hsl" | "hsla" => parse_hsl_fn(&args, s),
        _ => Err(format!("unknown color function \"{func}\"")),
    }
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color \"#{s}\""));
    }

    let (r, g, b) = match s.len() {
        3 | 4 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            if s.len() == 4 {
                nib(3)?;
            }
            (nib(0)?, nib(1)?, nib(2)?)
        }
        6 | 8 => {
            if s.len() == 8 {
                hex_byte(&s[6..8])?;
            }
            (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?)
        }
        _ => {
            return Err(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)"
                    .to_owned(),
            );
        }
    };

    Ok(Rgb::new(f64::from(r), f64::from(g), f64::from(b)))
}

fn number(arg: &str) -> Result<f64, String> {
    let v: f64 = arg
        .parse()
        .map_err(|_| format!("invalid color component \"{arg}\""))?;
    if !v.is_finite() {
        return Err(format!("non-finite color component \"{arg}\""));
    }
    Ok(v)
}

/// A `0..=255` channel, or a percentage of 255.
fn channel(arg: &str) -> Result<f64, String> {
    match arg.strip_suffix('%') {
        Some(pct) => Ok((number(pct)? / 100.0 * 255.0).clamp(0.0, 255.0)),
        None => Ok(number(arg)?.clamp(0.0, 255.0)),
    }
}

/// A `0..=1` fraction, or a percentage.
fn fraction(arg: &str) -> Result<f64, String> {
    match arg.strip_suffix('%') {
        Some(pct) => Ok((number(pct)? / 100.0).clamp(0.0, 1.0)),
        None => Ok(number(arg)?.clamp(0.0, 1.0)),
    }
}

fn check_arity(args: &[&str], original: &str) -> Result<(), String> {
    if args.len() == 3 || args.len() == 4 {
        Ok(())
    } else {
        Err(format!(
            "color function \"{original}\" must have 3 or 4 components"
        ))
    }
}

fn parse_rgb_fn(args: &[&str], original: &str) -> Result<Rgb, String> {
    check_arity(args, original)?;
    if let Some(a) = args.get(3) {
        fraction(a)?;
    }
    Ok(Rgb::new(
        channel(args[0])?,
        channel(args[1])?,
        channel(args[2])?,
    ))
}

fn parse_hsl_fn(args: &[&str], original: &str) -> Result<Rgb, String> {
    check_arity(args, original)?;
    if let Some(a) = args.get(3) {
        fraction(a)?;
    }
    let h = number(args[0].trim_end_matches("deg"))?;
    let s = fraction(args[1])?;
    let l = fraction(args[2])?;
    Ok(hsl_to_rgb(h, s, l))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
