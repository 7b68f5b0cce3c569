// crates/vgaball-cli/src/io/console.rs
//
// Human-readable stdout lines. Not a machine contract.

use std::io::{self, Write};

use vgaball_core::{Frame, Position, Rgb, TickReport};

pub fn hsv_line(f: &Frame) -> String {
    format!(
        "HSV: h={:.2} s={:.2} v={:.2} -> RGB: r={} g={} b={}",
        f.hue, f.saturation, f.value, f.color.r, f.color.g, f.color.b
    )
}

pub fn position_line(p: Position) -> String {
    format!("x: {:04x}, y: {:04x}", p.x, p.y)
}

pub fn background_line(c: Rgb) -> String {
    format!("{:02x} {:02x} {:02x}", c.r, c.g, c.b)
}

/// Two lines per tick; the position line only when the read-back succeeded.
pub fn write_tick<W: Write>(out: &mut W, r: &TickReport) -> io::Result<()> {
    writeln!(out, "{}", hsv_line(&r.frame))?;
    if let Some(p) = r.readback {
        writeln!(out, "{}", position_line(p))?;
    }
    Ok(())
}

/// Parse "r,g,b" (decimal channels).
pub fn parse_rgb(s: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected r,g,b; got {s:?}"));
    };
    let channel = |x: &str| {
        x.parse::<u8>()
            .map_err(|e| format!("bad channel {x:?}: {e}"))
    };
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_accepts_spaces() {
        assert_eq!(parse_rgb("255, 0,16"), Ok(Rgb::new(255, 0, 16)));
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,300").is_err());
    }

    #[test]
    fn lines_use_fixed_width_hex() {
        assert_eq!(position_line(Position::new(0x540, 0x1)), "x: 0540, y: 0001");
        assert_eq!(background_line(Rgb::new(0x4c, 0, 0xff)), "4c 00 ff");
    }
}
