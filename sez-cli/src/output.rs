use std::io::{self, Write};

use sez_core::SezVector;

/// Render a value as the shortest round-trip decimal, `repr`-style:
/// always a fraction or exponent (`10.0`), scientific below 1e-4 and from
/// 1e16 up, exponent signed and at least two digits (`1.5e-05`, `1e+16`).
pub fn format_km(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };

    if (-4..16).contains(&exponent) {
        format!("{value:?}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// Write s, e and z (km) one per line
pub fn write_sez<W: Write>(out: &mut W, sez: &SezVector) -> io::Result<()> {
    for value in [sez.s, sez.e, sez.z] {
        writeln!(out, "{}", format_km(value))?;
    }
    out.flush()
}
