//! Conversion of EXIF GPS values into decimal degrees

use exif::Value;

/// Convert degrees/minutes/seconds into decimal degrees
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Decode a `GPSLatitude`/`GPSLongitude` value (three rationals) into
/// unsigned decimal degrees
pub fn rational_triple_to_degrees(value: &Value) -> Result<f64, String> {
    let rationals = match value {
        Value::Rational(rationals) => rationals,
        other => return Err(format!("expected RATIONAL values, found {other:?}")),
    };

    let [degrees, minutes, seconds] = rationals.as_slice() else {
        return Err(format!(
            "expected 3 rational components, found {}",
            rationals.len()
        ));
    };

    if [degrees, minutes, seconds].iter().any(|r| r.denom == 0) {
        return Err("rational component has a zero denominator".to_string());
    }

    let decimal = dms_to_decimal(degrees.to_f64(), minutes.to_f64(), seconds.to_f64());
    if decimal.is_finite() {
        Ok(decimal)
    } else {
        Err("coordinate is not a finite number".to_string())
    }
}

/// Resolve a hemisphere reference (`N`/`S`, `E`/`W`) into a sign
pub fn hemisphere_sign(value: &Value, positive: u8, negative: u8) -> Result<f64, String> {
    let letter = match value {
        Value::Ascii(strings) => strings
            .first()
            .and_then(|s| s.first())
            .copied()
            .ok_or_else(|| "reference is empty".to_string())?,
        other => return Err(format!("expected ASCII reference, found {other:?}")),
    };

    match letter.to_ascii_uppercase() {
        l if l == positive => Ok(1.0),
        l if l == negative => Ok(-1.0),
        l => Err(format!(
            "unexpected reference '{}', expected '{}' or '{}'",
            l as char, positive as char, negative as char
        )),
    }
}
