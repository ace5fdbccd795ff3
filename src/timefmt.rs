//! Time display formatting

/// Format seconds as "M:SS"
///
/// Minutes are unbounded in width; seconds are zero-padded to two digits.
/// `NaN`, infinite, or negative inputs normalize to `0` before formatting,
/// so an unknown duration displays as "0:00" rather than propagating into
/// the UI.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let minutes = (seconds / 60.0).floor();
    let secs = (seconds - minutes * 60.0).floor();
    format!("{}:{:02}", minutes as u64, secs as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(9.0), "0:09");
    }

    #[test]
    fn truncates_fractions() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(60.2), "1:00");
    }

    #[test]
    fn minutes_unbounded() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(6000.0 * 60.0), "6000:00");
    }

    #[test]
    fn nan_and_negative_normalize_to_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-12.0), "0:00");
    }
}
