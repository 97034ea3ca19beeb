//! Formatting helpers for presenting run metrics.

/// Kilometres with the feed's three-decimal display precision.
pub fn format_km(meters: f64) -> String {
    if !meters.is_finite() {
        return "—".to_string();
    }
    format!("{:.3}", meters / 1000.0)
}

/// Minutes-per-kilometre pace in the `6'40"` style.
pub fn format_pace(speed_mps: f64) -> String {
    if !speed_mps.is_finite() || speed_mps <= 0.0 {
        return "—".to_string();
    }
    let pace_min = (1000.0 / 60.0) / speed_mps;
    let minutes = pace_min.floor();
    let seconds = ((pace_min - minutes) * 60.0).floor();
    format!("{minutes:.0}'{seconds:02.0}\"")
}

/// Elapsed seconds as `h:mm:ss`, or `m:ss` under an hour.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "—".to_string();
    }
    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Whole-number heart rate with its unit.
pub fn format_bpm(bpm: f64) -> String {
    if !bpm.is_finite() {
        return "—".to_string();
    }
    format!("{bpm:.0} bpm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn km_keeps_three_decimals() {
        assert_eq!(format_km(6000.0), "6.000");
        assert_eq!(format_km(10432.1), "10.432");
        assert_eq!(format_km(0.0), "0.000");
    }

    #[test]
    fn km_degrades_on_non_finite() {
        assert_eq!(format_km(f64::NAN), "—");
        assert_eq!(format_km(f64::INFINITY), "—");
    }

    #[test]
    fn pace_formats_minutes_and_padded_seconds() {
        // 2.5 m/s is 6:40 per kilometre.
        assert_eq!(format_pace(2.5), "6'40\"");
        assert_eq!(format_pace(2.0), "8'20\"");
        // 305 s/km pads the seconds to two digits.
        assert_eq!(format_pace(1000.0 / 305.0), "5'05\"");
    }

    #[test]
    fn pace_degrades_on_zero_or_bad_speed() {
        assert_eq!(format_pace(0.0), "—");
        assert_eq!(format_pace(-1.0), "—");
        assert_eq!(format_pace(f64::NAN), "—");
        assert_eq!(format_pace(f64::INFINITY), "—");
    }

    #[test]
    fn duration_switches_layout_at_an_hour() {
        assert_eq!(format_duration(2400.0), "40:00");
        assert_eq!(format_duration(59.0), "0:59");
        assert_eq!(format_duration(3600.0), "1:00:00");
        assert_eq!(format_duration(3723.0), "1:02:03");
    }

    #[test]
    fn duration_degrades_on_non_finite_or_negative() {
        assert_eq!(format_duration(f64::INFINITY), "—");
        assert_eq!(format_duration(f64::NAN), "—");
        assert_eq!(format_duration(-5.0), "—");
    }

    #[test]
    fn bpm_rounds_to_whole_beats() {
        assert_eq!(format_bpm(159.6), "160 bpm");
        assert_eq!(format_bpm(150.0), "150 bpm");
        assert_eq!(format_bpm(f64::NAN), "—");
    }
}
