//! Display helpers for statistics counters.

/// `"3500.50 km"`; zero renders as `"0.00 km"`.
pub fn distance(km: f64) -> String {
    format!("{km:.2} km")
}

/// Minutes as `"H:MM"`, e.g. `21600` becomes `"360:00"`.
pub fn duration(total_minutes: i32) -> String {
    let total_minutes = total_minutes.max(0);
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Metres rounded to a whole number, e.g. `"85000 m"`.
pub fn elevation(metres: f64) -> String {
    format!("{} m", metres.round() as i64)
}

/// Minutes per kilometre as `"M:SS /km"`. Seconds that round up to 60 carry
/// into the minutes.
pub fn pace(minutes_per_km: f64) -> String {
    if !minutes_per_km.is_finite() || minutes_per_km <= 0.0 {
        return "0:00 /km".to_string();
    }

    let mut minutes = minutes_per_km.floor() as i64;
    let mut seconds = ((minutes_per_km - minutes as f64) * 60.0).round() as i64;
    if seconds >= 60 {
        minutes += seconds / 60;
        seconds %= 60;
    }
    format!("{minutes}:{seconds:02} /km")
}

/// Average pace over a total distance and moving time.
pub fn average_pace(km: f64, total_minutes: i32) -> String {
    if km <= 0.0 || total_minutes <= 0 {
        return pace(0.0);
    }
    pace(f64::from(total_minutes) / km)
}

/// Integer with comma thousands separators, e.g. `"25,000"`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
