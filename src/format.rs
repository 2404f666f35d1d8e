use std::time::Duration;
use std::fmt::Display;

pub struct FormattedDuration(pub Duration);

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.as_secs();
        let m = s / 60;
        let h = m / 60;
        let d = h / 24;
        let ms = self.0.subsec_millis();
        match (d, h % 24, m % 60, s % 60) {
            (0, 0, 0, 0) => write!(f, "{:.3}ms", self.0.subsec_micros() as f64 / 1000.0),
            (0, 0, 0, s) => write!(f, "{s}.{ms:03}s"),
            (0, 0, m, s) => write!(f, "{m}m {s}.{ms:03}s"),
            (0, h, m, s) => write!(f, "{h}h {m}m {s}.{ms:03}s"),
            (d, h, m, s) => write!(f, "{d}d {h}h {m}m {s}.{ms:03}s"),
        }?;
        Ok(())
    }
}
