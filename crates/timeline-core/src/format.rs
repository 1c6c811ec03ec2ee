// File: crates/timeline-core/src/format.rs
// Summary: Number and date label formatting shared by axis ticks and tooltips.

use chrono::NaiveDateTime;

/// Default date label format for axis ticks and tooltip headers.
pub const DEFAULT_LABEL_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Fixed decimals; `None` means up to two, trailing zeros trimmed.
    pub decimals: Option<usize>,
    /// Group thousands with `,`.
    pub grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self { Self { decimals: None, grouping: true } }
}

impl NumberFormat {
    pub fn fixed(decimals: usize) -> Self { Self { decimals: Some(decimals), grouping: true } }

    pub fn format(&self, v: f64) -> String {
        if !v.is_finite() {
            return v.to_string();
        }
        let mut s = match self.decimals {
            Some(d) => format!("{v:.d$}"),
            None => {
                let s = format!("{v:.2}");
                if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.').to_string() } else { s }
            }
        };
        // negative zero after rounding
        if s.starts_with('-') && s.chars().all(|c| matches!(c, '-' | '0' | '.')) {
            s.remove(0);
        }
        if self.grouping { group_thousands(&s) } else { s }
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = s.strip_prefix('-').map_or(("", s), |r| ("-", r));
    let (int, frac) = rest.split_once('.').map_or((rest, None), |(i, f)| (i, Some(f)));
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

pub fn format_date(t: NaiveDateTime, fmt: &str) -> String { t.format(fmt).to_string() }
