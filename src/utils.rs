use anyhow::{Result, bail};
use std::{fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }

    Ok(())
}

pub fn check_text(text: &str, max_len: usize) -> Result<()> {
    let len = text.chars().count();
    if text.trim().is_empty() {
        bail!("text must not be blank");
    }
    if len > max_len {
        bail!("text must be at most {max_len} characters, but is {len}");
    }

    Ok(())
}

/// `num / den` rounded to one decimal place, half away from zero.
///
/// Rounds the exact quotient, so `3 / 20` gives `0.2` regardless of how
/// `0.15` is represented in binary.
pub fn round_ratio(num: i64, den: usize) -> f64 {
    if den == 0 {
        return 0.0;
    }
    let num = i128::from(num) * 10;
    let den = den as i128;
    let tenths = (2 * num.abs() + den) / (2 * den);
    let tenths = if num < 0 { -tenths } else { tenths };
    tenths as f64 / 10.0
}
