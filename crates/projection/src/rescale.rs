//! Linear rescaling between coordinate ranges.

use wx_common::{FieldError, FieldResult};

/// Map `value` from `[domain_lo, domain_hi]` onto `[0, range_len]`.
///
/// Values outside the domain extrapolate linearly. A zero-width domain is an
/// error rather than a silent NaN or infinity.
pub fn rescale(value: f64, domain_lo: f64, domain_hi: f64, range_len: f64) -> FieldResult<f64> {
    let span = domain_hi - domain_lo;
    if span == 0.0 || !span.is_finite() {
        return Err(FieldError::domain(format!(
            "cannot rescale over domain [{}, {}]",
            domain_lo, domain_hi
        )));
    }
    Ok((value - domain_lo) / span * range_len)
}
