use crate::error::LinkError;

/// Parses the raw value of the cycle-rate control.
///
/// The control is a stepped range input so well-formed values are the norm,
/// but anything that isn't a positive integer is rejected rather than
/// forwarded; the runtime's timing depends on it.
pub fn parse_cycle_rate(raw: &str) -> Result<u32, LinkError> {
    let trimmed = raw.trim();
    let rate: i64 = trimmed
        .parse()
        .map_err(|_| LinkError::InvalidCycleRate(raw.to_string()))?;

    if rate <= 0 {
        return Err(LinkError::NonPositiveCycleRate(rate));
    }
    u32::try_from(rate).map_err(|_| LinkError::InvalidCycleRate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_rates() {
        assert_eq!(parse_cycle_rate("60"), Ok(60));
        assert_eq!(parse_cycle_rate(" 700 "), Ok(700));
        assert_eq!(parse_cycle_rate("+5"), Ok(5));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            parse_cycle_rate("abc"),
            Err(LinkError::InvalidCycleRate("abc".into()))
        );
        assert!(parse_cycle_rate("").is_err());
        assert!(parse_cycle_rate("12.5").is_err());
        assert!(parse_cycle_rate("NaN").is_err());
        assert!(parse_cycle_rate("99999999999").is_err());
    }

    #[test]
    fn test_parse_non_positive() {
        assert_eq!(parse_cycle_rate("0"), Err(LinkError::NonPositiveCycleRate(0)));
        assert_eq!(parse_cycle_rate("-3"), Err(LinkError::NonPositiveCycleRate(-3)));
    }
}
