//! Market quotes for curve construction.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A single market quote feeding the bootstrap.
///
/// Either a direct rate fixing (used as a zero rate without solving) or
/// a par swap rate (solved for the zero rate that reprices the swap to
/// zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Tenor in years (e.g., 0.5 for 6M, 10.0 for 10Y).
    pub tenor_years: f64,
    /// Quoted rate as a decimal (e.g., 0.0411 for 4.11%).
    pub rate: f64,
    /// True for a direct fixing, false for a par swap rate.
    pub is_fixing: bool,
}

impl MarketQuote {
    /// Creates a direct fixing quote.
    #[must_use]
    pub fn fixing(tenor_years: f64, rate: f64) -> Self {
        Self {
            tenor_years,
            rate,
            is_fixing: true,
        }
    }

    /// Creates a par swap rate quote.
    #[must_use]
    pub fn par_swap(tenor_years: f64, rate: f64) -> Self {
        Self {
            tenor_years,
            rate,
            is_fixing: false,
        }
    }
}

/// Validates a quote set and returns it sorted by ascending tenor.
///
/// A valid set contains exactly one fixing, at least one par swap rate,
/// strictly positive and distinct tenors, and the fixing at the shortest
/// tenor. Input order does not matter; the bootstrap always processes
/// quotes tenor-ascending.
///
/// # Errors
///
/// Returns [`CurveError::InvalidQuotes`] describing the first violation.
pub fn validated_quotes(quotes: &[MarketQuote]) -> CurveResult<Vec<MarketQuote>> {
    if quotes.is_empty() {
        return Err(CurveError::invalid_quotes("no quotes provided"));
    }

    for q in quotes {
        if !q.tenor_years.is_finite() || q.tenor_years <= 0.0 {
            return Err(CurveError::invalid_quotes(format!(
                "tenor must be positive, got {}",
                q.tenor_years
            )));
        }
        if !q.rate.is_finite() {
            return Err(CurveError::invalid_quotes(format!(
                "rate at {}Y is not finite",
                q.tenor_years
            )));
        }
    }

    let fixings = quotes.iter().filter(|q| q.is_fixing).count();
    if fixings != 1 {
        return Err(CurveError::invalid_quotes(format!(
            "expected exactly one fixing, got {fixings}"
        )));
    }
    if quotes.len() < 2 {
        return Err(CurveError::invalid_quotes(
            "need at least one par swap quote besides the fixing",
        ));
    }

    let mut sorted = quotes.to_vec();
    sorted.sort_by(|a, b| a.tenor_years.total_cmp(&b.tenor_years));

    for pair in sorted.windows(2) {
        if (pair[1].tenor_years - pair[0].tenor_years).abs() < 1e-12 {
            return Err(CurveError::invalid_quotes(format!(
                "duplicate tenor {}Y",
                pair[0].tenor_years
            )));
        }
    }

    if !sorted[0].is_fixing {
        return Err(CurveError::invalid_quotes(
            "the fixing must be the shortest tenor",
        ));
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> Vec<MarketQuote> {
        vec![
            MarketQuote::fixing(0.5, 0.0411),
            MarketQuote::par_swap(1.0, 0.0414),
            MarketQuote::par_swap(2.0, 0.0373),
        ]
    }

    #[test]
    fn test_valid_set() {
        let sorted = validated_quotes(&market()).unwrap();
        assert_eq!(sorted.len(), 3);
        assert!(sorted[0].is_fixing);
    }

    #[test]
    fn test_sorts_by_tenor() {
        let mut quotes = market();
        quotes.reverse();

        let sorted = validated_quotes(&quotes).unwrap();
        assert_eq!(sorted[0].tenor_years, 0.5);
        assert_eq!(sorted[2].tenor_years, 2.0);
    }

    #[test]
    fn test_no_fixing_rejected() {
        let quotes = vec![
            MarketQuote::par_swap(1.0, 0.0414),
            MarketQuote::par_swap(2.0, 0.0373),
        ];
        assert!(validated_quotes(&quotes).is_err());
    }

    #[test]
    fn test_two_fixings_rejected() {
        let quotes = vec![
            MarketQuote::fixing(0.5, 0.0411),
            MarketQuote::fixing(1.0, 0.0414),
            MarketQuote::par_swap(2.0, 0.0373),
        ];
        assert!(validated_quotes(&quotes).is_err());
    }

    #[test]
    fn test_fixing_alone_rejected() {
        let quotes = vec![MarketQuote::fixing(0.5, 0.0411)];
        assert!(validated_quotes(&quotes).is_err());
    }

    #[test]
    fn test_duplicate_tenor_rejected() {
        let quotes = vec![
            MarketQuote::fixing(0.5, 0.0411),
            MarketQuote::par_swap(1.0, 0.0414),
            MarketQuote::par_swap(1.0, 0.0415),
        ];
        assert!(validated_quotes(&quotes).is_err());
    }

    #[test]
    fn test_fixing_not_shortest_rejected() {
        let quotes = vec![
            MarketQuote::par_swap(0.25, 0.0410),
            MarketQuote::fixing(0.5, 0.0411),
            MarketQuote::par_swap(1.0, 0.0414),
        ];
        assert!(validated_quotes(&quotes).is_err());
    }

    #[test]
    fn test_negative_tenor_rejected() {
        let quotes = vec![
            MarketQuote::fixing(-0.5, 0.0411),
            MarketQuote::par_swap(1.0, 0.0414),
        ];
        assert!(validated_quotes(&quotes).is_err());
    }
}
