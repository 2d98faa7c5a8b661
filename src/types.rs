use crate::error::{ReportError, ReportResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Neg, Sub};

//==============================================================================
// Currency amounts
//==============================================================================

/// Significant digits kept when a spreadsheet float becomes an [`Amount`].
pub const SIGNIFICANT_DIGITS: u32 = 7;

/// Fraction digits shown when an amount is printed.
pub const DISPLAY_SCALE: u32 = 2;

/// An exact decimal currency amount.
///
/// Every amount read from a sheet goes through [`Amount::from_cell`], so all
/// fields share one precision policy. Arithmetic never touches `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Convert a numeric cell value.
    ///
    /// Takes the shortest decimal that round-trips the float, then keeps
    /// [`SIGNIFICANT_DIGITS`] digits with banker's rounding.
    pub fn from_cell(value: f64) -> ReportResult<Self> {
        let exact = Decimal::from_f64(value).ok_or(ReportError::InvalidAmount { value })?;
        if exact.is_zero() {
            return Ok(Self::ZERO);
        }
        let rounded = exact
            .round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointNearestEven)
            .unwrap_or(exact);
        Ok(Self(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

/// Always two fraction digits, half away from zero. Honors width and alignment.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cents = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(DISPLAY_SCALE);
        if cents.is_zero() {
            // Avoid printing "-0.00" for tiny negative remainders
            cents = Decimal::new(0, DISPLAY_SCALE);
        }
        f.pad(&cents.to_string())
    }
}

//==============================================================================
// Daily report
//==============================================================================

/// Figures for one business day, all read from the same day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    /// Day label exactly as the workbook stores it
    pub date: String,
    pub tips: Amount,
    pub sales_tax: Amount,
    pub retail: Amount,
    pub total: Amount,
    pub amex: Amount,
    pub discover: Amount,
    pub cash: Amount,
}

impl DailyReport {
    /// Amount that lands in the bank: `total - amex - cash`.
    pub fn bank_deposit(&self) -> Amount {
        self.total - self.amex - self.cash
    }

    /// Service revenue: `bank_deposit - retail - sales_tax - tips`.
    pub fn service(&self) -> Amount {
        self.bank_deposit() - self.retail - self.sales_tax - self.tips
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, tips: ${}, tax: ${}, retail: ${}, BoA: ${}, Amex: ${}",
            self.date,
            self.tips,
            self.sales_tax,
            self.retail,
            self.bank_deposit(),
            self.amex
        )
    }
}
