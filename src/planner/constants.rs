/// Number of days planned when none is given.
pub const DEFAULT_DAYS: i64 = 5;

/// Catalog file read when no path is given.
pub const DEFAULT_CATALOG_FILE: &str = "limits.json";

/// Jaro-Winkler similarity at or above which two ingredient names are
/// reported as likely duplicates ("Tomato" / "Tomatoes").
pub const NEAR_DUPLICATE_THRESHOLD: f64 = 0.93;

/// Decimal places shown for tallied amounts.
pub const AMOUNT_DECIMALS: usize = 2;

/// Format an amount, dropping the fraction when it is whole.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.*}", AMOUNT_DECIMALS, amount)
    }
}
