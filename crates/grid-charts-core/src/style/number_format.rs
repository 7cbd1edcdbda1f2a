//! Number formats

/// Number format of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    #[default]
    General,
    /// Format string, e.g. `"$#,##0.00"`
    Custom(String),
}

impl NumberFormat {
    /// Dollar amount with two decimals
    pub const CURRENCY: &'static str = "$#,##0.00";
    /// Dollar amount scaled to millions, negatives in red
    pub const CURRENCY_MILLIONS: &'static str =
        "$ #,##0.00,,\" M\";[Red]-$ #,##0.00,,\" M\"";

    /// The format string as written to a cell
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::Custom(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strings() {
        assert_eq!(NumberFormat::General.format_string(), "General");
        let millions = NumberFormat::Custom(NumberFormat::CURRENCY_MILLIONS.to_string());
        assert!(millions.format_string().contains("[Red]"));
    }
}
