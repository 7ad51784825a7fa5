use serde::{Deserialize, Serialize};

/// Figures shown on the home dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub imported_carpets: u64,
    pub exported_carpets: u64,
    pub workers: u64,
    pub staff: u64,
    pub active_agreements: u64,
    pub total_income: f64,
    pub total_expenditure: f64,
    /// `total_income - total_expenditure`
    pub balance: f64,
    /// Unpaid part of all salaries
    pub salaries_remainder: f64,
}

impl SummaryResponse {
    pub fn with_balance(mut self) -> Self {
        self.balance = self.total_income - self.total_expenditure;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance() {
        let summary = SummaryResponse {
            total_income: 12000.0,
            total_expenditure: 15500.0,
            ..Default::default()
        }
        .with_balance();
        assert_eq!(summary.balance, -3500.0);
    }
}
