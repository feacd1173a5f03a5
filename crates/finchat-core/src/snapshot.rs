use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only financial summary for one user, supplied by the
/// financial-data provider. The core only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    pub total_balance: f64,
    pub accounts: Vec<Account>,
    pub savings_goal: f64,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub is_recurring_income: bool,
    pub recurring_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl FinancialSnapshot {
    /// Monthly income derived as the sum of recurring amounts over
    /// accounts flagged as recurring income.
    pub fn monthly_income(&self) -> f64 {
        self.accounts
            .iter()
            .filter(|a| a.is_recurring_income)
            .map(|a| a.recurring_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_income_sums_only_recurring() {
        let snapshot = FinancialSnapshot {
            total_balance: 1000.0,
            accounts: vec![
                Account {
                    is_recurring_income: true,
                    recurring_amount: 500.0,
                },
                Account {
                    is_recurring_income: false,
                    recurring_amount: 900.0,
                },
                Account {
                    is_recurring_income: true,
                    recurring_amount: 250.0,
                },
            ],
            savings_goal: 2000.0,
            expenses: Vec::new(),
        };

        assert_eq!(snapshot.monthly_income(), 750.0);
    }

    #[test]
    fn test_deserializes_provider_document() {
        let doc = r#"{
            "totalBalance": 1000,
            "accounts": [{"isRecurringIncome": true, "recurringAmount": 500}],
            "savingsGoal": 2000,
            "expenses": [{"category": "Food", "amount": 50, "date": "2024-01-01"}]
        }"#;

        let snapshot: FinancialSnapshot = serde_json::from_str(doc).unwrap();
        assert_eq!(snapshot.total_balance, 1000.0);
        assert_eq!(snapshot.expenses[0].category, "Food");
        assert_eq!(
            snapshot.expenses[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let snapshot: FinancialSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.total_balance, 0.0);
        assert!(snapshot.accounts.is_empty());
        assert_eq!(snapshot.monthly_income(), 0.0);
    }
}
