use crate::message::Message;
use crate::snapshot::FinancialSnapshot;

/// How many expenses / transcript entries make it into the prompt.
/// Bounds prompt size as the transcript grows; older context adds little.
const RECENT_EXPENSES: usize = 3;
const RECENT_MESSAGES: usize = 3;

/// Builds the contextual prompt sent to the generation service.
/// Pure and deterministic: no state, no I/O.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(
        snapshot: &FinancialSnapshot,
        transcript: &[Message],
        new_input: &str,
        language: &str,
    ) -> String {
        let mut prompt = format!(
            "You are an intelligent financial assistant. Please reply in this language: {language}\n\n"
        );

        prompt.push_str("Financial Overview:\n");
        prompt.push_str(&format!(
            "- Total Balance: \u{20b9}{}\n",
            format_amount(snapshot.total_balance)
        ));
        prompt.push_str(&format!(
            "- Monthly Income: \u{20b9}{}\n",
            format_amount(snapshot.monthly_income())
        ));
        prompt.push_str(&format!(
            "- Savings Goal: \u{20b9}{}\n",
            format_amount(snapshot.savings_goal)
        ));

        prompt.push_str("\nRecent Activity:\n");
        let skip = snapshot.expenses.len().saturating_sub(RECENT_EXPENSES);
        for expense in snapshot.expenses.iter().skip(skip) {
            prompt.push_str(&format!(
                "- {}: \u{20b9}{} ({})\n",
                expense.category,
                format_amount(expense.amount),
                expense.date.format("%d/%m/%Y")
            ));
        }

        prompt.push_str("\nRecent Chat:\n");
        let skip = transcript.len().saturating_sub(RECENT_MESSAGES);
        for message in transcript.iter().skip(skip) {
            prompt.push_str(&format!("{}: {}\n", message.sender, message.text));
        }

        prompt.push_str(&format!("\nUser's new message: {new_input}\n"));
        prompt.push_str(&format!(
            "\nPlease provide a helpful and personalized response in {language}."
        ));

        prompt
    }
}

/// Render monetary amounts the way the snapshot provider stores them:
/// whole numbers without a decimal tail, fractions with two places.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Account, Expense};
    use chrono::NaiveDate;

    fn sample_snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            total_balance: 1000.0,
            accounts: vec![Account {
                is_recurring_income: true,
                recurring_amount: 500.0,
            }],
            savings_goal: 2000.0,
            expenses: vec![Expense {
                category: "Food".to_string(),
                amount: 50.0,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }],
        }
    }

    #[test]
    fn test_prompt_contains_snapshot_facts() {
        let prompt = PromptBuilder::build(&sample_snapshot(), &[], "How am I doing?", "en");

        assert!(prompt.contains("1000"));
        assert!(prompt.contains("500"));
        assert!(prompt.contains("2000"));
        assert!(prompt.contains("Food"));
        assert!(prompt.contains("50"));
        assert!(prompt.contains("How am I doing?"));
    }

    #[test]
    fn test_prompt_carries_language_instruction() {
        let prompt = PromptBuilder::build(&sample_snapshot(), &[], "hola", "es");
        assert!(prompt.contains("Please reply in this language: es"));
        assert!(prompt.contains("personalized response in es"));
    }

    #[test]
    fn test_prompt_truncates_to_recent_context() {
        let mut snapshot = sample_snapshot();
        snapshot.expenses = (0..5)
            .map(|i| Expense {
                category: format!("Category{i}"),
                amount: 10.0,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .collect();

        let transcript: Vec<Message> = (0..5)
            .map(|i| Message::user(format!("message-{i}")))
            .collect();

        let prompt = PromptBuilder::build(&snapshot, &transcript, "hi", "en");

        assert!(!prompt.contains("Category0"));
        assert!(!prompt.contains("Category1"));
        assert!(prompt.contains("Category2"));
        assert!(prompt.contains("Category4"));

        assert!(!prompt.contains("message-1"));
        assert!(prompt.contains("message-2"));
        assert!(prompt.contains("message-4"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let snapshot = sample_snapshot();
        let a = PromptBuilder::build(&snapshot, &[], "q", "en");
        let b = PromptBuilder::build(&snapshot, &[], "q", "en");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_amounts_keep_two_places() {
        let mut snapshot = sample_snapshot();
        snapshot.total_balance = 1234.5;
        let prompt = PromptBuilder::build(&snapshot, &[], "q", "en");
        assert!(prompt.contains("\u{20b9}1234.50"));
    }
}
