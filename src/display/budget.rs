//! Budget tracker display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::classify::BudgetTracker;
use crate::config::Settings;

#[derive(Tabled)]
struct BudgetLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Left")]
    left: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the budget tracker with category breakdown and alerts
pub fn format_budget(tracker: &BudgetTracker<'_>, settings: &Settings) -> String {
    let mut output = String::new();

    let remaining = tracker.remaining();
    let remaining_label = if remaining.is_negative() {
        format!("{} over", settings.format_money(remaining.abs()))
    } else {
        format!("{} left", settings.format_money(remaining))
    };

    output.push_str("Overall Budget\n");
    output.push_str(&format!(
        "Spent: {}  Budget: {}  ({})\n",
        settings.format_money(tracker.total_spent()),
        settings.format_money(tracker.total_budget()),
        remaining_label
    ));
    output.push_str(&format!(
        "Allocated to categories: {}\n",
        settings.format_money(tracker.total_allocated())
    ));
    output.push_str(&format!(
        "{} {}%\n\n",
        super::progress_bar(tracker.overall_status().percentage, 30),
        tracker.overall_status().rounded_percentage()
    ));

    let lines: Vec<BudgetLine> = tracker
        .statuses()
        .into_iter()
        .map(|(category, report)| BudgetLine {
            name: if category.icon.is_empty() {
                category.name.clone()
            } else {
                format!("{} {}", category.icon, category.name)
            },
            spent: settings.format_money(category.spent),
            allocated: settings.format_money(category.allocated),
            left: settings.format_money(category.left()),
            used: format!("{}%", report.rounded_percentage()),
            status: report.status.to_string(),
        })
        .collect();

    let mut table = Table::new(lines);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    let under = tracker.under_budget();
    if !under.is_empty() {
        let names: Vec<&str> = under.iter().map(|c| c.name.as_str()).collect();
        output.push_str(&format!("\nUnder budget: {}\n", names.join(", ")));
    }

    let over = tracker.over_budget();
    if !over.is_empty() {
        output.push_str(&format!(
            "\nBudget Alert! {} categories are over budget\n",
            over.len()
        ));
        for category in over {
            output.push_str(&format!(
                "  - {}: {} over\n",
                category.name,
                settings.format_money(category.overspend())
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, Money, TripBudget};

    #[test]
    fn test_budget_output() {
        let budget = TripBudget {
            total: Money::from_major(20000),
            categories: vec![
                BudgetCategory::new("Transportation", Money::from_major(12000), Money::from_major(14200)),
                BudgetCategory::new("Food & Dining", Money::from_major(8000), Money::from_major(6200)),
            ],
        };
        let tracker = BudgetTracker::new(&budget);
        let output = format_budget(&tracker, &Settings::default());

        assert!(output.contains("Spent: ₹20,400.00  Budget: ₹20,000.00  (₹400.00 over)"));
        assert!(output.contains("118%"));
        assert!(output.contains("Budget Alert! 1 categories are over budget"));
        assert!(output.contains("Transportation: ₹2,200.00 over"));
        assert!(output.contains("Allocated to categories: ₹20,000.00"));
        assert!(output.contains("Under budget: Food & Dining"));
    }

    #[test]
    fn test_no_alert_when_within_budget() {
        let budget = TripBudget {
            total: Money::from_major(10000),
            categories: vec![BudgetCategory::new("Food", Money::from_major(8000), Money::from_major(100))],
        };
        let output = format_budget(&BudgetTracker::new(&budget), &Settings::default());
        assert!(output.contains("left"));
        assert!(!output.contains("Budget Alert"));
    }
}
