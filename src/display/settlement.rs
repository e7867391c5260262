//! Settlement sheet display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::reports::SettlementReport;

#[derive(Tabled)]
struct SettlementLine {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Owes")]
    owes: String,
    #[tabled(rename = "Gets back")]
    gets_back: String,
}

/// Format the settlement report for terminal display
pub fn format_settlement(report: &SettlementReport, settings: &Settings) -> String {
    let mut output = String::new();

    if !report.group.is_empty() {
        output.push_str(&format!("Settlement - {}\n", report.group));
    } else {
        output.push_str("Settlement\n");
    }
    output.push_str(&format!(
        "Total: {} across {} expense(s)\n\n",
        settings.format_money(report.total_expenses),
        report.expense_count
    ));

    let lines: Vec<SettlementLine> = report
        .rows
        .iter()
        .map(|row| SettlementLine {
            name: row.name.clone(),
            paid: settings.format_money(row.paid),
            share: settings.format_money(row.share),
            owes: settings.format_money(row.still_owed),
            gets_back: settings.format_money(row.gets_back),
        })
        .collect();

    let mut table = Table::new(lines);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    if report.is_settled() {
        output.push_str("\nEveryone is settled up.\n");
    } else {
        output.push_str("\nSuggested transfers:\n");
        for transfer in &report.transfers {
            output.push_str(&format!(
                "  {} -> {}: {}\n",
                transfer.from,
                transfer.to,
                settings.format_money(transfer.amount)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::GroupSnapshot;

    fn report(expenses: &str) -> SettlementReport {
        let json = format!(
            r#"{{"name": "Weekend", "members": [{{"id": "a", "name": "Asha"}}, {{"id": "b", "name": "Bilal"}}],
                "expenses": {}}}"#,
            expenses
        );
        SettlementReport::generate(&GroupSnapshot::from_json_str(&json).unwrap()).unwrap()
    }

    #[test]
    fn test_format_with_transfers() {
        let report = report(
            r#"[{"id": "1", "description": "Cab", "amount": 100000, "paid_by": "a",
                 "split_between": ["a", "b"], "date": "2024-12-15"}]"#,
        );
        let output = format_settlement(&report, &Settings::default());

        assert!(output.contains("Settlement - Weekend"));
        assert!(output.contains("Total: ₹1,000.00 across 1 expense(s)"));
        assert!(output.contains("Gets back"));
        assert!(output.contains("Bilal -> Asha: ₹500.00"));
    }

    #[test]
    fn test_format_settled() {
        let output = format_settlement(&report("[]"), &Settings::default());
        assert!(output.contains("Everyone is settled up."));
    }
}
