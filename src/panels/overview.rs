//! Financial overview panel
//!
//! Balance, monthly spending, category breakdown, savings opportunities and
//! upcoming bills.

use crate::format::{format_currency, format_due_date};
use crate::model::{BillAlert, DashboardData, SavingsOpportunity, SpendingCategory};

/// One slice of the placeholder breakdown chart.
///
/// Every category gets the same slice, rotated by its position in the list.
/// The chart does not attempt proportional arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice<'a> {
    pub category: &'a SpendingCategory,
    pub rotation_deg: f64,
}

/// One display-ready bill row.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub name: String,
    pub amount: String,
    /// "Jun 1", or the raw due date when it does not parse.
    pub due: String,
    pub is_priority: bool,
}

#[derive(Debug, Clone)]
pub struct SmartOverview {
    pub total_balance: f64,
    pub monthly_spending: f64,
    pub spending_categories: Vec<SpendingCategory>,
    pub savings_opportunities: Vec<SavingsOpportunity>,
    pub bill_alerts: Vec<BillAlert>,
}

impl SmartOverview {
    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            total_balance: data.total_balance,
            monthly_spending: data.monthly_spending,
            spending_categories: data.spending_categories.clone(),
            savings_opportunities: data.savings_opportunities.clone(),
            bill_alerts: data.bill_alerts.clone(),
        }
    }

    pub fn chart_slices(&self) -> Vec<ChartSlice<'_>> {
        let count = self.spending_categories.len() as f64;
        self.spending_categories
            .iter()
            .enumerate()
            .map(|(index, category)| ChartSlice {
                category,
                rotation_deg: index as f64 * (360.0 / count),
            })
            .collect()
    }

    pub fn bill_rows(&self) -> Vec<BillRow> {
        self.bill_alerts
            .iter()
            .map(|bill| BillRow {
                name: bill.name.clone(),
                amount: format_currency(bill.amount),
                due: format_due_date(&bill.due_date),
                is_priority: bill.is_priority,
            })
            .collect()
    }

    pub fn priority_bill_count(&self) -> usize {
        self.bill_alerts.iter().filter(|bill| bill.is_priority).count()
    }

    /// Combined monthly savings across all opportunities.
    pub fn potential_savings_total(&self) -> f64 {
        self.savings_opportunities
            .iter()
            .map(|opportunity| opportunity.potential_savings)
            .sum()
    }
}
