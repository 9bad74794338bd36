//! Demo snapshot used when no data file is supplied.

use crate::model::{
    Asset, BillAlert, DashboardData, Goal, InsightCard, InsightKind, SavingsOpportunity,
    SpendingCategory, UserProfile,
};

impl DashboardData {
    /// The built-in demo data set.
    pub fn sample() -> Self {
        Self {
            user: UserProfile {
                name: "Alex".to_string(),
            },
            total_balance: 12450.75,
            monthly_spending: 3245.5,
            spending_categories: sample_spending_categories(),
            savings_opportunities: sample_savings_opportunities(),
            bill_alerts: sample_bill_alerts(),
            traditional_assets: sample_traditional_assets(),
            crypto_assets: sample_crypto_assets(),
            goals: sample_goals(),
            insights: sample_insights(),
        }
    }
}

fn asset(id: &str, name: &str, symbol: &str, amount: f64, value: f64, change: f64) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        amount,
        value,
        change,
        icon: None,
    }
}

fn crypto_asset(id: &str, name: &str, symbol: &str, amount: f64, value: f64, change: f64) -> Asset {
    Asset {
        icon: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            symbol
        )),
        ..asset(id, name, symbol, amount, value, change)
    }
}

fn sample_traditional_assets() -> Vec<Asset> {
    vec![
        asset("1", "Checking Account", "USD", 5280.42, 5280.42, 0.0),
        asset("2", "Savings Account", "USD", 12750.89, 12750.89, 0.02),
        asset("3", "Investment Portfolio", "USD", 28450.65, 28450.65, 1.25),
    ]
}

fn sample_crypto_assets() -> Vec<Asset> {
    vec![
        crypto_asset("4", "Bitcoin", "BTC", 0.42, 16800.0, 2.3),
        crypto_asset("5", "Ethereum", "ETH", 3.75, 6750.0, -1.2),
        crypto_asset("6", "Solana", "SOL", 45.2, 3240.0, 5.7),
    ]
}

fn goal(id: &str, name: &str, target: f64, current: f64, deadline: &str, category: &str, icon: &str) -> Goal {
    Goal {
        id: id.to_string(),
        name: name.to_string(),
        target_amount: target,
        current_amount: current,
        deadline: deadline.to_string(),
        category: category.to_string(),
        icon: icon.to_string(),
    }
}

fn sample_goals() -> Vec<Goal> {
    vec![
        goal("1", "New Car", 25000.0, 12500.0, "Dec 2024", "Transportation", "🚗"),
        goal("2", "Emergency Fund", 10000.0, 8000.0, "Aug 2024", "Savings", "🛡"),
        goal("3", "Vacation", 5000.0, 1500.0, "Jul 2025", "Travel", "✈"),
    ]
}

fn sample_insights() -> Vec<InsightCard> {
    vec![
        InsightCard::new(
            "Subscription Savings",
            "You could save $24.99/month by canceling unused streaming services. We detected 3 services with no activity in 30+ days.",
            InsightKind::Saving,
            "Review Subscriptions",
        ),
        InsightCard::new(
            "Unusual Spending",
            "Your dining expenses are 45% higher than last month. Consider setting a budget for this category.",
            InsightKind::Spending,
            "Set Budget",
        ),
        InsightCard::new(
            "Investment Opportunity",
            "Based on your risk profile, consider allocating 5% of savings to index funds for better returns.",
            InsightKind::Tip,
            "Learn More",
        ),
        InsightCard::new(
            "Bill Due Soon",
            "Your electricity bill ($78.50) is due in 3 days. Ensure sufficient funds in your account.",
            InsightKind::Alert,
            "Schedule Payment",
        ),
    ]
}

fn category(name: &str, amount: f64, percentage: f64, color: &str) -> SpendingCategory {
    SpendingCategory {
        category: name.to_string(),
        amount,
        percentage,
        color: color.to_string(),
    }
}

fn sample_spending_categories() -> Vec<SpendingCategory> {
    vec![
        category("Housing", 1200.0, 37.0, "#4C51BF"),
        category("Food", 650.0, 20.0, "#38B2AC"),
        category("Transport", 450.0, 14.0, "#ED8936"),
        category("Entertainment", 350.0, 11.0, "#9F7AEA"),
        category("Other", 595.5, 18.0, "#F56565"),
    ]
}

fn sample_savings_opportunities() -> Vec<SavingsOpportunity> {
    vec![
        SavingsOpportunity {
            title: "Subscription Optimization".to_string(),
            description: "Cancel unused streaming services".to_string(),
            potential_savings: 24.99,
        },
        SavingsOpportunity {
            title: "Dining Out Reduction".to_string(),
            description: "Cook at home 2 more days per week".to_string(),
            potential_savings: 120.0,
        },
    ]
}

fn sample_bill_alerts() -> Vec<BillAlert> {
    vec![
        BillAlert {
            name: "Rent".to_string(),
            amount: 1200.0,
            due_date: "2023-06-01".to_string(),
            is_priority: true,
        },
        BillAlert {
            name: "Electricity".to_string(),
            amount: 85.75,
            due_date: "2023-05-28".to_string(),
            is_priority: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The demo snapshot survives a trip through its JSON file format.
    fn test_sample_serializes_to_camel_case_json() {
        let json = serde_json::to_string_pretty(&DashboardData::sample()).unwrap();
        assert!(json.contains("\"totalBalance\""));
        assert!(json.contains("\"traditionalAssets\""));
        assert!(json.contains("\"isPriority\""));
        assert!(json.contains("\"type\": \"saving\""));

        let loaded: DashboardData = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.goals, DashboardData::sample().goals);
        assert_eq!(loaded.insights.len(), 4);
    }
}
