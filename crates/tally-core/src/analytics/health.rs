//! Composite financial health score

use super::types::{BudgetComparison, BudgetStatus, HealthFactor, HealthRating, HealthScore};

const BASE_SCORE: i32 = 100;

/// Score a month from 0 to 100, starting at 100 and applying each factor.
///
/// Savings-rate and expense-trend factors are mutually exclusive within their
/// group; budget factors scale with the number of affected categories.
pub fn health_score(
    savings_rate: f64,
    budgets: &[BudgetComparison],
    expense_change_percent: f64,
) -> HealthScore {
    let mut factors = Vec::new();

    if savings_rate < 0.0 {
        factors.push(HealthFactor::new("Spending exceeds income", -30));
    } else if savings_rate < 10.0 {
        factors.push(HealthFactor::new("Low savings rate", -15));
    } else if savings_rate > 20.0 {
        factors.push(HealthFactor::new("Excellent savings rate", 5));
    }

    let over = count_status(budgets, BudgetStatus::Over);
    if over > 0 {
        factors.push(HealthFactor::new(
            format!("{} categories over budget", over),
            budget_penalty(over, -10),
        ));
    }

    let warning = count_status(budgets, BudgetStatus::Warning);
    if warning > 0 {
        factors.push(HealthFactor::new(
            format!("{} categories approaching budget", warning),
            budget_penalty(warning, -5),
        ));
    }

    if expense_change_percent > 20.0 {
        factors.push(HealthFactor::new("High expense increase", -15));
    } else if expense_change_percent < -10.0 {
        factors.push(HealthFactor::new("Reduced expenses", 10));
    }

    let raw = raw_score(&factors);
    let score = raw.clamp(0, 100);

    tracing::debug!(raw, score, factors = factors.len(), "Health score computed");

    HealthScore {
        score,
        rating: HealthRating::from_score(score),
        factors,
    }
}

fn count_status(budgets: &[BudgetComparison], status: BudgetStatus) -> usize {
    budgets.iter().filter(|b| b.status == status).count()
}

/// Impact of `count` budgets at `per` points each, saturating at the i32 range
fn budget_penalty(count: usize, per: i32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX).saturating_mul(per)
}

/// Base score plus every factor, before clamping
fn raw_score(factors: &[HealthFactor]) -> i32 {
    factors
        .iter()
        .fold(BASE_SCORE, |acc, f| acc.saturating_add(f.impact))
}
