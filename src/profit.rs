//! Profit Calculator
//!
//! Derives the per-acre profit/loss breakdown for a crop from its cost lines,
//! yield range and current market price. Never stored: recomputed on demand.
//!
//! ```text
//! total_cost      = seed + fertilizer + pesticide + irrigation + labor
//! avg_yield       = (min + max) / 2
//! expected_income = avg_yield × current price
//! net_profit      = expected_income - total_cost
//! cost_percentage = round(total_cost / expected_income × 100), 0 if income <= 0
//! ```

use serde::Serialize;

use crate::catalog::Crop;

/// Per-acre profit/loss breakdown, in rupees and quintals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitBreakdown {
    pub total_cost: f64,
    pub avg_yield: f64,
    pub expected_income: f64,

    /// Negative when the crop runs at a loss
    pub net_profit: f64,

    /// Total cost as a whole percentage of expected income
    pub cost_percentage: u32,
}

impl ProfitBreakdown {
    /// Break-even counts as profit
    pub fn is_profit(&self) -> bool {
        self.net_profit >= 0.0
    }
}

/// Compute the profit/loss breakdown for one crop.
///
/// Inputs are trusted to satisfy the catalog invariants. The only guard is
/// on the cost ratio, which is 0 rather than infinite or NaN when expected
/// income is zero or negative.
pub fn compute_profit_loss(crop: &Crop) -> ProfitBreakdown {
    let total_cost = crop.costs.total() as f64;
    let avg_yield = (crop.yield_per_acre.min + crop.yield_per_acre.max) / 2.0;
    let expected_income = avg_yield * crop.market_price.current;
    let net_profit = expected_income - total_cost;

    ProfitBreakdown {
        total_cost,
        avg_yield,
        expected_income,
        net_profit,
        cost_percentage: cost_percentage(total_cost, expected_income),
    }
}

fn cost_percentage(total_cost: f64, expected_income: f64) -> u32 {
    // `!(x > 0)` also catches a NaN income
    if !(expected_income > 0.0) || total_cost <= 0.0 {
        return 0;
    }
    (total_cost / expected_income * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_soybean_breakdown() {
        let soybean = Catalog::global().crop("soybean").unwrap();
        let profit = compute_profit_loss(soybean);

        assert_relative_eq!(profit.total_cost, 14200.0);
        assert_relative_eq!(profit.avg_yield, 7.0);
        assert_relative_eq!(profit.expected_income, 33600.0);
        assert_relative_eq!(profit.net_profit, 19400.0);
        // 14200 / 33600 = 42.26%
        assert_eq!(profit.cost_percentage, 42);
        assert!(profit.is_profit());
    }

    #[test]
    fn test_fractional_average_yield() {
        // Jowar yields 5-8 quintals: average 6.5
        let jowar = Catalog::global().crop("jowar").unwrap();
        let profit = compute_profit_loss(jowar);
        assert_relative_eq!(profit.avg_yield, 6.5);
        assert_relative_eq!(profit.expected_income, 22100.0);
        assert_relative_eq!(profit.net_profit, 12600.0);
    }

    #[test]
    fn test_identities_hold_for_every_crop() {
        for crop in Catalog::global().crops() {
            let p = compute_profit_loss(crop);
            let c = crop.costs;
            let sum = u64::from(c.seed)
                + u64::from(c.fertilizer)
                + u64::from(c.pesticide)
                + u64::from(c.irrigation)
                + u64::from(c.labor);

            assert_eq!(p.total_cost, sum as f64, "{}", crop.id);
            let range = crop.yield_per_acre;
            assert_relative_eq!(p.avg_yield, (range.min + range.max) / 2.0);
            assert_relative_eq!(p.expected_income, p.avg_yield * crop.market_price.current);
            assert_relative_eq!(p.net_profit, p.expected_income - p.total_cost);
            assert_eq!(
                p.cost_percentage,
                (p.total_cost / p.expected_income * 100.0).round() as u32,
                "{}",
                crop.id
            );
        }
    }

    #[test]
    fn test_zero_income_has_zero_cost_ratio() {
        let mut crop = Catalog::global().crop("wheat").unwrap().clone();
        crop.market_price.current = 0.0;

        let profit = compute_profit_loss(&crop);
        assert_relative_eq!(profit.expected_income, 0.0);
        assert_relative_eq!(profit.net_profit, -14700.0);
        assert_eq!(profit.cost_percentage, 0);
        assert!(!profit.is_profit());
    }

    #[test]
    fn test_negative_income_has_zero_cost_ratio() {
        let mut crop = Catalog::global().crop("wheat").unwrap().clone();
        crop.market_price.current = -10.0;
        assert_eq!(compute_profit_loss(&crop).cost_percentage, 0);
    }

    #[test]
    fn test_loss_making_crop() {
        let mut crop = Catalog::global().crop("bajra").unwrap().clone();
        // 5 q × ₹1000 = ₹5000 income against ₹7800 cost
        crop.market_price.current = 1000.0;

        let profit = compute_profit_loss(&crop);
        assert_relative_eq!(profit.net_profit, -2800.0);
        assert_eq!(profit.cost_percentage, 156);
        assert!(!profit.is_profit());
    }

    #[test]
    fn test_serializes_camel_case() {
        let profit = compute_profit_loss(Catalog::global().crop("soybean").unwrap());
        let json = serde_json::to_value(profit).unwrap();
        assert_eq!(json["totalCost"], 14200.0);
        assert_eq!(json["avgYield"], 7.0);
        assert_eq!(json["expectedIncome"], 33600.0);
        assert_eq!(json["netProfit"], 19400.0);
        assert_eq!(json["costPercentage"], 42);
    }
}
