//! 24-month cost estimate.
//!
//! The first six months are billed at the carrier's first-period plan, the
//! remaining eighteen at the plan the user picked, and the device price is
//! spread over the whole period.

pub const PERIOD_MONTHS: u32 = 24;
pub const FIRST_PERIOD_MONTHS: i64 = 6;
pub const REMAINING_MONTHS: i64 = 18;

pub fn monthly_estimate(
    phone_price: i64,
    first_plan_price: i64,
    chosen_plan_price: i64,
    period_months: u32,
) -> f64 {
    let total = phone_price
        + first_plan_price * FIRST_PERIOD_MONTHS
        + chosen_plan_price * REMAINING_MONTHS;
    total as f64 / f64::from(period_months)
}

/// Text for the monthly amount box, `-` while no plan is chosen.
pub fn estimate_label(phone_price: i64, first_plan_price: i64, chosen_plan_price: Option<i64>) -> String {
    match chosen_plan_price {
        Some(price) => format_won(monthly_estimate(
            phone_price,
            first_plan_price,
            price,
            PERIOD_MONTHS,
        )),
        None => "-".to_string(),
    }
}

/// Format an amount the way `toLocaleString("ko-KR")` does, with a won suffix:
/// thousands separators and at most three fraction digits.
pub fn format_won(value: f64) -> String {
    let milli = (value.abs() * 1000.0).round() as u64;
    let whole = milli / 1000;
    let fraction = milli % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && milli > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}원", sign, grouped)
    } else {
        let fraction = format!("{:03}", fraction);
        format!("{}{}.{}원", sign, grouped, fraction.trim_end_matches('0'))
    }
}

/// Percentage off the original price, rounded down. 0 when there is no
/// original price to compare against.
pub fn discount_rate(original_price: i64, price: i64) -> i64 {
    if original_price <= 0 || price >= original_price {
        return 0;
    }
    (original_price - price) * 100 / original_price
}

/// Inputs shown in the calculator details modal.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBreakdown {
    pub months: u32,
    pub phone_price: i64,
    pub phone_original_price: i64,
    pub first_plan_price: i64,
    pub selected_plan_price: i64,
    pub common_discount: i64,
}

impl PriceBreakdown {
    pub fn monthly(&self) -> f64 {
        monthly_estimate(
            self.phone_price,
            self.first_plan_price,
            self.selected_plan_price,
            self.months,
        )
    }

    pub fn device_monthly(&self) -> f64 {
        self.phone_price as f64 / f64::from(self.months)
    }

    pub fn first_period_total(&self) -> i64 {
        self.first_plan_price * FIRST_PERIOD_MONTHS
    }

    pub fn remaining_total(&self) -> i64 {
        self.selected_plan_price * REMAINING_MONTHS
    }

    pub fn total(&self) -> i64 {
        self.phone_price + self.first_period_total() + self.remaining_total()
    }

    /// Discount the agency gives beyond the carrier subsidy. Never negative.
    pub fn agency_discount(&self) -> i64 {
        (self.phone_original_price - self.phone_price - self.common_discount).max(0)
    }

    /// Rows for the details table, in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("단말기 출고가", format_won(self.phone_original_price as f64)),
            ("공통지원금", format!("-{}", format_won(self.common_discount as f64))),
            ("대리점 추가할인", format!("-{}", format_won(self.agency_discount() as f64))),
            ("단말기 구매가", format_won(self.phone_price as f64)),
            ("초기 6개월 요금", format!("{} × 6", format_won(self.first_plan_price as f64))),
            ("이후 18개월 요금", format!("{} × 18", format_won(self.selected_plan_price as f64))),
            ("24개월 총액", format_won(self.total() as f64)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_matches_formula() {
        let cases = [
            (450_000, 109_000, 69_000),
            (0, 0, 0),
            (1_155_000, 110_000, 90_000),
            (99_000, 105_000, 47_000),
        ];
        for (phone, first, plan) in cases {
            let expected = (phone + first * 6 + plan * 18) as f64 / 24.0;
            assert_eq!(monthly_estimate(phone, first, plan, 24), expected);
        }
    }

    #[test]
    fn label_is_dash_without_plan() {
        assert_eq!(estimate_label(450_000, 109_000, None), "-");
    }

    #[test]
    fn label_formats_estimate() {
        // (480000 + 109000*6 + 69000*18) / 24 = 99_000
        assert_eq!(estimate_label(480_000, 109_000, Some(69_000)), "99,000원");
    }

    #[test]
    fn format_won_groups_and_trims_fraction() {
        assert_eq!(format_won(0.0), "0원");
        assert_eq!(format_won(999.0), "999원");
        assert_eq!(format_won(1_000.0), "1,000원");
        assert_eq!(format_won(1_234_567.5), "1,234,567.5원");
        assert_eq!(format_won(95_041.666_666), "95,041.667원");
        assert_eq!(format_won(-12_000.0), "-12,000원");
    }

    #[test]
    fn discount_rate_rounds_down_and_never_goes_negative() {
        assert_eq!(discount_rate(1_155_000, 480_000), 58);
        assert_eq!(discount_rate(1_000_000, 1_200_000), 0);
        assert_eq!(discount_rate(0, 0), 0);
    }

    #[test]
    fn breakdown_totals_agree_with_estimate() {
        let breakdown = PriceBreakdown {
            months: PERIOD_MONTHS,
            phone_price: 480_000,
            phone_original_price: 1_155_000,
            first_plan_price: 109_000,
            selected_plan_price: 69_000,
            common_discount: 500_000,
        };
        assert_eq!(breakdown.total(), 480_000 + 654_000 + 1_242_000);
        assert_eq!(breakdown.monthly(), breakdown.total() as f64 / 24.0);
        assert_eq!(breakdown.agency_discount(), 175_000);
        assert_eq!(breakdown.device_monthly(), 20_000.0);
        assert_eq!(breakdown.rows().len(), 7);
    }

    #[test]
    fn agency_discount_is_clamped() {
        let breakdown = PriceBreakdown {
            months: PERIOD_MONTHS,
            phone_price: 900_000,
            phone_original_price: 1_000_000,
            first_plan_price: 0,
            selected_plan_price: 0,
            common_discount: 300_000,
        };
        assert_eq!(breakdown.agency_discount(), 0);
    }
}
