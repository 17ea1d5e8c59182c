use crate::shop::models::SelectedPlan;

/// What the user has picked on the detail page. Lives only for the visit.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Indices into `catalog::DISCOUNT_TIERS`, ascending, never empty.
    pub discounts: Vec<usize>,
    pub plan: Option<SelectedPlan>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            discounts: vec![0],
            plan: None,
        }
    }
}

impl Selection {
    /// Toggle a discount tier. Out-of-range indices are ignored and removing
    /// the last tier falls back to the common subsidy tier.
    pub fn with_discount_toggled(&self, index: usize, tier_count: usize) -> Self {
        let mut next = self.clone();
        if index >= tier_count {
            return next;
        }
        match next.discounts.binary_search(&index) {
            Ok(pos) => {
                next.discounts.remove(pos);
            }
            Err(pos) => next.discounts.insert(pos, index),
        }
        if next.discounts.is_empty() {
            next.discounts.push(0);
        }
        next
    }

    pub fn with_plan(&self, plan: SelectedPlan) -> Self {
        Self {
            discounts: self.discounts.clone(),
            plan: Some(plan),
        }
    }

    pub fn is_discount_selected(&self, index: usize) -> bool {
        self.discounts.binary_search(&index).is_ok()
    }

    pub fn plan_price(&self) -> Option<i64> {
        self.plan.as_ref().map(|plan| plan.price)
    }
}
