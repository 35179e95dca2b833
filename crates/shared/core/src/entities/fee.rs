use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Destination of a slice of collected fees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeCategory {
    /// Protocol treasury
    Protocol,
    /// Liquidity provider incentives
    LpIncentive,
    /// Insurance pool backing bad debt
    Insurance,
}

impl FeeCategory {
    /// All categories, in breakdown order
    pub const ALL: [FeeCategory; 3] = [
        FeeCategory::Protocol,
        FeeCategory::LpIncentive,
        FeeCategory::Insurance,
    ];
}

/// Largest rate a single category may charge (100% of volume)
pub const MAX_FEE_BPS: u32 = 10_000;

/// Fee rates charged on volume, in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    pub protocol_bps: u32,
    pub lp_bps: u32,
    pub insurance_bps: u32,
}

impl FeeSchedule {
    pub fn new(protocol_bps: u32, lp_bps: u32, insurance_bps: u32) -> Self {
        Self {
            protocol_bps,
            lp_bps,
            insurance_bps,
        }
    }

    /// Rate for a category in basis points
    pub fn bps(&self, category: FeeCategory) -> u32 {
        match category {
            FeeCategory::Protocol => self.protocol_bps,
            FeeCategory::LpIncentive => self.lp_bps,
            FeeCategory::Insurance => self.insurance_bps,
        }
    }

    /// Rate for a category as a fraction (bps / 10000)
    pub fn rate(&self, category: FeeCategory) -> Decimal {
        Decimal::from(self.bps(category)) / Decimal::from(10_000u32)
    }

    /// Combined rate across all categories in basis points
    pub fn total_bps(&self) -> u64 {
        FeeCategory::ALL
            .iter()
            .map(|&category| u64::from(self.bps(category)))
            .sum()
    }

    /// First category charging more than `MAX_FEE_BPS`, if any
    pub fn excessive_category(&self) -> Option<FeeCategory> {
        FeeCategory::ALL
            .into_iter()
            .find(|&category| self.bps(category) > MAX_FEE_BPS)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            protocol_bps: 25,
            lp_bps: 15,
            insurance_bps: 10,
        }
    }
}

/// One category's share of the collected fees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub category: FeeCategory,
    pub amount: Decimal,
    /// Share of the total, 0..=100
    pub percentage: Decimal,
}

/// Fees collected on a volume figure, split by destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDistribution {
    pub protocol_fee: Decimal,
    pub lp_incentive: Decimal,
    pub insurance_pool: Decimal,
    pub total: Decimal,
    pub breakdown: Vec<FeeBreakdown>,
}

impl FeeDistribution {
    /// Amount for a category
    pub fn amount(&self, category: FeeCategory) -> Decimal {
        match category {
            FeeCategory::Protocol => self.protocol_fee,
            FeeCategory::LpIncentive => self.lp_incentive,
            FeeCategory::Insurance => self.insurance_pool,
        }
    }
}
