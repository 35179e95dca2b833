use prism_core::{
    AggregationPoint, AmmImpactResult, AnalyticsResult, ErrorHistogramBucket, FeeDistribution,
    L2ParsedData, QbResult, VenueComparison,
};
use serde::Serialize;

/// Result of one report section: the value, or the reason it has none
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ok(T),
    Err { error: String },
}

impl<T> Section<T> {
    pub fn ok(&self) -> Option<&T> {
        match self {
            Section::Ok(value) => Some(value),
            Section::Err { .. } => None,
        }
    }
}

impl<T> From<AnalyticsResult<T>> for Section<T> {
    fn from(result: AnalyticsResult<T>) -> Self {
        match result {
            Ok(value) => Section::Ok(value),
            Err(e) => Section::Err {
                error: e.to_string(),
            },
        }
    }
}

/// A venue left out of the ranking because its swap could not be quoted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedVenue {
    pub venue: String,
    pub error: String,
}

/// Output of one batch run, mirroring the request's sections
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qb: Option<QbResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<AggregationPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<Section<L2ParsedData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<Section<AmmImpactResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venues: Option<Section<Vec<VenueComparison>>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_venues: Vec<SkippedVenue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invariant_holds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Section<Vec<ErrorHistogramBucket>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Section<FeeDistribution>>,
}

impl AnalyticsReport {
    /// Number of sections that could not be computed
    pub fn error_count(&self) -> usize {
        fn failed<T>(section: &Option<Section<T>>) -> usize {
            usize::from(matches!(section, Some(Section::Err { .. })))
        }
        failed(&self.depth)
            + failed(&self.swap)
            + failed(&self.venues)
            + failed(&self.histogram)
            + failed(&self.fees)
    }
}
