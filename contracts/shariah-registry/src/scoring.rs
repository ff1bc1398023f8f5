use shared::constants::{
    SCORE_DENOMINATOR, WEIGHT_ASSET_BACKING, WEIGHT_LIQUIDITY, WEIGHT_SMART_CONTRACT,
    WEIGHT_TRACK_RECORD, WEIGHT_TRANSPARENCY,
};

use crate::types::RiskScore;

/// Weighted 25/25/20/15/15 aggregate, floor-divided.
///
/// Callers validate sub-scores first; with every input at most 100 the
/// weighted sum stays well inside `u32`.
pub fn overall_score(scores: &RiskScore) -> u32 {
    let weighted = scores.transparency * WEIGHT_TRANSPARENCY
        + scores.track_record * WEIGHT_TRACK_RECORD
        + scores.asset_backing * WEIGHT_ASSET_BACKING
        + scores.smart_contract * WEIGHT_SMART_CONTRACT
        + scores.liquidity * WEIGHT_LIQUIDITY;

    weighted / SCORE_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(t: u32, tr: u32, b: u32, sc: u32, l: u32) -> RiskScore {
        RiskScore {
            transparency: t,
            track_record: tr,
            asset_backing: b,
            smart_contract: sc,
            liquidity: l,
        }
    }

    #[test]
    fn test_uniform_scores() {
        assert_eq!(overall_score(&scores(80, 80, 80, 80, 80)), 80);
        assert_eq!(overall_score(&scores(100, 100, 100, 100, 100)), 100);
        assert_eq!(overall_score(&scores(0, 0, 0, 0, 0)), 0);
    }

    #[test]
    fn test_floor_division() {
        // (40*25 + 60*25) / 100 = 25
        assert_eq!(overall_score(&scores(40, 60, 0, 0, 0)), 25);
        // 1*15 / 100 truncates to 0
        assert_eq!(overall_score(&scores(0, 0, 0, 0, 1)), 0);
        // 99 everywhere gives 9900 / 100
        assert_eq!(overall_score(&scores(99, 99, 99, 99, 99)), 99);
    }

    #[test]
    fn test_weights() {
        assert_eq!(overall_score(&scores(90, 85, 70, 95, 60)), 81);
        assert_eq!(overall_score(&scores(100, 0, 0, 0, 0)), 25);
        assert_eq!(overall_score(&scores(0, 0, 100, 0, 0)), 20);
        assert_eq!(overall_score(&scores(0, 0, 0, 100, 0)), 15);
    }
}
