use super::rounding::round_half_up;
use super::{StatsService, judged_score};
use crate::errors::Result;
use crate::models::stats::responses::{HistogramBucket, ScoreHistogramResponse};

const BUCKETS: i32 = 10;

/// 十个半开区间 [0,1) … [9,10)
///
/// 正好为 10 的分数不落入任何区间。
pub fn build_histogram(scores: &[f64]) -> Vec<HistogramBucket> {
    (0..BUCKETS)
        .map(|lower| {
            let (lo, hi) = (f64::from(lower), f64::from(lower + 1));
            HistogramBucket {
                lower,
                upper: lower + 1,
                count: scores.iter().filter(|&&s| s >= lo && s < hi).count() as i64,
            }
        })
        .collect()
}

pub async fn get_score_histogram(
    service: &StatsService,
    challenge_ids: &[i64],
) -> Result<ScoreHistogramResponse> {
    let storage = service.storage();

    let judge: Vec<f64> = storage
        .list_entries_for_challenges(challenge_ids)
        .await?
        .iter()
        .filter_map(judged_score)
        .collect();

    let bot: Vec<f64> = storage
        .list_baseline_scores(challenge_ids)
        .await?
        .iter()
        .filter_map(|b| b.score)
        .map(round_half_up)
        .collect();

    Ok(ScoreHistogramResponse {
        judge: build_histogram(&judge),
        bot: build_histogram(&bot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::Fixture;

    #[test]
    fn test_histogram_excludes_exact_ten() {
        let histogram = build_histogram(&[10.0]);
        assert_eq!(histogram.len(), 10);
        assert!(histogram.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_histogram_half_open_buckets() {
        let histogram = build_histogram(&[0.0, 0.99, 1.0, 9.5, 9.99, -1.0]);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[1].count, 1);
        assert_eq!(histogram[9].count, 2);
        assert_eq!(histogram.iter().map(|b| b.count).sum::<i64>(), 5);
        assert_eq!((histogram[9].lower, histogram[9].upper), (9, 10));
    }

    #[tokio::test]
    async fn test_bot_series_rounded_before_bucketing() {
        let fx = Fixture::new();
        let first = fx.project("Rocket");
        let second = fx.project("Lantern");
        fx.baseline(first, fx.challenge_id, 9.5, true).await;
        fx.baseline(second, fx.challenge_id, 3.4, true).await;

        let histogram = StatsService::new(fx.dyn_storage())
            .get_score_histogram(&[fx.challenge_id])
            .await
            .unwrap();

        // 9.5 取整为 10，落在所有区间之外
        assert_eq!(histogram.bot[3].count, 1);
        assert_eq!(histogram.bot.iter().map(|b| b.count).sum::<i64>(), 1);
        assert!(histogram.judge.iter().all(|b| b.count == 0));
    }
}
