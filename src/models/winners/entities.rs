use serde::{Serialize, Serializer};
use ts_rs::TS;

/// 校验通过、待写入的获奖决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "winner.ts")]
pub struct WinnerCommit {
    pub challenge_id: i64,
    pub project_id: i64,
    pub prize_id: i64,
    pub rank: i32,
}

/// 评奖按钮状态
///
/// 对外序列化为 `false` / `true` / `"view-winners"` 三值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerAssignerStatus {
    /// 不是任何赛道的评奖人
    NotAssigner,
    /// 已当选但尚未提交
    Pending,
    /// 已提交，可以查看结果
    ViewWinners,
}

impl WinnerAssignerStatus {
    pub const VIEW_WINNERS: &'static str = "view-winners";
}

impl Serialize for WinnerAssignerStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WinnerAssignerStatus::NotAssigner => serializer.serialize_bool(false),
            WinnerAssignerStatus::Pending => serializer.serialize_bool(true),
            WinnerAssignerStatus::ViewWinners => serializer.serialize_str(Self::VIEW_WINNERS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_three_valued() {
        assert_eq!(
            serde_json::to_string(&WinnerAssignerStatus::NotAssigner).unwrap(),
            "false"
        );
        assert_eq!(
            serde_json::to_string(&WinnerAssignerStatus::Pending).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&WinnerAssignerStatus::ViewWinners).unwrap(),
            "\"view-winners\""
        );
    }
}
