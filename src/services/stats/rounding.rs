/// 四舍五入（0.5 向上）
///
/// 小数部分严格小于 0.5 时向下取整，否则向上取整。负零归一为零。
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor < 0.5 {
        floor
    } else {
        value.ceil()
    };
    rounded + 0.0
}

/// 按同样规则保留 `places` 位小数
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}
