use crate::domain::model::Rectangle;

/// 周長 `2 * (width + height)`。不檢查尺寸，零或負數一樣照算。
pub fn perimeter(rect: &Rectangle) -> f64 {
    2.0 * (rect.width + rect.height)
}
