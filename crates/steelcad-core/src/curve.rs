//! 曲线拟合基础算法
//!
//! - 三点定圆 / 三点定弧
//! - 凸度（bulge）与圆弧的互转
//! - 圆弧离散采样
//!
//! 这些函数是内核的叶子层：交互绘制（三点画弧）、多段线弧线段
//! 和截面圆角离散都建立在它们之上。

use crate::geometry::{Arc, Circle};
use crate::math::{normalize_angle, Point2, Vector2, COLLINEAR_EPSILON, EPSILON};

/// 三点定圆
///
/// 使用代数外心公式。三点共线（行列式幅值低于 [`COLLINEAR_EPSILON`]）
/// 时返回 `None`，避免近退化输入下的数值不稳定。
pub fn circle_from_three_points(p1: &Point2, p2: &Point2, p3: &Point2) -> Option<Circle> {
    let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));

    if d.abs() < COLLINEAR_EPSILON {
        return None; // 三点共线
    }

    let ux = ((p1.x * p1.x + p1.y * p1.y) * (p2.y - p3.y)
        + (p2.x * p2.x + p2.y * p2.y) * (p3.y - p1.y)
        + (p3.x * p3.x + p3.y * p3.y) * (p1.y - p2.y))
        / d;
    let uy = ((p1.x * p1.x + p1.y * p1.y) * (p3.x - p2.x)
        + (p2.x * p2.x + p2.y * p2.y) * (p1.x - p3.x)
        + (p3.x * p3.x + p3.y * p3.y) * (p2.x - p1.x))
        / d;

    let center = Point2::new(ux, uy);
    let radius = (p1 - center).norm();

    Some(Circle::new(center, radius))
}

/// 三点定弧（起点、通过点、终点）
///
/// 先拟合外接圆，再确定扫向：将三个点角归一化到 [0, 2π)，
/// 选择从起点逆时针先经过通过点的那个方向。
pub fn arc_from_three_points(start: &Point2, mid: &Point2, end: &Point2) -> Option<Arc> {
    let circle = circle_from_three_points(start, mid, end)?;
    let c = circle.center;

    let start_angle = normalize_angle((start.y - c.y).atan2(start.x - c.x));
    let mid_angle = normalize_angle((mid.y - c.y).atan2(mid.x - c.x));
    let end_angle = normalize_angle((end.y - c.y).atan2(end.x - c.x));

    // 从起点出发逆时针的偏移量
    let mid_ccw = normalize_angle(mid_angle - start_angle);
    let end_ccw = normalize_angle(end_angle - start_angle);

    // 逆时针先到通过点：弧为 start -> end；否则反向
    if mid_ccw < end_ccw {
        Some(Arc::new(c, circle.radius, start_angle, end_angle))
    } else {
        Some(Arc::new(c, circle.radius, end_angle, start_angle))
    }
}

/// 从三点计算凸度
///
/// 凸度 = tan(包含角/4)，由正矢关系导出：设 h 为弦中点到通过点的
/// 垂直距离（带符号），则 bulge = 2h / 弦长。
/// 正值表示从 a 到 b 逆时针转向。
pub fn bulge_from_points(a: &Point2, through: &Point2, b: &Point2) -> f64 {
    let chord = b - a;
    let chord_len = chord.norm();

    if chord_len < EPSILON {
        return 0.0;
    }

    let mid = a + chord / 2.0;
    let left = Vector2::new(-chord.y, chord.x) / chord_len;

    // 弦中点到通过点的垂距，弦右侧为正（逆时针弧的拱顶在右侧）
    let h = -(through - mid).dot(&left);

    if h.abs() < EPSILON {
        return 0.0; // 三点共线，直线段
    }

    2.0 * h / chord_len
}

/// 从凸度重建圆弧
///
/// `bulge_from_points` 的逆运算：由两端点和存储的凸度值
/// 重建圆心、半径和起止角。凸度为 0 或弦退化时返回 `None`。
pub fn arc_from_bulge(a: &Point2, b: &Point2, bulge: f64) -> Option<Arc> {
    let chord = b - a;
    let chord_len = chord.norm();

    if chord_len < EPSILON || bulge.abs() < EPSILON {
        return None;
    }

    let s = chord_len / 2.0;
    let h = s * bulge; // 正矢（弧高）

    let mid = Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);

    // 正矢关系：radius = (s² + h²) / (2h)
    let radius = (s * s + h * h) / (2.0 * h.abs());
    let d = radius - h.abs(); // 圆心到弦的距离

    // 弦的垂直方向：凸度为正时圆心在弦左侧
    let perp = if bulge > 0.0 {
        Vector2::new(-chord.y, chord.x).normalize()
    } else {
        Vector2::new(chord.y, -chord.x).normalize()
    };

    let center = mid + perp * d;

    let start_angle = (a.y - center.y).atan2(a.x - center.x);
    let end_angle = (b.y - center.y).atan2(b.x - center.x);

    // 凸度为正 = 逆时针弧 a -> b；为负时交换起止角保持逆时针存储
    if bulge > 0.0 {
        Some(Arc::new(center, radius, start_angle, end_angle))
    } else {
        Some(Arc::new(center, radius, end_angle, start_angle))
    }
}

/// 圆弧离散采样
///
/// 从 `start_angle` 逆时针均匀采样到 `end_angle`，返回 `segments + 1`
/// 个点（含两端）。起止角相同视为整圆。
pub fn arc_points(
    center: &Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
) -> Vec<Point2> {
    let mut sweep = normalize_angle(end_angle - start_angle);
    if sweep < EPSILON {
        sweep = 2.0 * std::f64::consts::PI;
    }

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = start_angle + sweep * (i as f64) / (segments as f64);
        points.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}
