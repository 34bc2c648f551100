//! 命中测试 / 邻近判定
//!
//! 选择和光标捕捉共用的容差邻近测试。单一入口
//! [`is_point_near_shape`] 对图元枚举做穷尽匹配，每种图元
//! 一个策略；标注的命中测试复用标注布局计算。
//!
//! 所有测试都满足：
//! - 平移不变：图元与查询点同时平移，结果不变
//! - 容差单调：容差越大命中集合只增不减

use crate::dimension::Dimension;
use crate::geometry::{Arc, Ellipse, Geometry, Rectangle};
use crate::math::{normalize_angle, Point2, ANGULAR_SLACK, EPSILON};

/// 检查点是否在图元附近（考虑容差）
pub fn is_point_near_shape(point: &Point2, shape: &Geometry, tolerance: f64) -> bool {
    match shape {
        Geometry::Point(p) => (p.position - point).norm() <= tolerance,
        Geometry::Line(l) => l.distance_to_point(point) <= tolerance,
        Geometry::Rectangle(r) => is_point_near_rectangle(point, r, tolerance),
        Geometry::Circle(c) => c.distance_to_point(point).abs() <= tolerance,
        Geometry::Arc(a) => is_point_near_arc(point, a, tolerance),
        Geometry::Ellipse(e) => is_point_near_ellipse(point, e, tolerance),
        Geometry::Polyline(pl) => pl.distance_to_point(point) <= tolerance,
        Geometry::Spline(s) => s.distance_to_point(point) <= tolerance,
        Geometry::Text(t) => t.contains_point(point, tolerance),
        Geometry::Dimension(d) => is_point_near_dimension(point, d, tolerance),
        Geometry::Hatch(h) => h.distance_to_point(point) <= tolerance,
    }
}

/// 矩形命中：变换到未旋转局部坐标系后测试四条边
///
/// 只测边，未填充矩形的内部点击不算命中。
fn is_point_near_rectangle(point: &Point2, rect: &Rectangle, tolerance: f64) -> bool {
    let local = rect.to_local(point);
    let hw = rect.width / 2.0;
    let hh = rect.height / 2.0;

    // 局部坐标系下四条边的距离
    let dx = local.x.abs() - hw;
    let dy = local.y.abs() - hh;

    if dx <= 0.0 && dy <= 0.0 {
        // 点在矩形内：离最近边的距离
        (-dx).min(-dy) <= tolerance
    } else {
        // 点在矩形外：到边界的距离
        let cx = dx.max(0.0);
        let cy = dy.max(0.0);
        (cx * cx + cy * cy).sqrt() <= tolerance
    }
}

/// 圆弧命中：半径测试 + 带松弛的角度范围测试
///
/// 起始角大于终止角（跨越 0°）时按环绕处理。
fn is_point_near_arc(point: &Point2, arc: &Arc, tolerance: f64) -> bool {
    let dist = (point - arc.center).norm();
    if (dist - arc.radius).abs() > tolerance {
        return false;
    }

    let angle = (point.y - arc.center.y).atan2(point.x - arc.center.x);
    arc_range_contains(arc.start_angle, arc.end_angle, angle, ANGULAR_SLACK)
}

/// 检查角度是否落在逆时针弧范围内（两端各放宽 `slack`）
fn arc_range_contains(start_angle: f64, end_angle: f64, angle: f64, slack: f64) -> bool {
    let sweep = normalize_angle(end_angle - start_angle);
    let offset = normalize_angle(angle - start_angle);
    offset <= sweep + slack || offset >= 2.0 * std::f64::consts::PI - slack
}

/// 椭圆命中：局部坐标系下的隐式方程近似
///
/// 以 `|√((x/rx)² + (y/ry)²) - 1| ≤ tol / 平均半径` 判定，
/// 不是真实几何距离，但在交互容差下足够准确。
fn is_point_near_ellipse(point: &Point2, ellipse: &Ellipse, tolerance: f64) -> bool {
    let rx = ellipse.major_radius();
    let ry = ellipse.minor_radius();
    if rx < EPSILON || ry < EPSILON {
        return (point - ellipse.center).norm() <= tolerance;
    }

    // 变换到椭圆局部坐标系
    let rot = ellipse.rotation();
    let cos_r = rot.cos();
    let sin_r = rot.sin();
    let dx = point.x - ellipse.center.x;
    let dy = point.y - ellipse.center.y;
    let local_x = dx * cos_r + dy * sin_r;
    let local_y = -dx * sin_r + dy * cos_r;

    let value = ((local_x / rx).powi(2) + (local_y / ry).powi(2)).sqrt();
    let mean_radius = (rx + ry) / 2.0;
    if (value - 1.0).abs() > tolerance / mean_radius {
        return false;
    }

    // 椭圆弧还需检查参数范围
    if !ellipse.is_full() {
        let t = (local_y / ry).atan2(local_x / rx);
        return arc_range_contains(ellipse.start_param, ellipse.end_param, t, ANGULAR_SLACK);
    }

    true
}

/// 标注命中：重建布局后测试标注线、延伸线、测量弧和文本锚点
///
/// 文本锚点使用以文本高度为基准的宽松半径，保证标注文字好点选。
fn is_point_near_dimension(point: &Point2, dimension: &Dimension, tolerance: f64) -> bool {
    let Some(geometry) = dimension.layout() else {
        return false;
    };

    if let Some(arc) = &geometry.arc {
        // 角度/弧长标注：测量弧按普通弧逻辑测试
        let dist = (point - arc.center).norm();
        if (dist - arc.radius).abs() <= tolerance
            && arc_range_contains(arc.start_angle, arc.end_angle,
                (point.y - arc.center.y).atan2(point.x - arc.center.x), ANGULAR_SLACK)
        {
            return true;
        }
    } else if geometry.dimension_line.distance_to_point(point) <= tolerance {
        return true;
    }

    for line in &geometry.extension_lines {
        if line.distance_to_point(point) <= tolerance {
            return true;
        }
    }

    for line in &geometry.center_marks {
        if line.distance_to_point(point) <= tolerance {
            return true;
        }
    }

    let text_radius = tolerance.max(dimension.style.text_height);
    (geometry.text_anchor - point).norm() <= text_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionType;
    use crate::geometry::{Circle, Line, Polyline, Text};
    use crate::math::Vector2;

    #[test]
    fn test_line_hit() {
        let line = Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)));
        assert!(is_point_near_shape(&Point2::new(5.0, 0.5), &line, 1.0));
        assert!(!is_point_near_shape(&Point2::new(5.0, 2.0), &line, 1.0));
        // 投影被钳制到线段端点
        assert!(!is_point_near_shape(&Point2::new(15.0, 0.0), &line, 1.0));
    }

    #[test]
    fn test_tolerance_monotonic() {
        // 点到线段的精确距离为 3：容差 ≥ 3 命中，< 3 不命中
        let line = Geometry::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)));
        let p = Point2::new(5.0, 3.0);

        assert!(!is_point_near_shape(&p, &line, 2.999));
        assert!(is_point_near_shape(&p, &line, 3.0));
        assert!(is_point_near_shape(&p, &line, 3.001));
        assert!(is_point_near_shape(&p, &line, 100.0));
    }

    #[test]
    fn test_translation_invariance() {
        let offset = Vector2::new(137.5, -42.25);
        let p = Point2::new(5.0, 2.9);

        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let moved = Line::new(line.start + offset, line.end + offset);
        assert_eq!(
            is_point_near_shape(&p, &Geometry::Line(line), 3.0),
            is_point_near_shape(&(p + offset), &Geometry::Line(moved), 3.0),
        );

        let circle = Circle::new(Point2::new(2.0, 2.0), 5.0);
        let moved = Circle::new(circle.center + offset, circle.radius);
        assert_eq!(
            is_point_near_shape(&p, &Geometry::Circle(circle), 0.5),
            is_point_near_shape(&(p + offset), &Geometry::Circle(moved), 0.5),
        );
    }

    #[test]
    fn test_circle_circumference_only() {
        let circle = Geometry::Circle(Circle::new(Point2::origin(), 10.0));
        // 圆心不命中，圆周命中
        assert!(!is_point_near_shape(&Point2::origin(), &circle, 1.0));
        assert!(is_point_near_shape(&Point2::new(10.5, 0.0), &circle, 1.0));
        assert!(is_point_near_shape(&Point2::new(0.0, -9.5), &circle, 1.0));
    }

    #[test]
    fn test_rectangle_edges_only() {
        let rect = Geometry::Rectangle(Rectangle::new(Point2::origin(), 20.0, 10.0));
        // 内部点击不命中
        assert!(!is_point_near_shape(&Point2::origin(), &rect, 1.0));
        // 边上命中
        assert!(is_point_near_shape(&Point2::new(10.0, 0.0), &rect, 1.0));
        assert!(is_point_near_shape(&Point2::new(0.0, 5.5), &rect, 1.0));
        // 外部远离不命中
        assert!(!is_point_near_shape(&Point2::new(15.0, 0.0), &rect, 1.0));
    }

    #[test]
    fn test_rotated_rectangle() {
        let rect = Geometry::Rectangle(
            Rectangle::new(Point2::origin(), 20.0, 10.0)
                .with_rotation(std::f64::consts::FRAC_PI_2),
        );
        // 旋转90度后，宽沿 y 方向：(0, 10) 在边上
        assert!(is_point_near_shape(&Point2::new(0.0, 10.0), &rect, 0.5));
        assert!(!is_point_near_shape(&Point2::new(10.0, 0.0), &rect, 0.5));
    }

    #[test]
    fn test_arc_angular_range_with_slack() {
        // 第一象限的四分之一圆弧
        let arc = Geometry::Arc(Arc::new(
            Point2::origin(),
            10.0,
            0.0,
            std::f64::consts::FRAC_PI_2,
        ));

        // 弧上
        let a = std::f64::consts::FRAC_PI_4;
        assert!(is_point_near_shape(
            &Point2::new(10.0 * a.cos(), 10.0 * a.sin()),
            &arc,
            0.5
        ));
        // 越过端点但在松弛范围内（0.05 rad < 0.1 rad）
        let a = std::f64::consts::FRAC_PI_2 + 0.05;
        assert!(is_point_near_shape(
            &Point2::new(10.0 * a.cos(), 10.0 * a.sin()),
            &arc,
            0.5
        ));
        // 超出松弛范围
        let a = std::f64::consts::FRAC_PI_2 + 0.2;
        assert!(!is_point_near_shape(
            &Point2::new(10.0 * a.cos(), 10.0 * a.sin()),
            &arc,
            0.5
        ));
    }

    #[test]
    fn test_arc_wraparound() {
        // 跨越 0° 的弧：从 300° 到 60°
        let arc = Geometry::Arc(Arc::new(
            Point2::origin(),
            10.0,
            5.0 * std::f64::consts::FRAC_PI_3,
            std::f64::consts::FRAC_PI_3,
        ));
        // 0° 方向在弧上
        assert!(is_point_near_shape(&Point2::new(10.0, 0.0), &arc, 0.5));
        // 180° 方向不在弧上
        assert!(!is_point_near_shape(&Point2::new(-10.0, 0.0), &arc, 0.5));
    }

    #[test]
    fn test_ellipse_implicit_form() {
        let ellipse = Geometry::Ellipse(Ellipse::from_radii(Point2::origin(), 4.0, 2.0));

        assert!(is_point_near_shape(&Point2::new(4.05, 0.0), &ellipse, 0.3));
        assert!(is_point_near_shape(&Point2::new(0.0, -2.05), &ellipse, 0.3));
        // 椭圆内部中心不命中
        assert!(!is_point_near_shape(&Point2::origin(), &ellipse, 0.3));
    }

    #[test]
    fn test_polyline_hit() {
        let pl = Geometry::Polyline(Polyline::from_points(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ],
            false,
        ));
        assert!(is_point_near_shape(&Point2::new(10.2, 5.0), &pl, 0.5));
        assert!(!is_point_near_shape(&Point2::new(5.0, 5.0), &pl, 0.5));
    }

    #[test]
    fn test_text_hit_uses_measured_bounds() {
        let text = Geometry::Text(Text::new(Point2::new(0.0, 0.0), "ABC", 10.0));
        // 文本框内（左对齐，基线在插入点）
        assert!(is_point_near_shape(&Point2::new(5.0, 3.0), &text, 0.5));
        // 文本框上方远处
        assert!(!is_point_near_shape(&Point2::new(5.0, 30.0), &text, 0.5));
        // 插入点左侧（左对齐文本不延伸到左边）
        assert!(!is_point_near_shape(&Point2::new(-10.0, 3.0), &text, 0.5));
    }

    #[test]
    fn test_dimension_hit() {
        let dim = Dimension::new(
            DimensionType::Linear,
            vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)],
            20.0,
        );
        let shape = Geometry::Dimension(dim);

        // 标注线上
        assert!(is_point_near_shape(&Point2::new(50.0, 20.0), &shape, 1.0));
        // 延伸线上
        assert!(is_point_near_shape(&Point2::new(0.0, 10.0), &shape, 1.0));
        // 文本锚点附近（宽松半径 = 文本高度）
        assert!(is_point_near_shape(&Point2::new(51.0, 23.5), &shape, 1.0));
        // 远处
        assert!(!is_point_near_shape(&Point2::new(50.0, 50.0), &shape, 1.0));
    }

    #[test]
    fn test_angular_dimension_arc_hit() {
        let dim = Dimension::new(
            DimensionType::Angular,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(20.0, 0.0),
                Point2::new(0.0, 20.0),
            ],
            10.0,
        );
        let shape = Geometry::Dimension(dim);

        // 测量弧上（45° 方向，半径10）
        let a = std::f64::consts::FRAC_PI_4;
        assert!(is_point_near_shape(
            &Point2::new(10.0 * a.cos(), 10.0 * a.sin()),
            &shape,
            1.0
        ));
        // 弧的角度范围外（135° 方向）
        let a = 3.0 * std::f64::consts::FRAC_PI_4;
        assert!(!is_point_near_shape(
            &Point2::new(10.0 * a.cos(), 10.0 * a.sin()),
            &shape,
            1.0
        ));
    }

    #[test]
    fn test_zero_length_line_degrades_to_point() {
        let line = Geometry::Line(Line::new(Point2::new(3.0, 3.0), Point2::new(3.0, 3.0)));
        assert!(is_point_near_shape(&Point2::new(3.5, 3.0), &line, 1.0));
        assert!(!is_point_near_shape(&Point2::new(6.0, 3.0), &line, 1.0));
    }
}
