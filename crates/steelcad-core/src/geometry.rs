//! 几何图元定义
//!
//! 支持的基本图元：
//! - 点 (Point)
//! - 线段 (Line)
//! - 矩形 (Rectangle)
//! - 圆 (Circle)
//! - 圆弧 (Arc)
//! - 椭圆 (Ellipse)
//! - 多段线 (Polyline)
//! - 样条曲线 (Spline)
//! - 文本 (Text)
//! - 尺寸标注 (Dimension)
//! - 填充 (Hatch)

use crate::curve;
use crate::dimension::Dimension;
use crate::math::{normalize_angle, BoundingBox2, Point2, Vector2, EPSILON};
use crate::text_metrics;
use serde::{Deserialize, Serialize};

/// 图元ID
///
/// 内核不持有图元集合，ID 只作为关联标注引用的句柄。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// 分配一个新的ID
    pub fn new() -> Self {
        static NEXT_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }

    pub fn null() -> Self {
        Self(0)
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

/// 几何类型枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Spline(Spline),
    Text(Text),
    Dimension(Dimension),
    Hatch(Hatch),
}

impl Geometry {
    /// 获取几何的包围盒
    pub fn bounding_box(&self) -> BoundingBox2 {
        match self {
            Geometry::Point(p) => p.bounding_box(),
            Geometry::Line(l) => l.bounding_box(),
            Geometry::Rectangle(r) => r.bounding_box(),
            Geometry::Circle(c) => c.bounding_box(),
            Geometry::Arc(a) => a.bounding_box(),
            Geometry::Ellipse(e) => e.bounding_box(),
            Geometry::Polyline(pl) => pl.bounding_box(),
            Geometry::Spline(s) => s.bounding_box(),
            Geometry::Text(t) => t.bounding_box(),
            Geometry::Dimension(d) => d.bounding_box(),
            Geometry::Hatch(h) => h.bounding_box(),
        }
    }

    /// 获取几何的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Line(_) => "Line",
            Geometry::Rectangle(_) => "Rectangle",
            Geometry::Circle(_) => "Circle",
            Geometry::Arc(_) => "Arc",
            Geometry::Ellipse(_) => "Ellipse",
            Geometry::Polyline(_) => "Polyline",
            Geometry::Spline(_) => "Spline",
            Geometry::Text(_) => "Text",
            Geometry::Dimension(_) => "Dimension",
            Geometry::Hatch(_) => "Hatch",
        }
    }
}

/// 点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::new(self.position, self.position)
    }
}

/// 线段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// 计算线段方向向量（单位向量）
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    /// 计算线段中点
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// 计算点到线段的距离
    ///
    /// 零长度线段退化为点距离测试。
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        let v = self.end - self.start;
        let w = point - self.start;

        let c1 = w.dot(&v);
        if c1 <= 0.0 {
            return (point - self.start).norm();
        }

        let c2 = v.dot(&v);
        if c2 <= c1 {
            return (point - self.end).norm();
        }

        let b = c1 / c2;
        let pb = self.start + v * b;
        (point - pb).norm()
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.start, self.end])
    }
}

/// 矩形（支持旋转）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    /// 中心点
    pub center: Point2,
    pub width: f64,
    pub height: f64,
    /// 旋转角度（弧度）
    pub rotation: f64,
}

impl Rectangle {
    pub fn new(center: Point2, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// 从两个对角点构造（无旋转）
    pub fn from_corners(p1: Point2, p2: Point2) -> Self {
        Self {
            center: Point2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0),
            width: (p2.x - p1.x).abs(),
            height: (p2.y - p1.y).abs(),
            rotation: 0.0,
        }
    }

    /// 四个角点（世界坐标，逆时针）
    pub fn corners(&self) -> [Point2; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();

        let local = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];
        local.map(|(x, y)| {
            Point2::new(
                self.center.x + x * cos_r - y * sin_r,
                self.center.y + x * sin_r + y * cos_r,
            )
        })
    }

    /// 四条边（逆时针）
    pub fn edges(&self) -> [Line; 4] {
        let c = self.corners();
        [
            Line::new(c[0], c[1]),
            Line::new(c[1], c[2]),
            Line::new(c[2], c[3]),
            Line::new(c[3], c[0]),
        ]
    }

    /// 将世界坐标点变换到矩形的未旋转局部坐标系（原点在矩形中心）
    pub fn to_local(&self, point: &Point2) -> Point2 {
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        Point2::new(dx * cos_r + dy * sin_r, -dx * sin_r + dy * cos_r)
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points(self.corners())
    }
}

/// 圆
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// 计算周长
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// 计算点到圆的距离（负值表示在圆内）
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        (point - self.center).norm() - self.radius
    }

    /// 获取圆上指定角度的点
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::new(
            Point2::new(self.center.x - self.radius, self.center.y - self.radius),
            Point2::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }
}

/// 圆弧
///
/// 始终从 `start_angle` 逆时针扫向 `end_angle`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    /// 起始角度（弧度）
    pub start_angle: f64,
    /// 终止角度（弧度）
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// 从三点创建圆弧（起点、通过点、终点）
    pub fn from_three_points(start: Point2, mid: Point2, end: Point2) -> Option<Self> {
        curve::arc_from_three_points(&start, &mid, &end)
    }

    /// 计算弧长
    pub fn length(&self) -> f64 {
        self.sweep_angle().abs() * self.radius
    }

    /// 计算扫过的角度（归一化到 [0, 2π)）
    pub fn sweep_angle(&self) -> f64 {
        normalize_angle(self.end_angle - self.start_angle)
    }

    /// 获取起点
    pub fn start_point(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    /// 获取终点
    pub fn end_point(&self) -> Point2 {
        self.point_at_angle(self.end_angle)
    }

    /// 获取弧所在圆上指定角度的点
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// 计算点到圆弧的距离
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        let angle = (point.y - self.center.y).atan2(point.x - self.center.x);

        // 检查角度是否在弧的范围内
        if self.contains_angle(angle) {
            ((point - self.center).norm() - self.radius).abs()
        } else {
            // 返回到端点的最小距离
            let d1 = (point - self.start_point()).norm();
            let d2 = (point - self.end_point()).norm();
            d1.min(d2)
        }
    }

    /// 检查角度是否在弧的范围内
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = normalize_angle(angle);
        let start = normalize_angle(self.start_angle);
        let end = normalize_angle(self.end_angle);

        if start <= end {
            a >= start && a <= end
        } else {
            // 弧跨越 0°
            a >= start || a <= end
        }
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        let mut bbox = BoundingBox2::from_points([self.start_point(), self.end_point()]);

        // 检查象限点
        let pi = std::f64::consts::PI;
        for angle in [0.0, pi / 2.0, pi, 3.0 * pi / 2.0] {
            if self.contains_angle(angle) {
                bbox.expand_to_include(&self.point_at_angle(angle));
            }
        }

        bbox
    }
}

/// 椭圆
///
/// 支持完整椭圆和椭圆弧，使用 DXF 兼容的参数化方式：
/// 中心点 + 长轴端点（相对向量）+ 短轴比例。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    /// 中心点
    pub center: Point2,
    /// 长轴端点（相对于中心的向量）
    pub major_axis: Vector2,
    /// 短轴与长轴的比例 (0.0 < ratio <= 1.0)
    pub ratio: f64,
    /// 起始参数（弧度，0.0 表示长轴正方向）
    pub start_param: f64,
    /// 终止参数（弧度，2π 表示完整椭圆）
    pub end_param: f64,
}

impl Ellipse {
    /// 创建完整椭圆
    pub fn new(center: Point2, major_axis: Vector2, ratio: f64) -> Self {
        Self {
            center,
            major_axis,
            ratio: ratio.clamp(EPSILON, 1.0),
            start_param: 0.0,
            end_param: 2.0 * std::f64::consts::PI,
        }
    }

    /// 创建椭圆弧
    pub fn arc(
        center: Point2,
        major_axis: Vector2,
        ratio: f64,
        start_param: f64,
        end_param: f64,
    ) -> Self {
        Self {
            center,
            major_axis,
            ratio: ratio.clamp(EPSILON, 1.0),
            start_param,
            end_param,
        }
    }

    /// 从轴长创建椭圆（水平长轴）
    pub fn from_radii(center: Point2, major_radius: f64, minor_radius: f64) -> Self {
        let ratio = minor_radius / major_radius;
        Self::new(center, Vector2::new(major_radius, 0.0), ratio)
    }

    /// 获取长轴半径
    pub fn major_radius(&self) -> f64 {
        self.major_axis.norm()
    }

    /// 获取短轴半径
    pub fn minor_radius(&self) -> f64 {
        self.major_radius() * self.ratio
    }

    /// 获取长轴旋转角度（相对于X轴）
    pub fn rotation(&self) -> f64 {
        self.major_axis.y.atan2(self.major_axis.x)
    }

    /// 是否是完整椭圆
    pub fn is_full(&self) -> bool {
        (self.end_param - self.start_param - 2.0 * std::f64::consts::PI).abs() < EPSILON
    }

    /// 获取椭圆上指定参数的点
    ///
    /// 参数 t 是椭圆的参数化角度，不是真正的几何角度。
    pub fn point_at_param(&self, t: f64) -> Point2 {
        let rot = self.rotation();
        let cos_r = rot.cos();
        let sin_r = rot.sin();
        let a = self.major_radius();
        let b = self.minor_radius();
        let x = a * t.cos();
        let y = b * t.sin();
        Point2::new(
            self.center.x + x * cos_r - y * sin_r,
            self.center.y + x * sin_r + y * cos_r,
        )
    }

    /// 获取椭圆上的采样点（用于渲染）
    pub fn sample_points(&self, segments: usize) -> Vec<Point2> {
        let mut points = Vec::with_capacity(segments + 1);
        let range = self.end_param - self.start_param;

        for i in 0..=segments {
            let t = self.start_param + range * (i as f64) / (segments as f64);
            points.push(self.point_at_param(t));
        }

        points
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        let rot = self.rotation();
        let cos_r = rot.cos();
        let sin_r = rot.sin();
        let a = self.major_radius();
        let b = self.minor_radius();

        // 椭圆在 x, y 方向的极值
        let dx = (a * a * cos_r * cos_r + b * b * sin_r * sin_r).sqrt();
        let dy = (a * a * sin_r * sin_r + b * b * cos_r * cos_r).sqrt();

        if self.is_full() {
            BoundingBox2::new(
                Point2::new(self.center.x - dx, self.center.y - dy),
                Point2::new(self.center.x + dx, self.center.y + dy),
            )
        } else {
            // 椭圆弧：采样点计算包围盒
            BoundingBox2::from_points(self.sample_points(32))
        }
    }
}

/// 多段线顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineVertex {
    pub point: Point2,
    /// 凸度（bulge）- 到下一顶点的弧线段曲率，0表示直线
    ///
    /// 定义为 tan(包含角/4)，符号为转向（正 = 逆时针）。
    pub bulge: f64,
}

impl PolylineVertex {
    pub fn new(point: Point2) -> Self {
        Self { point, bulge: 0.0 }
    }

    pub fn with_bulge(point: Point2, bulge: f64) -> Self {
        Self { point, bulge }
    }
}

/// 多段线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<PolylineVertex>,
    /// 是否闭合
    pub closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<PolylineVertex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// 从点列表创建（所有顶点都是直线连接）
    pub fn from_points(points: impl IntoIterator<Item = Point2>, closed: bool) -> Self {
        Self {
            vertices: points.into_iter().map(PolylineVertex::new).collect(),
            closed,
        }
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 线段数量
    pub fn segment_count(&self) -> usize {
        if self.vertices.len() < 2 {
            return 0;
        }
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len() - 1
        }
    }

    /// 计算总长度
    pub fn length(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }

        let mut total = 0.0;
        for i in 0..self.segment_count() {
            let v1 = &self.vertices[i];
            let v2 = &self.vertices[(i + 1) % self.vertices.len()];

            if v1.bulge.abs() < EPSILON {
                // 直线段
                total += (v2.point - v1.point).norm();
            } else if let Some(arc) = curve::arc_from_bulge(&v1.point, &v2.point, v1.bulge) {
                total += arc.length();
            } else {
                total += (v2.point - v1.point).norm();
            }
        }
        total
    }

    /// 计算点到多段线的距离
    ///
    /// 弧线段按直线近似（命中测试容差下可接受）。
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        if self.vertices.is_empty() {
            return f64::MAX;
        }
        if self.vertices.len() == 1 {
            return (point - self.vertices[0].point).norm();
        }

        let mut min_dist = f64::MAX;
        for i in 0..self.segment_count() {
            let v1 = &self.vertices[i];
            let v2 = &self.vertices[(i + 1) % self.vertices.len()];

            let line = Line::new(v1.point, v2.point);
            min_dist = min_dist.min(line.distance_to_point(point));
        }
        min_dist
    }

    /// 爆炸为独立的线段/圆弧
    pub fn explode(&self) -> Vec<Geometry> {
        if self.vertices.len() < 2 {
            return vec![];
        }

        let mut result = Vec::with_capacity(self.segment_count());

        for i in 0..self.segment_count() {
            let v1 = &self.vertices[i];
            let v2 = &self.vertices[(i + 1) % self.vertices.len()];

            if v1.bulge.abs() < EPSILON {
                // 直线段
                result.push(Geometry::Line(Line::new(v1.point, v2.point)));
            } else if let Some(arc) = curve::arc_from_bulge(&v1.point, &v2.point, v1.bulge) {
                result.push(Geometry::Arc(arc));
            } else {
                // 退化弧回退到直线
                result.push(Geometry::Line(Line::new(v1.point, v2.point)));
            }
        }

        result
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        if self.vertices.is_empty() {
            return BoundingBox2::empty();
        }
        BoundingBox2::from_points(self.vertices.iter().map(|v| v.point))
    }
}

/// 样条曲线
///
/// B-样条曲线，使用 De Boor 算法求值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spline {
    /// 曲线阶数（通常为 3）
    pub degree: u8,
    /// 控制点
    pub control_points: Vec<Point2>,
    /// 节点向量（knot vector）
    pub knots: Vec<f64>,
    /// 是否闭合
    pub closed: bool,
    /// 拟合点（用于样条拟合）
    pub fit_points: Vec<Point2>,
}

impl Spline {
    /// 从控制点创建 B-样条（自动生成 clamped 均匀节点向量）
    ///
    /// 首尾节点各重复 degree+1 次，曲线经过首尾控制点。
    /// 控制点不足时阶数自动降到 点数-1。
    pub fn from_control_points(control_points: Vec<Point2>, degree: u8, closed: bool) -> Self {
        let n = control_points.len();
        let k = (degree as usize).min(n.saturating_sub(1));

        let num_knots = n + k + 1;
        let mut knots = Vec::with_capacity(num_knots);

        for i in 0..num_knots {
            if i <= k {
                knots.push(0.0);
            } else if i >= n {
                knots.push((n - k) as f64);
            } else {
                knots.push((i - k) as f64);
            }
        }

        Self {
            degree: k as u8,
            control_points,
            knots,
            closed,
            fit_points: Vec::new(),
        }
    }

    /// 使用 De Boor 算法计算样条曲线上的点
    pub fn point_at_param(&self, t: f64) -> Point2 {
        if self.control_points.is_empty() {
            return Point2::origin();
        }

        if self.control_points.len() == 1 {
            return self.control_points[0];
        }

        let n = self.control_points.len();
        let k = self.degree as usize;

        // 找到 t 所在的区间
        let mut span = k;
        while span < n && self.knots.get(span + 1).map_or(false, |&kv| kv <= t) {
            span += 1;
        }
        span = span.min(n - 1);

        // De Boor 算法
        let mut d: Vec<Point2> = (0..=k)
            .filter_map(|i| {
                let idx = span.saturating_sub(k) + i;
                self.control_points.get(idx).copied()
            })
            .collect();

        if d.len() <= k {
            return self.control_points.last().copied().unwrap_or(Point2::origin());
        }

        for r in 1..=k {
            for j in (r..=k).rev() {
                let idx = span.saturating_sub(k) + j;
                let left = self.knots.get(idx).copied().unwrap_or(0.0);
                let right = self.knots.get(idx + k + 1 - r).copied().unwrap_or(1.0);

                let denom = right - left;
                if denom.abs() < EPSILON {
                    continue;
                }

                let alpha = (t - left) / denom;

                if j < d.len() {
                    d[j] = Point2::new(
                        (1.0 - alpha) * d[j - 1].x + alpha * d[j].x,
                        (1.0 - alpha) * d[j - 1].y + alpha * d[j].y,
                    );
                }
            }
        }

        d.get(k).copied().unwrap_or(Point2::origin())
    }

    /// 获取参数范围
    pub fn param_range(&self) -> (f64, f64) {
        let k = self.degree as usize;
        let start = self.knots.get(k).copied().unwrap_or(0.0);
        let end = self
            .knots
            .get(self.knots.len().saturating_sub(k + 1))
            .copied()
            .unwrap_or(1.0);
        (start, end)
    }

    /// 获取采样点（用于渲染和命中测试）
    pub fn sample_points(&self, segments: usize) -> Vec<Point2> {
        let mut points = Vec::with_capacity(segments + 1);
        let (start, end) = self.param_range();

        for i in 0..=segments {
            let t = start + (end - start) * (i as f64) / (segments as f64);
            points.push(self.point_at_param(t));
        }

        points
    }

    /// 计算点到样条曲线的距离（采样近似）
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        let samples = self.sample_points(64);

        let mut min_dist = f64::MAX;
        for i in 0..samples.len().saturating_sub(1) {
            let line = Line::new(samples[i], samples[i + 1]);
            min_dist = min_dist.min(line.distance_to_point(point));
        }

        min_dist
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        if self.control_points.is_empty() {
            return BoundingBox2::empty();
        }

        // 控制点是保守估计，补充采样点收紧
        let mut bbox = BoundingBox2::from_points(self.control_points.iter().copied());
        for pt in self.sample_points(32) {
            bbox.expand_to_include(&pt);
        }

        bbox
    }
}

/// 文本对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextAlignment {
    /// 左对齐（默认）
    #[default]
    Left,
    /// 居中对齐
    Center,
    /// 右对齐
    Right,
}

/// 文本垂直对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAlignment {
    /// 基线对齐（默认）
    #[default]
    Baseline,
    /// 底部对齐
    Bottom,
    /// 居中对齐
    Middle,
    /// 顶部对齐
    Top,
}

/// 文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// 插入点
    pub position: Point2,
    /// 文本内容（`\n` 分隔多行）
    pub content: String,
    /// 文本高度
    pub height: f64,
    /// 旋转角度（弧度）
    pub rotation: f64,
    /// 水平对齐方式
    pub alignment: TextAlignment,
    /// 垂直对齐方式
    pub vertical_alignment: VerticalAlignment,
}

impl Text {
    /// 创建新的文本对象
    pub fn new(position: Point2, content: impl Into<String>, height: f64) -> Self {
        Self {
            position,
            content: content.into(),
            height,
            rotation: 0.0,
            alignment: TextAlignment::Left,
            vertical_alignment: VerticalAlignment::Baseline,
        }
    }

    /// 设置旋转角度
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// 设置对齐方式
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// 设置垂直对齐方式
    pub fn with_vertical_alignment(mut self, vertical_alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = vertical_alignment;
        self
    }

    /// 文本块度量（最长行宽度、上伸/下降高度）
    pub fn block_metrics(&self) -> text_metrics::BlockMetrics {
        text_metrics::measure_block(&self.content, self.height)
    }

    /// 未旋转局部坐标系下的文本框（相对于插入点）
    ///
    /// 水平对齐决定插入点在宽度方向的位置，垂直对齐决定基准行。
    pub fn local_bounds(&self) -> BoundingBox2 {
        let metrics = self.block_metrics();
        let width = metrics.width;
        let top = match self.vertical_alignment {
            VerticalAlignment::Baseline => metrics.ascent,
            VerticalAlignment::Bottom => metrics.height(),
            VerticalAlignment::Middle => metrics.height() / 2.0,
            VerticalAlignment::Top => 0.0,
        };
        let base_x = match self.alignment {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => -width / 2.0,
            TextAlignment::Right => -width,
        };
        BoundingBox2::new(
            Point2::new(base_x, top - metrics.height()),
            Point2::new(base_x + width, top),
        )
    }

    /// 获取包围盒（世界坐标）
    pub fn bounding_box(&self) -> BoundingBox2 {
        let local = self.local_bounds();
        let corners = [
            Point2::new(local.min.x, local.min.y),
            Point2::new(local.max.x, local.min.y),
            Point2::new(local.max.x, local.max.y),
            Point2::new(local.min.x, local.max.y),
        ];

        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();

        BoundingBox2::from_points(corners.iter().map(|p| {
            Point2::new(
                self.position.x + p.x * cos_r - p.y * sin_r,
                self.position.y + p.x * sin_r + p.y * cos_r,
            )
        }))
    }

    /// 检查点是否在文本包围盒内（考虑容差）
    pub fn contains_point(&self, point: &Point2, tolerance: f64) -> bool {
        // 在未旋转的局部坐标系内测试，旋转文本无需近似包围盒
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        let local = Point2::new(dx * cos_r + dy * sin_r, -dx * sin_r + dy * cos_r);

        self.local_bounds().expanded(tolerance).contains(&local)
    }
}

/// 填充边界
///
/// 每个边界是一条闭合多段线（弧线段由顶点凸度描述）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hatch {
    /// 边界环（第一个为外环，其余为岛）
    pub boundaries: Vec<Polyline>,
    /// 图案名称（SOLID、ANSI31 等）
    pub pattern_name: String,
    /// 图案角度（弧度）
    pub pattern_angle: f64,
    /// 图案比例
    pub pattern_scale: f64,
}

impl Hatch {
    pub fn new(boundaries: Vec<Polyline>, pattern_name: impl Into<String>) -> Self {
        Self {
            boundaries,
            pattern_name: pattern_name.into(),
            pattern_angle: 0.0,
            pattern_scale: 1.0,
        }
    }

    /// 计算点到填充边界的距离
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        self.boundaries
            .iter()
            .map(|b| b.distance_to_point(point))
            .fold(f64::MAX, f64::min)
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        let mut bbox = BoundingBox2::empty();
        for boundary in &self.boundaries {
            bbox = bbox.union(&boundary.bounding_box());
        }
        bbox
    }
}
