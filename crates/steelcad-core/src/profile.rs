//! 参数化型钢截面生成器
//!
//! 截面种类通过字符串注册表分发，每种截面一个生成函数：
//! 在局部坐标系内按固定绕向走出轮廓（外环逆时针、内环顺时针），
//! 尖角直接落点，圆角插入离散圆弧并记录 [`ArcSegmentInfo`]，
//! 最后统一应用 缩放 -> 旋转 -> 平移 变换到世界坐标。
//!
//! 支持的截面：
//! - 工字钢 (ibeam)
//! - 槽钢 (channel)
//! - 角钢 (angle)
//! - T型钢 (tee)
//! - 方管 (rect-tube)
//! - 圆管 (round-tube)
//! - 扁钢 (plate)
//! - 圆钢 (round-bar)
//!
//! 未注册的截面种类返回空几何（调用方渲染占位符），不报错。

use crate::curve;
use crate::error::GeometryError;
use crate::math::{BoundingBox2, Point2, Vector2, EPSILON};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::SystemTime;

/// 圆角离散段数
const FILLET_SEGMENTS: usize = 6;

/// 圆截面离散段数
const CIRCLE_SEGMENTS: usize = 32;

/// 轮廓中一段离散圆弧的元数据
///
/// 记录 `[start_index..=end_index]` 的点近似一段真实圆弧，
/// 后续"爆炸为可编辑图元"时据此恢复精确圆弧而不是留下折线。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegmentInfo {
    /// 圆弧第一个点在轮廓中的下标
    pub start_index: usize,
    /// 圆弧最后一个点在轮廓中的下标
    pub end_index: usize,
    pub center: Point2,
    pub radius: f64,
    /// 按轮廓走向的起始角
    pub start_angle: f64,
    /// 按轮廓走向的终止角
    pub end_angle: f64,
}

/// 截面生成结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedGeometry {
    /// 轮廓点序列（空心截面为 外环 + 内环）
    pub outlines: Vec<Vec<Point2>>,
    /// 各轮廓是否闭合（与 outlines 一一对应）
    pub closed: Vec<bool>,
    /// 整体包围盒
    pub bounds: BoundingBox2,
    /// 生成时间
    pub created_at: SystemTime,
    /// 各轮廓的圆弧段元数据（与 outlines 一一对应）
    pub arc_segments: Vec<Vec<ArcSegmentInfo>>,
}

impl GeneratedGeometry {
    /// 空几何（未知截面种类的返回值）
    pub fn empty() -> Self {
        Self {
            outlines: Vec::new(),
            closed: Vec::new(),
            bounds: BoundingBox2::empty(),
            created_at: SystemTime::now(),
            arc_segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    fn from_outlines(outlines: Vec<(Vec<Point2>, Vec<ArcSegmentInfo>)>) -> Self {
        let mut bounds = BoundingBox2::empty();
        let mut points = Vec::with_capacity(outlines.len());
        let mut arcs = Vec::with_capacity(outlines.len());
        let mut closed = Vec::with_capacity(outlines.len());

        for (outline, arc_infos) in outlines {
            for p in &outline {
                bounds.expand_to_include(p);
            }
            closed.push(true);
            points.push(outline);
            arcs.push(arc_infos);
        }

        Self {
            outlines: points,
            closed,
            bounds,
            created_at: SystemTime::now(),
            arc_segments: arcs,
        }
    }
}

/// 截面参数
///
/// 单一参数结构覆盖所有截面种类，各生成函数只取用自己需要的字段。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileParams {
    /// 总宽度（翼缘宽）
    pub width: f64,
    /// 总高度
    pub height: f64,
    /// 腹板厚度（竖直部分）
    pub web_thickness: f64,
    /// 翼缘厚度（水平部分）
    pub flange_thickness: f64,
    /// 壁厚（管类截面）
    pub wall_thickness: f64,
    /// 圆角半径（0 表示尖角）
    pub fillet_radius: f64,
    /// 外径（圆类截面）
    pub outer_diameter: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 200.0,
            web_thickness: 8.0,
            flange_thickness: 12.0,
            wall_thickness: 6.0,
            fillet_radius: 0.0,
            outer_diameter: 100.0,
        }
    }
}

impl ProfileParams {
    /// 参数合法性检查（供上层命令层在生成前调用）
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::InvalidParameter(
                "width and height must be positive".into(),
            ));
        }
        if self.web_thickness <= 0.0 || self.flange_thickness <= 0.0 {
            return Err(GeometryError::InvalidParameter(
                "thicknesses must be positive".into(),
            ));
        }
        if self.web_thickness >= self.width {
            return Err(GeometryError::InvalidParameter(
                "web thickness must be less than width".into(),
            ));
        }
        if 2.0 * self.flange_thickness >= self.height {
            return Err(GeometryError::InvalidParameter(
                "flanges must leave room for the web".into(),
            ));
        }
        if self.wall_thickness <= 0.0
            || 2.0 * self.wall_thickness >= self.width.min(self.height)
            || 2.0 * self.wall_thickness >= self.outer_diameter
        {
            return Err(GeometryError::InvalidParameter(
                "wall thickness too large for section".into(),
            ));
        }
        if self.fillet_radius < 0.0 {
            return Err(GeometryError::InvalidParameter(
                "fillet radius must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// 截面生成函数：在局部坐标系内构建轮廓
pub type ProfileGenerator = fn(&ProfileParams) -> GeneratedGeometry;

/// 截面注册表
///
/// 字符串种类 -> 生成函数的映射，构造时注册全部内置截面，
/// 允许上层补充注册自定义截面。
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    generators: HashMap<String, ProfileGenerator>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    /// 注册内置截面
    fn register_defaults(&mut self) {
        self.register("ibeam", generate_ibeam);
        self.register("channel", generate_channel);
        self.register("angle", generate_angle);
        self.register("tee", generate_tee);
        self.register("rect-tube", generate_rect_tube);
        self.register("round-tube", generate_round_tube);
        self.register("plate", generate_plate);
        self.register("round-bar", generate_round_bar);
    }

    /// 注册截面生成函数
    pub fn register(&mut self, kind: &str, generator: ProfileGenerator) {
        self.generators.insert(kind.to_string(), generator);
    }

    /// 已注册的截面种类
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.generators.contains_key(kind)
    }

    /// 生成截面轮廓（世界坐标）
    ///
    /// 变换按 缩放 -> 旋转 -> 平移 应用到每个轮廓点和每条圆弧
    /// 元数据。未注册的种类返回空几何。
    pub fn generate(
        &self,
        kind: &str,
        params: &ProfileParams,
        position: Point2,
        rotation: f64,
        scale: f64,
    ) -> GeneratedGeometry {
        let Some(generator) = self.generators.get(kind) else {
            tracing::warn!(kind, "unknown profile kind, returning empty geometry");
            return GeneratedGeometry::empty();
        };

        let transform = Transform2D::new(scale, rotation, Vector2::new(position.x, position.y));
        apply_transform(generator(params), &transform)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 将局部坐标几何变换到世界坐标
fn apply_transform(mut geometry: GeneratedGeometry, transform: &Transform2D) -> GeneratedGeometry {
    let mut bounds = BoundingBox2::empty();

    for outline in &mut geometry.outlines {
        for p in outline.iter_mut() {
            *p = transform.apply(p);
            bounds.expand_to_include(p);
        }
    }

    for arcs in &mut geometry.arc_segments {
        for arc in arcs.iter_mut() {
            arc.center = transform.apply(&arc.center);
            arc.radius = transform.apply_to_length(arc.radius);
            arc.start_angle = transform.apply_to_angle(arc.start_angle);
            arc.end_angle = transform.apply_to_angle(arc.end_angle);
        }
    }

    geometry.bounds = bounds;
    geometry
}

// ========== 轮廓构建 ==========

/// 轮廓构建器：按走向依次落点，圆角处插入离散弧并记录元数据
struct OutlineBuilder {
    points: Vec<Point2>,
    arcs: Vec<ArcSegmentInfo>,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self {
            points: Vec::new(),
            arcs: Vec::new(),
        }
    }

    /// 尖角点
    fn point(&mut self, x: f64, y: f64) {
        self.points.push(Point2::new(x, y));
    }

    /// 圆角：从 `start_angle` 到 `end_angle` 的离散弧
    ///
    /// `clockwise` 指定按轮廓走向的扫向（内凹角顺时针）。
    fn fillet(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        let pts = if clockwise {
            let mut p = curve::arc_points(&center, radius, end_angle, start_angle, FILLET_SEGMENTS);
            p.reverse();
            p
        } else {
            curve::arc_points(&center, radius, start_angle, end_angle, FILLET_SEGMENTS)
        };

        let start_index = self.points.len();
        self.points.extend(pts);
        let end_index = self.points.len() - 1;

        self.arcs.push(ArcSegmentInfo {
            start_index,
            end_index,
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn finish(self) -> (Vec<Point2>, Vec<ArcSegmentInfo>) {
        (self.points, self.arcs)
    }
}

/// 整圆轮廓（圆管/圆钢用）
///
/// 记录一条覆盖整个轮廓的弧元数据，爆炸时可恢复为精确圆。
/// `ccw` 为 false 时反向（内环）。
fn circle_outline(radius: f64, ccw: bool) -> (Vec<Point2>, Vec<ArcSegmentInfo>) {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut points = curve::arc_points(&Point2::origin(), radius, 0.0, 0.0, CIRCLE_SEGMENTS);
    // 闭合轮廓不重复首点
    points.pop();
    if !ccw {
        points.reverse();
        points.rotate_right(1); // 反向后仍从 0° 起点开始
    }

    let arc = ArcSegmentInfo {
        start_index: 0,
        end_index: points.len() - 1,
        center: Point2::origin(),
        radius,
        start_angle: 0.0,
        end_angle: two_pi,
    };

    (points, vec![arc])
}

// ========== 内置截面生成函数 ==========

/// 工字钢
///
/// 12 个角点，4 个腹板-翼缘内圆角。
fn generate_ibeam(params: &ProfileParams) -> GeneratedGeometry {
    let hw = params.width / 2.0;
    let hh = params.height / 2.0;
    let tw = params.web_thickness / 2.0;
    let tf = params.flange_thickness;
    let r = params.fillet_radius;

    let pi = std::f64::consts::PI;
    let half_pi = std::f64::consts::FRAC_PI_2;

    let mut b = OutlineBuilder::new();

    // 从下翼缘左下角起逆时针
    b.point(-hw, -hh);
    b.point(hw, -hh);
    b.point(hw, -hh + tf);
    if r > EPSILON {
        // 右下内角
        b.fillet(
            Point2::new(tw + r, -hh + tf + r),
            r,
            1.5 * pi,
            pi,
            true,
        );
        // 右上内角
        b.fillet(Point2::new(tw + r, hh - tf - r), r, pi, half_pi, true);
    } else {
        b.point(tw, -hh + tf);
        b.point(tw, hh - tf);
    }
    b.point(hw, hh - tf);
    b.point(hw, hh);
    b.point(-hw, hh);
    b.point(-hw, hh - tf);
    if r > EPSILON {
        // 左上内角
        b.fillet(Point2::new(-tw - r, hh - tf - r), r, half_pi, 0.0, true);
        // 左下内角
        b.fillet(
            Point2::new(-tw - r, -hh + tf + r),
            r,
            0.0,
            1.5 * pi,
            true,
        );
    } else {
        b.point(-tw, hh - tf);
        b.point(-tw, -hh + tf);
    }
    b.point(-hw, -hh + tf);

    GeneratedGeometry::from_outlines(vec![b.finish()])
}

/// 槽钢（开口朝右）
///
/// 8 个角点，2 个腹板-翼缘内圆角。
fn generate_channel(params: &ProfileParams) -> GeneratedGeometry {
    let hw = params.width / 2.0;
    let hh = params.height / 2.0;
    let tw = params.web_thickness;
    let tf = params.flange_thickness;
    let r = params.fillet_radius;

    let pi = std::f64::consts::PI;
    let half_pi = std::f64::consts::FRAC_PI_2;

    let mut b = OutlineBuilder::new();

    b.point(-hw, -hh);
    b.point(hw, -hh);
    b.point(hw, -hh + tf);
    if r > EPSILON {
        // 下内角
        b.fillet(
            Point2::new(-hw + tw + r, -hh + tf + r),
            r,
            1.5 * pi,
            pi,
            true,
        );
        // 上内角
        b.fillet(
            Point2::new(-hw + tw + r, hh - tf - r),
            r,
            pi,
            half_pi,
            true,
        );
    } else {
        b.point(-hw + tw, -hh + tf);
        b.point(-hw + tw, hh - tf);
    }
    b.point(hw, hh - tf);
    b.point(hw, hh);
    b.point(-hw, hh);

    GeneratedGeometry::from_outlines(vec![b.finish()])
}

/// 角钢（L型，竖直边在左）
///
/// 6 个角点，1 个内圆角。竖直边厚度取腹板厚度，
/// 水平边厚度取翼缘厚度。
fn generate_angle(params: &ProfileParams) -> GeneratedGeometry {
    let hw = params.width / 2.0;
    let hh = params.height / 2.0;
    let tw = params.web_thickness;
    let tf = params.flange_thickness;
    let r = params.fillet_radius;

    let pi = std::f64::consts::PI;

    let mut b = OutlineBuilder::new();

    b.point(-hw, -hh);
    b.point(hw, -hh);
    b.point(hw, -hh + tf);
    if r > EPSILON {
        b.fillet(
            Point2::new(-hw + tw + r, -hh + tf + r),
            r,
            1.5 * pi,
            pi,
            true,
        );
    } else {
        b.point(-hw + tw, -hh + tf);
    }
    b.point(-hw + tw, hh);
    b.point(-hw, hh);

    GeneratedGeometry::from_outlines(vec![b.finish()])
}

/// T型钢（翼缘在上）
///
/// 8 个角点，2 个腹板-翼缘内圆角。
fn generate_tee(params: &ProfileParams) -> GeneratedGeometry {
    let hw = params.width / 2.0;
    let hh = params.height / 2.0;
    let tw = params.web_thickness / 2.0;
    let tf = params.flange_thickness;
    let r = params.fillet_radius;

    let pi = std::f64::consts::PI;
    let half_pi = std::f64::consts::FRAC_PI_2;

    let mut b = OutlineBuilder::new();

    b.point(-tw, -hh);
    b.point(tw, -hh);
    if r > EPSILON {
        // 右侧腹板-翼缘角
        b.fillet(Point2::new(tw + r, hh - tf - r), r, pi, half_pi, true);
    } else {
        b.point(tw, hh - tf);
    }
    b.point(hw, hh - tf);
    b.point(hw, hh);
    b.point(-hw, hh);
    b.point(-hw, hh - tf);
    if r > EPSILON {
        // 左侧腹板-翼缘角
        b.fillet(Point2::new(-tw - r, hh - tf - r), r, half_pi, 0.0, true);
    } else {
        b.point(-tw, hh - tf);
    }

    GeneratedGeometry::from_outlines(vec![b.finish()])
}

/// 矩形轮廓（外环逆时针），圆角半径为 0 时四个尖角
fn rect_outline_ccw(hw: f64, hh: f64, r: f64) -> (Vec<Point2>, Vec<ArcSegmentInfo>) {
    let pi = std::f64::consts::PI;
    let half_pi = std::f64::consts::FRAC_PI_2;

    let mut b = OutlineBuilder::new();
    if r > EPSILON {
        // 从下边起逆时针，四个外凸圆角
        b.fillet(Point2::new(hw - r, -hh + r), r, 1.5 * pi, 0.0, false);
        b.fillet(Point2::new(hw - r, hh - r), r, 0.0, half_pi, false);
        b.fillet(Point2::new(-hw + r, hh - r), r, half_pi, pi, false);
        b.fillet(Point2::new(-hw + r, -hh + r), r, pi, 1.5 * pi, false);
    } else {
        b.point(-hw, -hh);
        b.point(hw, -hh);
        b.point(hw, hh);
        b.point(-hw, hh);
    }
    b.finish()
}

/// 矩形轮廓（内环顺时针）
fn rect_outline_cw(hw: f64, hh: f64, r: f64) -> (Vec<Point2>, Vec<ArcSegmentInfo>) {
    let pi = std::f64::consts::PI;
    let half_pi = std::f64::consts::FRAC_PI_2;

    let mut b = OutlineBuilder::new();
    if r > EPSILON {
        // 从左下角起顺时针
        b.fillet(Point2::new(-hw + r, -hh + r), r, 1.5 * pi, pi, true);
        b.fillet(Point2::new(-hw + r, hh - r), r, pi, half_pi, true);
        b.fillet(Point2::new(hw - r, hh - r), r, half_pi, 0.0, true);
        b.fillet(Point2::new(hw - r, -hh + r), r, 0.0, 1.5 * pi, true);
    } else {
        b.point(-hw, -hh);
        b.point(-hw, hh);
        b.point(hw, hh);
        b.point(hw, -hh);
    }
    b.finish()
}

/// 扁钢（实心矩形，可选圆角）
fn generate_plate(params: &ProfileParams) -> GeneratedGeometry {
    let outline = rect_outline_ccw(
        params.width / 2.0,
        params.height / 2.0,
        params.fillet_radius,
    );
    GeneratedGeometry::from_outlines(vec![outline])
}

/// 方管（矩形空心截面）
///
/// 外环逆时针 + 内环顺时针；内圆角半径 = 外圆角半径 - 壁厚。
fn generate_rect_tube(params: &ProfileParams) -> GeneratedGeometry {
    let hw = params.width / 2.0;
    let hh = params.height / 2.0;
    let t = params.wall_thickness;
    let r = params.fillet_radius;

    let outer = rect_outline_ccw(hw, hh, r);
    let inner_r = (r - t).max(0.0);
    let inner = rect_outline_cw(hw - t, hh - t, inner_r);

    GeneratedGeometry::from_outlines(vec![outer, inner])
}

/// 圆管（圆形空心截面）
fn generate_round_tube(params: &ProfileParams) -> GeneratedGeometry {
    let outer_radius = params.outer_diameter / 2.0;
    let inner_radius = outer_radius - params.wall_thickness;

    let outer = circle_outline(outer_radius, true);
    if inner_radius > EPSILON {
        let inner = circle_outline(inner_radius, false);
        GeneratedGeometry::from_outlines(vec![outer, inner])
    } else {
        // 壁厚吃满直径时退化为实心圆
        GeneratedGeometry::from_outlines(vec![outer])
    }
}

/// 圆钢（实心圆）
fn generate_round_bar(params: &ProfileParams) -> GeneratedGeometry {
    let outline = circle_outline(params.outer_diameter / 2.0, true);
    GeneratedGeometry::from_outlines(vec![outline])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 鞋带公式求有向面积（逆时针为正）
    fn signed_area(points: &[Point2]) -> f64 {
        let n = points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let p = &points[i];
            let q = &points[(i + 1) % n];
            sum += p.x * q.y - q.x * p.y;
        }
        sum / 2.0
    }

    #[test]
    fn test_ibeam_sharp_corners() {
        let registry = ProfileRegistry::new();
        let params = ProfileParams::default();

        let g = registry.generate("ibeam", &params, Point2::origin(), 0.0, 1.0);

        assert_eq!(g.outlines.len(), 1);
        assert_eq!(g.outlines[0].len(), 12);
        assert!(g.arc_segments[0].is_empty());
        assert_eq!(g.closed, vec![true]);

        // 外环逆时针
        assert!(signed_area(&g.outlines[0]) > 0.0);

        // 包围盒等于名义尺寸
        assert!((g.bounds.max.x - g.bounds.min.x - params.width).abs() < EPSILON);
        assert!((g.bounds.max.y - g.bounds.min.y - params.height).abs() < EPSILON);
    }

    #[test]
    fn test_ibeam_fillets() {
        let registry = ProfileRegistry::new();
        let params = ProfileParams {
            fillet_radius: 5.0,
            ..ProfileParams::default()
        };

        let g = registry.generate("ibeam", &params, Point2::origin(), 0.0, 1.0);

        // 每个内角一条弧记录
        assert_eq!(g.arc_segments[0].len(), 4);
        // 8 个尖角 + 4 × 7 个弧点
        assert_eq!(g.outlines[0].len(), 8 + 4 * (FILLET_SEGMENTS + 1));

        let count = g.outlines[0].len();
        for arc in &g.arc_segments[0] {
            assert!(arc.start_index < count);
            assert!(arc.end_index < count);
            assert!(arc.start_index < arc.end_index);
            assert!((arc.radius - 5.0).abs() < EPSILON);
            assert_eq!(arc.end_index - arc.start_index, FILLET_SEGMENTS);
        }
    }

    #[test]
    fn test_unknown_kind_returns_empty() {
        let registry = ProfileRegistry::new();
        let g = registry.generate(
            "flux-capacitor",
            &ProfileParams::default(),
            Point2::origin(),
            0.0,
            1.0,
        );
        assert!(g.is_empty());
        assert!(g.outlines.is_empty());
        assert!(g.bounds.is_empty());
    }

    #[test]
    fn test_registry_kinds() {
        let registry = ProfileRegistry::new();
        assert!(registry.contains("ibeam"));
        assert!(registry.contains("round-tube"));
        assert_eq!(registry.kinds().len(), 8);
    }

    #[test]
    fn test_rect_tube_windings() {
        let registry = ProfileRegistry::new();
        let g = registry.generate(
            "rect-tube",
            &ProfileParams::default(),
            Point2::origin(),
            0.0,
            1.0,
        );

        assert_eq!(g.outlines.len(), 2);
        // 外环逆时针（面积为正），内环顺时针（面积为负）
        assert!(signed_area(&g.outlines[0]) > 0.0);
        assert!(signed_area(&g.outlines[1]) < 0.0);
        // 外环面积大于内环
        assert!(signed_area(&g.outlines[0]).abs() > signed_area(&g.outlines[1]).abs());
    }

    #[test]
    fn test_round_bar_records_full_circle() {
        let registry = ProfileRegistry::new();
        let params = ProfileParams {
            outer_diameter: 60.0,
            ..ProfileParams::default()
        };
        let g = registry.generate("round-bar", &params, Point2::origin(), 0.0, 1.0);

        assert_eq!(g.outlines.len(), 1);
        assert_eq!(g.outlines[0].len(), CIRCLE_SEGMENTS);

        // 整圆弧元数据覆盖全部点
        assert_eq!(g.arc_segments[0].len(), 1);
        let arc = &g.arc_segments[0][0];
        assert_eq!(arc.start_index, 0);
        assert_eq!(arc.end_index, CIRCLE_SEGMENTS - 1);
        assert!((arc.radius - 30.0).abs() < EPSILON);

        // 所有点都在圆上
        for p in &g.outlines[0] {
            assert!(((p - Point2::origin()).norm() - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_tube_two_outlines() {
        let registry = ProfileRegistry::new();
        let g = registry.generate(
            "round-tube",
            &ProfileParams::default(),
            Point2::origin(),
            0.0,
            1.0,
        );
        assert_eq!(g.outlines.len(), 2);
        // 内环半径 = 外径/2 - 壁厚
        let inner = &g.arc_segments[1][0];
        assert!((inner.radius - 44.0).abs() < EPSILON);
    }

    #[test]
    fn test_channel_and_tee_and_angle_counts() {
        let registry = ProfileRegistry::new();
        let params = ProfileParams::default();

        let channel = registry.generate("channel", &params, Point2::origin(), 0.0, 1.0);
        assert_eq!(channel.outlines[0].len(), 8);
        assert!(signed_area(&channel.outlines[0]) > 0.0);

        let tee = registry.generate("tee", &params, Point2::origin(), 0.0, 1.0);
        assert_eq!(tee.outlines[0].len(), 8);
        assert!(signed_area(&tee.outlines[0]) > 0.0);

        let angle = registry.generate("angle", &params, Point2::origin(), 0.0, 1.0);
        assert_eq!(angle.outlines[0].len(), 6);
        assert!(signed_area(&angle.outlines[0]) > 0.0);

        // 带圆角时每个截面的弧数量
        let filleted = ProfileParams {
            fillet_radius: 3.0,
            ..params
        };
        assert_eq!(
            registry
                .generate("channel", &filleted, Point2::origin(), 0.0, 1.0)
                .arc_segments[0]
                .len(),
            2
        );
        assert_eq!(
            registry
                .generate("tee", &filleted, Point2::origin(), 0.0, 1.0)
                .arc_segments[0]
                .len(),
            2
        );
        assert_eq!(
            registry
                .generate("angle", &filleted, Point2::origin(), 0.0, 1.0)
                .arc_segments[0]
                .len(),
            1
        );
    }

    #[test]
    fn test_transform_applies_to_points_and_arcs() {
        let registry = ProfileRegistry::new();
        let params = ProfileParams {
            fillet_radius: 5.0,
            ..ProfileParams::default()
        };
        let position = Point2::new(1000.0, -500.0);
        let rotation = std::f64::consts::FRAC_PI_2;
        let scale = 2.0;

        let local = registry.generate("ibeam", &params, Point2::origin(), 0.0, 1.0);
        let world = registry.generate("ibeam", &params, position, rotation, scale);

        assert_eq!(world.outlines[0].len(), local.outlines[0].len());

        // 每个点按 缩放 -> 旋转 -> 平移 变换
        for (lp, wp) in local.outlines[0].iter().zip(&world.outlines[0]) {
            let expected = Point2::new(
                -lp.y * scale + position.x,
                lp.x * scale + position.y,
            );
            assert!((wp - expected).norm() < 1e-9);
        }

        // 弧元数据同步变换
        for (la, wa) in local.arc_segments[0].iter().zip(&world.arc_segments[0]) {
            assert!((wa.radius - la.radius * scale).abs() < EPSILON);
            assert!((wa.start_angle - (la.start_angle + rotation)).abs() < EPSILON);
            let expected_center = Point2::new(
                -la.center.y * scale + position.x,
                la.center.x * scale + position.y,
            );
            assert!((wa.center - expected_center).norm() < 1e-9);
        }

        // 包围盒在世界坐标下围绕放置点
        assert!(world.bounds.contains(&position));
    }

    #[test]
    fn test_params_validate() {
        assert!(ProfileParams::default().validate().is_ok());

        let bad = ProfileParams {
            web_thickness: 200.0,
            ..ProfileParams::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(GeometryError::InvalidParameter(_))
        ));

        let bad = ProfileParams {
            height: -5.0,
            ..ProfileParams::default()
        };
        assert!(bad.validate().is_err());
    }
}
