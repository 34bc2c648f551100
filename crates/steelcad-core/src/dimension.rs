//! 尺寸标注几何计算
//!
//! 每种标注类型一个纯布局函数，输入测量点 + 偏移 + 样式，
//! 输出 [`DimensionGeometry`]（标注线、延伸线、箭头、文本锚点等）。
//! 数值格式化只负责前缀和精度，单位换算是上层的事。
//!
//! 支持的标注类型：
//! - 对齐标注 / 线性标注（水平/垂直钳制）
//! - 半径 / 直径标注
//! - 角度标注
//! - 弧长标注

use crate::error::GeometryError;
use crate::geometry::{Line, ShapeId};
use crate::math::{normalize_angle, BoundingBox2, Point2, Vector2, EPSILON};
use crate::properties::Color;
use serde::{Deserialize, Serialize};

/// 标注类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DimensionType {
    /// 对齐标注 (Aligned) - 默认
    #[default]
    Aligned,
    /// 线性标注 (Linear) - 水平或垂直
    Linear,
    /// 半径标注
    Radius,
    /// 直径标注
    Diameter,
    /// 角度标注
    Angular,
    /// 弧长标注
    ArcLength,
}

impl DimensionType {
    /// 该类型需要的最少测量点数
    pub fn required_points(&self) -> usize {
        match self {
            DimensionType::Aligned
            | DimensionType::Linear
            | DimensionType::Radius
            | DimensionType::Diameter => 2,
            // 角度：顶点 + 两条边上的点；弧长：圆心 + 起点 + 终点
            DimensionType::Angular | DimensionType::ArcLength => 3,
        }
    }
}

/// 线性标注的轴向钳制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinearDirection {
    Horizontal,
    Vertical,
}

/// 箭头样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArrowKind {
    /// 实心箭头（默认）
    #[default]
    ClosedFilled,
    /// 空心箭头
    Open,
    /// 建筑斜线
    Tick,
    /// 圆点
    Dot,
}

/// 文本相对标注线的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextPlacement {
    /// 线上方（默认）
    #[default]
    Above,
    /// 嵌入线中（调用方负责断线）
    Centered,
    /// 线下方
    Below,
}

/// 关联捕捉类型
///
/// 记录标注引用的几何特征点，被测几何变化时据此重新测量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapKind {
    /// 端点
    Endpoint,
    /// 中点
    Midpoint,
    /// 圆心
    Center,
    /// 象限点
    Quadrant,
    /// 交点
    Intersection,
    /// 最近点
    Nearest,
}

/// 关联标注引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionReference {
    /// 被引用的图元
    pub shape: ShapeId,
    /// 捕捉到的特征点类型
    pub snap: SnapKind,
}

/// 标注样式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionStyle {
    /// 箭头样式
    pub arrow_kind: ArrowKind,
    /// 箭头大小
    pub arrow_size: f64,
    /// 延伸线起始间隙（离测量点的距离）
    pub extension_line_gap: f64,
    /// 延伸线越过标注线的长度
    pub extension_line_overshoot: f64,
    /// 文本高度
    pub text_height: f64,
    /// 文本位置
    pub text_placement: TextPlacement,
    /// 圆心标记半长（半径/直径标注）
    pub center_mark_size: f64,
    /// 标注线颜色
    pub line_color: Color,
    /// 文本颜色
    pub text_color: Color,
    /// 数值小数位数
    pub precision: u8,
}

impl Default for DimensionStyle {
    fn default() -> Self {
        Self {
            arrow_kind: ArrowKind::ClosedFilled,
            arrow_size: 2.5,
            extension_line_gap: 1.0,
            extension_line_overshoot: 1.25,
            text_height: 3.5,
            text_placement: TextPlacement::Above,
            center_mark_size: 2.5,
            line_color: Color::WHITE,
            text_color: Color::WHITE,
            precision: 2,
        }
    }
}

/// 箭头（位置 + 指向角度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionArrow {
    pub position: Point2,
    /// 箭头尖端朝向（弧度，箭身沿反方向延伸）
    pub angle: f64,
}

/// 角度/弧长标注的测量弧
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// 标注布局结果（每次计算生成，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionGeometry {
    /// 标注线（角度/弧长标注时为测量弧的弦）
    pub dimension_line: Line,
    /// 延伸线（witness lines）
    pub extension_lines: Vec<Line>,
    /// 箭头
    pub arrows: Vec<DimensionArrow>,
    /// 文本锚点
    pub text_anchor: Point2,
    /// 文本旋转角度（弧度）
    pub text_rotation: f64,
    /// 测量弧（仅角度/弧长标注）
    pub arc: Option<DimensionArc>,
    /// 圆心标记（仅半径/直径标注）
    pub center_marks: Vec<Line>,
}

/// 尺寸标注
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    /// 标注类型
    pub dim_type: DimensionType,
    /// 测量点（含义取决于类型，见 [`DimensionType::required_points`]）
    pub points: Vec<Point2>,
    /// 标注线到被测几何的带符号偏移
    /// （角度标注时作为标注弧半径，弧长标注时作为径向外移量）
    pub offset: f64,
    /// 线性标注的轴向钳制（None = 按两点主要跨度自动选择）
    pub linear_direction: Option<LinearDirection>,
    /// 关联引用（被测几何变化时自动重新测量）
    pub references: Vec<DimensionReference>,
    /// 缓存的格式化文本
    pub value: Option<String>,
    /// 文本被手工覆盖后不再自动重算
    pub value_overridden: bool,
    /// 标注样式
    pub style: DimensionStyle,
}

impl Dimension {
    pub fn new(dim_type: DimensionType, points: Vec<Point2>, offset: f64) -> Self {
        Self {
            dim_type,
            points,
            offset,
            linear_direction: None,
            references: Vec::new(),
            value: None,
            value_overridden: false,
            style: DimensionStyle::default(),
        }
    }

    pub fn with_style(mut self, style: DimensionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_linear_direction(mut self, direction: LinearDirection) -> Self {
        self.linear_direction = Some(direction);
        self
    }

    /// 校验测量点数是否满足标注类型要求
    pub fn validate(&self) -> Result<(), GeometryError> {
        let needed = self.dim_type.required_points();
        if self.points.len() < needed {
            return Err(GeometryError::InsufficientPoints {
                needed,
                got: self.points.len(),
            });
        }
        Ok(())
    }

    /// 计算标注布局
    ///
    /// 测量点数不足返回错误，几何退化（重合点等）返回
    /// [`GeometryError::DegenerateGeometry`]。
    pub fn try_layout(&self) -> Result<DimensionGeometry, GeometryError> {
        self.validate()?;

        let geometry = match self.dim_type {
            DimensionType::Aligned => {
                aligned_layout(&self.points[0], &self.points[1], self.offset, &self.style)
            }
            DimensionType::Linear => linear_layout(
                &self.points[0],
                &self.points[1],
                self.offset,
                self.linear_direction,
                &self.style,
            ),
            DimensionType::Radius => {
                radius_layout(&self.points[0], &self.points[1], &self.style)
            }
            DimensionType::Diameter => {
                diameter_layout(&self.points[0], &self.points[1], &self.style)
            }
            DimensionType::Angular => angular_layout(
                &self.points[0],
                &self.points[1],
                &self.points[2],
                self.offset,
                &self.style,
            ),
            DimensionType::ArcLength => arc_length_layout(
                &self.points[0],
                &self.points[1],
                &self.points[2],
                self.offset,
                &self.style,
            ),
        };

        geometry.ok_or_else(|| {
            GeometryError::DegenerateGeometry(format!(
                "degenerate {:?} dimension",
                self.dim_type
            ))
        })
    }

    /// 计算标注布局（退化输入返回 None）
    pub fn layout(&self) -> Option<DimensionGeometry> {
        self.try_layout().ok()
    }

    /// 获取测量值
    ///
    /// 角度标注返回度数，其余返回图纸单位长度。
    pub fn measurement(&self) -> f64 {
        if self.points.len() < self.dim_type.required_points() {
            return 0.0;
        }

        match self.dim_type {
            DimensionType::Aligned => (self.points[1] - self.points[0]).norm(),
            DimensionType::Linear => {
                let dx = (self.points[1].x - self.points[0].x).abs();
                let dy = (self.points[1].y - self.points[0].y).abs();
                match self.resolve_linear_direction() {
                    LinearDirection::Horizontal => dx,
                    LinearDirection::Vertical => dy,
                }
            }
            DimensionType::Radius => (self.points[1] - self.points[0]).norm(),
            DimensionType::Diameter => (self.points[1] - self.points[0]).norm() * 2.0,
            DimensionType::Angular => {
                let v1 = self.points[1] - self.points[0];
                let v2 = self.points[2] - self.points[0];
                let start = v1.y.atan2(v1.x);
                let end = v2.y.atan2(v2.x);
                normalize_angle(end - start).to_degrees()
            }
            DimensionType::ArcLength => {
                let radius = (self.points[1] - self.points[0]).norm();
                let v1 = self.points[1] - self.points[0];
                let v2 = self.points[2] - self.points[0];
                let start = v1.y.atan2(v1.x);
                let end = v2.y.atan2(v2.x);
                radius * normalize_angle(end - start)
            }
        }
    }

    /// 线性标注的实际轴向（显式指定或按主要跨度自动选择）
    pub fn resolve_linear_direction(&self) -> LinearDirection {
        if let Some(direction) = self.linear_direction {
            return direction;
        }
        let dx = (self.points[1].x - self.points[0].x).abs();
        let dy = (self.points[1].y - self.points[0].y).abs();
        if dx > dy {
            LinearDirection::Horizontal
        } else {
            LinearDirection::Vertical
        }
    }

    /// 获取显示的文本
    pub fn display_text(&self) -> String {
        if self.value_overridden {
            if let Some(text) = &self.value {
                return text.clone();
            }
        }

        let val = self.measurement();
        let prec = self.style.precision as usize;
        match self.dim_type {
            DimensionType::Radius => format!("R{:.*}", prec, val),
            DimensionType::Diameter => format!("%%C{:.*}", prec, val), // %%C 是 CAD 中直径符号的转义
            DimensionType::Angular => format!("{:.*}°", prec, val),
            DimensionType::ArcLength => format!("⌒{:.*}", prec, val),
            _ => format!("{:.*}", prec, val),
        }
    }

    /// 重新计算缓存文本（被覆盖时跳过）
    pub fn refresh_value(&mut self) {
        if !self.value_overridden {
            self.value = Some(self.display_text());
        }
    }

    /// 计算包围盒（测量点 + 布局几何）
    pub fn bounding_box(&self) -> BoundingBox2 {
        let mut bbox = BoundingBox2::from_points(self.points.iter().copied());
        if let Some(geometry) = self.layout() {
            bbox.expand_to_include(&geometry.dimension_line.start);
            bbox.expand_to_include(&geometry.dimension_line.end);
            bbox.expand_to_include(&geometry.text_anchor);
            for line in &geometry.extension_lines {
                bbox.expand_to_include(&line.start);
                bbox.expand_to_include(&line.end);
            }
        }
        bbox
    }
}

// ========== 布局函数 ==========

/// 文本可读角度：始终保持不倒置（(π/2, 3π/2] 翻转 180°）
fn readable_text_angle(angle: f64) -> f64 {
    let a = normalize_angle(angle);
    let half_pi = std::f64::consts::FRAC_PI_2;
    if a > half_pi && a <= 3.0 * half_pi {
        normalize_angle(a + std::f64::consts::PI)
    } else {
        a
    }
}

/// 按文本位置沿法向偏移锚点
fn place_text(base: Point2, normal: Vector2, style: &DimensionStyle) -> Point2 {
    let shift = 0.8 * style.text_height;
    match style.text_placement {
        TextPlacement::Above => base + normal * shift,
        TextPlacement::Centered => base,
        TextPlacement::Below => base - normal * shift,
    }
}

/// 对齐标注布局
///
/// 偏移为弦到标注线的带符号垂直距离（弦左侧为正）。
pub fn aligned_layout(
    p1: &Point2,
    p2: &Point2,
    offset: f64,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let chord = p2 - p1;
    let len = chord.norm();
    if len < EPSILON {
        return None;
    }

    let dir = chord / len;
    let perp = Vector2::new(-dir.y, dir.x);
    let sign = if offset < 0.0 { -1.0 } else { 1.0 };

    let start = p1 + perp * offset;
    let end = p2 + perp * offset;

    let gap = style.extension_line_gap;
    let overshoot = style.extension_line_overshoot;
    let mut extension_lines = Vec::with_capacity(2);
    if offset.abs() > gap {
        for p in [p1, p2] {
            extension_lines.push(Line::new(
                p + perp * (gap * sign),
                p + perp * (offset + overshoot * sign),
            ));
        }
    }

    let line_angle = dir.y.atan2(dir.x);
    let arrows = vec![
        DimensionArrow {
            position: start,
            angle: line_angle,
        },
        DimensionArrow {
            position: end,
            angle: line_angle + std::f64::consts::PI,
        },
    ];

    let mid = Point2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);

    Some(DimensionGeometry {
        dimension_line: Line::new(start, end),
        extension_lines,
        arrows,
        text_anchor: place_text(mid, perp * sign, style),
        text_rotation: readable_text_angle(line_angle),
        arc: None,
        center_marks: Vec::new(),
    })
}

/// 线性标注布局（水平/垂直钳制）
///
/// 偏移从第一个测量点起算。
pub fn linear_layout(
    p1: &Point2,
    p2: &Point2,
    offset: f64,
    direction: Option<LinearDirection>,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let direction = direction.unwrap_or_else(|| {
        if (p2.x - p1.x).abs() > (p2.y - p1.y).abs() {
            LinearDirection::Horizontal
        } else {
            LinearDirection::Vertical
        }
    });

    let gap = style.extension_line_gap;
    let overshoot = style.extension_line_overshoot;

    match direction {
        LinearDirection::Horizontal => {
            if (p2.x - p1.x).abs() < EPSILON {
                return None;
            }
            let line_y = p1.y + offset;
            let start = Point2::new(p1.x, line_y);
            let end = Point2::new(p2.x, line_y);

            let mut extension_lines = Vec::with_capacity(2);
            for p in [p1, p2] {
                let d = line_y - p.y;
                let sign = if d < 0.0 { -1.0 } else { 1.0 };
                if d.abs() > gap {
                    extension_lines.push(Line::new(
                        Point2::new(p.x, p.y + gap * sign),
                        Point2::new(p.x, line_y + overshoot * sign),
                    ));
                }
            }

            let line_angle = if p2.x >= p1.x { 0.0 } else { std::f64::consts::PI };
            let arrows = vec![
                DimensionArrow {
                    position: start,
                    angle: line_angle,
                },
                DimensionArrow {
                    position: end,
                    angle: line_angle + std::f64::consts::PI,
                },
            ];

            let sign = if offset < 0.0 { -1.0 } else { 1.0 };
            let mid = Point2::new((start.x + end.x) / 2.0, line_y);

            Some(DimensionGeometry {
                dimension_line: Line::new(start, end),
                extension_lines,
                arrows,
                text_anchor: place_text(mid, Vector2::new(0.0, sign), style),
                text_rotation: 0.0,
                arc: None,
                center_marks: Vec::new(),
            })
        }
        LinearDirection::Vertical => {
            if (p2.y - p1.y).abs() < EPSILON {
                return None;
            }
            let line_x = p1.x + offset;
            let start = Point2::new(line_x, p1.y);
            let end = Point2::new(line_x, p2.y);

            let mut extension_lines = Vec::with_capacity(2);
            for p in [p1, p2] {
                let d = line_x - p.x;
                let sign = if d < 0.0 { -1.0 } else { 1.0 };
                if d.abs() > gap {
                    extension_lines.push(Line::new(
                        Point2::new(p.x + gap * sign, p.y),
                        Point2::new(line_x + overshoot * sign, p.y),
                    ));
                }
            }

            let half_pi = std::f64::consts::FRAC_PI_2;
            let line_angle = if p2.y >= p1.y { half_pi } else { -half_pi };
            let arrows = vec![
                DimensionArrow {
                    position: start,
                    angle: line_angle,
                },
                DimensionArrow {
                    position: end,
                    angle: line_angle + std::f64::consts::PI,
                },
            ];

            let sign = if offset < 0.0 { -1.0 } else { 1.0 };
            let mid = Point2::new(line_x, (start.y + end.y) / 2.0);

            Some(DimensionGeometry {
                dimension_line: Line::new(start, end),
                extension_lines,
                arrows,
                text_anchor: place_text(mid, Vector2::new(sign, 0.0), style),
                text_rotation: half_pi,
                arc: None,
                center_marks: Vec::new(),
            })
        }
    }
}

/// 角度标注布局
///
/// 测量点为 [顶点, 边1上的点, 边2上的点]；偏移的绝对值作为标注弧半径，
/// 弧从边1逆时针扫向边2。
pub fn angular_layout(
    vertex: &Point2,
    leg1: &Point2,
    leg2: &Point2,
    offset: f64,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let v1 = leg1 - vertex;
    let v2 = leg2 - vertex;
    let d1 = v1.norm();
    let d2 = v2.norm();
    let radius = offset.abs();
    if d1 < EPSILON || d2 < EPSILON || radius < EPSILON {
        return None;
    }

    let start_angle = v1.y.atan2(v1.x);
    let end_angle = v2.y.atan2(v2.x);
    let sweep = normalize_angle(end_angle - start_angle);

    let arc_start = Point2::new(
        vertex.x + radius * start_angle.cos(),
        vertex.y + radius * start_angle.sin(),
    );
    let arc_end = Point2::new(
        vertex.x + radius * end_angle.cos(),
        vertex.y + radius * end_angle.sin(),
    );

    // 延伸线沿边方向从测量点外推到标注弧
    let gap = style.extension_line_gap;
    let overshoot = style.extension_line_overshoot;
    let mut extension_lines = Vec::with_capacity(2);
    for (dir, d) in [(v1 / d1, d1), (v2 / d2, d2)] {
        let from = d + gap;
        let to = radius + overshoot;
        if to > from {
            extension_lines.push(Line::new(vertex + dir * from, vertex + dir * to));
        }
    }

    // 箭头与弧相切，彼此相向
    let half_pi = std::f64::consts::FRAC_PI_2;
    let arrows = vec![
        DimensionArrow {
            position: arc_start,
            angle: start_angle + half_pi,
        },
        DimensionArrow {
            position: arc_end,
            angle: end_angle - half_pi,
        },
    ];

    let mid_angle = start_angle + sweep / 2.0;
    let radial = Vector2::new(mid_angle.cos(), mid_angle.sin());
    let text_base = vertex + radial * radius;

    Some(DimensionGeometry {
        dimension_line: Line::new(arc_start, arc_end),
        extension_lines,
        arrows,
        text_anchor: place_text(text_base, radial, style),
        text_rotation: readable_text_angle(mid_angle + half_pi),
        arc: Some(DimensionArc {
            center: *vertex,
            radius,
            start_angle,
            end_angle,
        }),
        center_marks: Vec::new(),
    })
}

/// 半径标注布局
///
/// 测量点为 [圆心, 圆上一点]，标注线从圆心指向圆上点，
/// 箭头在圆周处指向外侧，圆心画十字标记。
pub fn radius_layout(
    center: &Point2,
    on_circle: &Point2,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let v = on_circle - center;
    let r = v.norm();
    if r < EPSILON {
        return None;
    }
    let dir = v / r;
    let line_angle = dir.y.atan2(dir.x);

    let mid = Point2::new(
        (center.x + on_circle.x) / 2.0,
        (center.y + on_circle.y) / 2.0,
    );
    let perp = Vector2::new(-dir.y, dir.x);

    Some(DimensionGeometry {
        dimension_line: Line::new(*center, *on_circle),
        extension_lines: Vec::new(),
        arrows: vec![DimensionArrow {
            position: *on_circle,
            angle: line_angle,
        }],
        text_anchor: place_text(mid, perp, style),
        text_rotation: readable_text_angle(line_angle),
        arc: None,
        center_marks: center_mark_lines(center, style.center_mark_size),
    })
}

/// 直径标注布局
///
/// 测量点为 [圆心, 圆上一点]，标注线穿过圆心镜像到对侧，
/// 两端箭头彼此相向。
pub fn diameter_layout(
    center: &Point2,
    on_circle: &Point2,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let v = on_circle - center;
    let r = v.norm();
    if r < EPSILON {
        return None;
    }
    let dir = v / r;
    let line_angle = dir.y.atan2(dir.x);
    let opposite = center - dir * r;

    let perp = Vector2::new(-dir.y, dir.x);

    Some(DimensionGeometry {
        dimension_line: Line::new(opposite, *on_circle),
        extension_lines: Vec::new(),
        arrows: vec![
            DimensionArrow {
                position: opposite,
                angle: line_angle,
            },
            DimensionArrow {
                position: *on_circle,
                angle: line_angle + std::f64::consts::PI,
            },
        ],
        text_anchor: place_text(*center, perp, style),
        text_rotation: readable_text_angle(line_angle),
        arc: None,
        center_marks: center_mark_lines(center, style.center_mark_size),
    })
}

/// 弧长标注布局
///
/// 测量点为 [圆心, 弧起点, 弧终点]；偏移为标注弧相对被测弧的径向外移量。
pub fn arc_length_layout(
    center: &Point2,
    arc_start: &Point2,
    arc_end: &Point2,
    offset: f64,
    style: &DimensionStyle,
) -> Option<DimensionGeometry> {
    let v1 = arc_start - center;
    let v2 = arc_end - center;
    let r1 = v1.norm();
    let r2 = v2.norm();
    if r1 < EPSILON || r2 < EPSILON {
        return None;
    }

    let dim_radius = r1 + offset;
    if dim_radius < EPSILON {
        return None;
    }

    let start_angle = v1.y.atan2(v1.x);
    let end_angle = v2.y.atan2(v2.x);
    let sweep = normalize_angle(end_angle - start_angle);

    let arc_start_pt = Point2::new(
        center.x + dim_radius * start_angle.cos(),
        center.y + dim_radius * start_angle.sin(),
    );
    let arc_end_pt = Point2::new(
        center.x + dim_radius * end_angle.cos(),
        center.y + dim_radius * end_angle.sin(),
    );

    // 延伸线沿半径方向外推
    let gap = style.extension_line_gap;
    let overshoot = style.extension_line_overshoot;
    let sign = if offset < 0.0 { -1.0 } else { 1.0 };
    let mut extension_lines = Vec::with_capacity(2);
    if offset.abs() > gap {
        for (angle, r) in [(start_angle, r1), (end_angle, r2)] {
            let dir = Vector2::new(angle.cos(), angle.sin());
            extension_lines.push(Line::new(
                center + dir * (r + gap * sign),
                center + dir * (dim_radius + overshoot * sign),
            ));
        }
    }

    let half_pi = std::f64::consts::FRAC_PI_2;
    let arrows = vec![
        DimensionArrow {
            position: arc_start_pt,
            angle: start_angle + half_pi,
        },
        DimensionArrow {
            position: arc_end_pt,
            angle: end_angle - half_pi,
        },
    ];

    let mid_angle = start_angle + sweep / 2.0;
    let radial = Vector2::new(mid_angle.cos(), mid_angle.sin());
    let text_base = center + radial * dim_radius;

    Some(DimensionGeometry {
        dimension_line: Line::new(arc_start_pt, arc_end_pt),
        extension_lines,
        arrows,
        text_anchor: place_text(text_base, radial, style),
        text_rotation: readable_text_angle(mid_angle + half_pi),
        arc: Some(DimensionArc {
            center: *center,
            radius: dim_radius,
            start_angle,
            end_angle,
        }),
        center_marks: Vec::new(),
    })
}

/// 圆心十字标记
fn center_mark_lines(center: &Point2, size: f64) -> Vec<Line> {
    vec![
        Line::new(
            Point2::new(center.x - size, center.y),
            Point2::new(center.x + size, center.y),
        ),
        Line::new(
            Point2::new(center.x, center.y - size),
            Point2::new(center.x, center.y + size),
        ),
    ]
}

/// 为居中文本断开标注线
///
/// 内核不测量文本；调用方测得文本宽度后用此函数把标注线
/// 分成两段，中间留出文本宽度加两侧留白。线太短放不下时
/// 返回 `None`，调用方保留整条线。
pub fn split_dimension_line(
    geometry: &DimensionGeometry,
    text_width: f64,
    padding: f64,
) -> Option<[Line; 2]> {
    let line = &geometry.dimension_line;
    let len = line.length();
    let gap = text_width + 2.0 * padding;

    if gap >= len || len < EPSILON {
        return None;
    }

    let dir = line.direction();
    let mid = line.midpoint();

    Some([
        Line::new(line.start, mid - dir * (gap / 2.0)),
        Line::new(mid + dir * (gap / 2.0), line.end),
    ])
}
