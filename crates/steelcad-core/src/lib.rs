//! SteelCAD 核心几何内核
//!
//! 2D 绘图应用的纯计算层，提供：
//! - 曲线拟合：三点定圆/定弧、凸度（bulge）互转
//! - 尺寸标注布局：线性、对齐、角度、半径、直径、弧长
//! - 命中测试：全部图元与标注的容差邻近判定
//! - 参数化型钢截面：工字钢、槽钢、角钢、T型钢、管材、扁钢、圆钢
//!
//! # 架构设计
//!
//! 内核是无状态函数库：所有输入显式传参，不持有图元集合，
//! 不做 I/O，退化输入返回 `None`/空几何而不是报错。交互层和
//! 渲染层每帧多次调用，单次调用须保持亚毫秒级开销。
//!
//! # 示例
//!
//! ```rust
//! use steelcad_core::prelude::*;
//!
//! // 三点拟合圆弧
//! let arc = curve::arc_from_three_points(
//!     &Point2::new(1.0, 0.0),
//!     &Point2::new(0.0, 1.0),
//!     &Point2::new(-1.0, 0.0),
//! );
//! assert!(arc.is_some());
//! ```

pub mod curve;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod math;
pub mod profile;
pub mod properties;
pub mod text_metrics;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::curve;
    pub use crate::dimension::{
        Dimension, DimensionGeometry, DimensionStyle, DimensionType, LinearDirection,
        TextPlacement,
    };
    pub use crate::error::GeometryError;
    pub use crate::geometry::{
        Arc, Circle, Ellipse, Geometry, Hatch, Line, Point, Polyline, PolylineVertex, Rectangle,
        ShapeId, Spline, Text, TextAlignment,
    };
    pub use crate::hit_test::is_point_near_shape;
    pub use crate::math::{BoundingBox2, Point2, Vector2, EPSILON};
    pub use crate::profile::{ArcSegmentInfo, GeneratedGeometry, ProfileParams, ProfileRegistry};
    pub use crate::properties::Color;
    pub use crate::transform::Transform2D;
}
