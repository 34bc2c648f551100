//! 二维变换
//!
//! 截面生成器使用的刚体+等比缩放变换，应用顺序固定：
//! 先缩放，再旋转，最后平移。

use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 二维变换（等比缩放 + 旋转 + 平移）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// 等比缩放系数
    pub scale: f64,
    /// 旋转角度（弧度，逆时针为正）
    pub rotation: f64,
    /// 平移量
    pub translation: Vector2,
}

impl Transform2D {
    pub fn new(scale: f64, rotation: f64, translation: Vector2) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    /// 单位变换
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            translation: Vector2::new(0.0, 0.0),
        }
    }

    /// 仅平移
    pub fn from_translation(translation: Vector2) -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            translation,
        }
    }

    /// 变换一个点：缩放 -> 旋转 -> 平移
    pub fn apply(&self, point: &Point2) -> Point2 {
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        let x = point.x * self.scale;
        let y = point.y * self.scale;
        Point2::new(
            x * cos_r - y * sin_r + self.translation.x,
            x * sin_r + y * cos_r + self.translation.y,
        )
    }

    /// 变换一个方向向量（不平移）
    pub fn apply_to_vector(&self, v: &Vector2) -> Vector2 {
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        let x = v.x * self.scale;
        let y = v.y * self.scale;
        Vector2::new(x * cos_r - y * sin_r, x * sin_r + y * cos_r)
    }

    /// 变换一个角度
    pub fn apply_to_angle(&self, angle: f64) -> f64 {
        angle + self.rotation
    }

    /// 变换一个长度（半径等标量距离）
    pub fn apply_to_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
