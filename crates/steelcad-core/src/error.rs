//! 几何内核错误定义
//!
//! 内核的计算函数对退化输入返回 `None` 或空几何，不会失败；
//! 这里的错误类型只服务于校验接口（标注点数检查、截面参数检查），
//! 供上层命令层在调用内核之前使用。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Insufficient dimension points: need {needed}, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    #[error("Invalid profile parameter: {0}")]
    InvalidParameter(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
