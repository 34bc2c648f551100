//! 文本度量
//!
//! 为命中测试和标注布局提供文本框度量。度量上下文是内核中唯一的
//! 进程级缓存资源：首次查询时惰性初始化，之后复用；所有调用都在
//! 单线程同步路径上，不存在并发修改。
//!
//! 宽度按字形前进宽度表计算（em 单位的比例值）：
//! - ASCII 按窄字符表
//! - CJK 全角字符按 1.0 em
//! - 其余字符按默认宽度

use std::sync::OnceLock;

/// 上伸高度（em 比例，相对于文本高度）
const ASCENT: f64 = 0.8;

/// 下降高度（em 比例）
const DESCENT: f64 = 0.2;

/// 行间距系数
const LINE_SPACING: f64 = 1.5;

/// 字形度量上下文
#[derive(Debug)]
struct GlyphMetrics {
    /// ASCII 可打印字符 (0x20..=0x7E) 的前进宽度（em 比例）
    ascii_advances: [f64; 95],
    /// 未知字符的默认宽度
    default_advance: f64,
}

impl GlyphMetrics {
    fn build() -> Self {
        let mut advances = [0.6_f64; 95];

        // 窄字符
        for c in ['i', 'j', 'l', '.', ',', ';', ':', '\'', '|', '!'] {
            advances[c as usize - 0x20] = 0.3;
        }
        for c in ['f', 't', 'r', '(', ')', '[', ']', '{', '}', ' ', '"', '`'] {
            advances[c as usize - 0x20] = 0.4;
        }
        // 宽字符
        for c in ['m', 'w', 'M', 'W', '@', '%'] {
            advances[c as usize - 0x20] = 0.9;
        }
        for c in 'A'..='Z' {
            if !matches!(c, 'M' | 'W' | 'I') {
                advances[c as usize - 0x20] = 0.7;
            }
        }
        advances['I' as usize - 0x20] = 0.35;
        // 数字等宽
        for c in '0'..='9' {
            advances[c as usize - 0x20] = 0.6;
        }

        Self {
            ascii_advances: advances,
            default_advance: 0.6,
        }
    }

    /// 单个字符的前进宽度（em 比例）
    fn advance(&self, c: char) -> f64 {
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            self.ascii_advances[code as usize - 0x20]
        } else if is_cjk(c) {
            1.0
        } else {
            self.default_advance
        }
    }
}

/// 检查是否是CJK字符
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{3000}'..='\u{303F}'
        | '\u{FF00}'..='\u{FFEF}')
}

/// 进程级度量上下文（惰性初始化，之后只读）
fn metrics() -> &'static GlyphMetrics {
    static METRICS: OnceLock<GlyphMetrics> = OnceLock::new();
    METRICS.get_or_init(GlyphMetrics::build)
}

/// 文本块度量结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    /// 最长行宽度
    pub width: f64,
    /// 首行基线以上高度
    pub ascent: f64,
    /// 末行基线以下高度
    pub descent: f64,
    /// 行数
    pub line_count: usize,
    /// 行高（含行距）
    pub line_height: f64,
}

impl BlockMetrics {
    /// 文本块总高度
    pub fn height(&self) -> f64 {
        if self.line_count == 0 {
            return 0.0;
        }
        self.ascent + self.descent + self.line_height * (self.line_count - 1) as f64
    }
}

/// 测量单行文本宽度
pub fn measure_line(text: &str, height: f64) -> f64 {
    let m = metrics();
    text.chars().map(|c| m.advance(c)).sum::<f64>() * height
}

/// 测量多行文本块（`\n` 分行）
///
/// 宽度取最长行；上伸/下降取固定字体比例。
pub fn measure_block(text: &str, height: f64) -> BlockMetrics {
    let mut width = 0.0_f64;
    let mut line_count = 0;

    for line in text.split('\n') {
        width = width.max(measure_line(line, height));
        line_count += 1;
    }

    BlockMetrics {
        width,
        ascent: ASCENT * height,
        descent: DESCENT * height,
        line_count,
        line_height: LINE_SPACING * height,
    }
}
