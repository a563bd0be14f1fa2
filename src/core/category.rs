//! 节点分类

/// 提示词风格
pub const CATEGORY_STYLES: &str = "mozman";
