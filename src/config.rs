//! 配置

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// 风格文件目录的环境变量
pub const STYLES_DIR_ENV: &str = "SDXL_STYLES_DIR";

/// 源码树中随包分发的风格文件目录, 相对于 crate 根目录
const BUNDLED_STYLES_DIR: &str = "python/comfyui_sdxl_styles/styles";

/// 风格文件配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesConfig {
    styles_dir: PathBuf,
}

impl StylesConfig {
    pub fn new(styles_dir: impl Into<PathBuf>) -> Self {
        Self {
            styles_dir: styles_dir.into(),
        }
    }

    /// 优先读取环境变量, 否则使用源码树中的 styles 目录
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default().styles_dir)
    }

    /// 优先读取环境变量, 否则使用给定目录
    ///
    /// Python 包加载时传入包内的 styles 目录
    pub fn from_env_or(fallback: impl Into<PathBuf>) -> Self {
        Self::resolve(env::var_os(STYLES_DIR_ENV), fallback)
    }

    /// 环境变量为空时视为未设置
    fn resolve(env_value: Option<OsString>, fallback: impl Into<PathBuf>) -> Self {
        match env_value {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(fallback),
        }
    }

    pub fn styles_dir(&self) -> &Path {
        &self.styles_dir
    }
}

/// 仅用于测试和命令行, 安装后的扩展由 Python 包提供目录
impl Default for StylesConfig {
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_STYLES_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_dir() {
        let config = StylesConfig::default();
        assert!(config.styles_dir().ends_with("styles"));
        assert!(config.styles_dir().join("sdxl_styles_sai.json").is_file());
    }

    #[test]
    fn test_explicit_styles_dir() {
        let config = StylesConfig::new("/tmp/styles");
        assert_eq!(config.styles_dir(), Path::new("/tmp/styles"));
    }

    #[test]
    fn test_env_overrides_fallback() {
        let config = StylesConfig::resolve(Some("/opt/styles".into()), "/site-packages/styles");
        assert_eq!(config.styles_dir(), Path::new("/opt/styles"));
    }

    #[test]
    fn test_fallback_when_env_unset_or_empty() {
        for env_value in [None, Some(OsString::new())] {
            let config = StylesConfig::resolve(env_value, "/site-packages/styles");
            assert_eq!(config.styles_dir(), Path::new("/site-packages/styles"));
        }
    }
}
