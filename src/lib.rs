//! SDXL 提示词风格节点
//!
//! 从 JSON 风格文件加载提示词模板, 为每个风格文件注册一个 ComfyUI 节点

pub mod config;
pub mod core;
pub mod error;
pub mod style;

#[cfg(feature = "python")]
pub mod wrapper;

#[cfg(feature = "python")]
use pyo3::{
    pymodule,
    types::{PyModule, PyModuleMethods},
    wrap_pyfunction, Bound, PyResult,
};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "_native")] // 需要与 pyproject.toml 中的 module-name 保持一致
fn py_init(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use wrapper::comfyui::{print_loaded_nodes, setup_nodes, ApplyStyle, PyStyleNode};

    // 初始化日志
    // 每个扩展模块都有自己的全局变量，因此所使用的记录器也与其他 Rust 原生扩展无关。
    let _ = tracing_subscriber::fmt()
        .with_ansi(true)
        .with_max_level(tracing::Level::INFO)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .try_init();

    m.add_class::<ApplyStyle>()?;
    m.add_class::<PyStyleNode>()?;
    // ComfyUI 的节点映射由包的 __init__.py 调用 setup_nodes 填充
    m.add_function(wrap_pyfunction!(setup_nodes, m)?)?;
    m.add_function(wrap_pyfunction!(print_loaded_nodes, m)?)?;
    Ok(())
}
