//! 提示词风格节点
//!
//! 所有节点共用一个 pyclass, 每个风格文件注册一个只携带 StyleNode 的子类

use std::{path::PathBuf, sync::OnceLock};

use log::{info, warn};
use pyo3::{
    exceptions::PyKeyError,
    pyclass, pyfunction, pymethods,
    types::{PyAnyMethods, PyDict, PyDictMethods, PyModule, PyTuple, PyType},
    Bound, Py, PyAny, PyErr, PyResult, Python,
};
use pythonize::pythonize;

use crate::{
    config::StylesConfig,
    core::category::CATEGORY_STYLES,
    error::Error,
    style::{NodeRegistry, StyleNode},
};

/// 子类上绑定节点的属性名
const STYLE_NODE_ATTR: &str = "STYLE_NODE";
const NODE_ID_ATTR: &str = "NODE_ID";
const FILE_ATTR: &str = "FILE";

const MODULE_NAME: &str = "comfyui_sdxl_styles";

/// 进程内的节点注册表, 由 setup_nodes 加载一次
static REGISTRY: OnceLock<NodeRegistry> = OnceLock::new();

/// 绑定到宿主 class 上的风格节点
#[pyclass(frozen, name = "StyleNode")]
pub struct PyStyleNode {
    node: StyleNode,
}

#[pymethods]
impl PyStyleNode {
    fn __str__(&self) -> String {
        self.node.to_string()
    }
}

/// 提示词风格节点
#[pyclass(subclass)]
pub struct ApplyStyle {}

#[pymethods]
impl ApplyStyle {
    #[new]
    fn new() -> Self {
        Self {}
    }

    #[classattr]
    #[pyo3(name = "NODE_ID")]
    const NODE_ID: &'static str = "";

    #[classattr]
    #[pyo3(name = "FILE")]
    const FILE: &'static str = "";

    #[classattr]
    #[pyo3(name = "INPUT_IS_LIST")]
    fn input_is_list() -> bool {
        false
    }

    #[classattr]
    #[pyo3(name = "RETURN_TYPES")]
    fn return_types(py: Python<'_>) -> PyResult<Py<PyTuple>> {
        Ok(PyTuple::new(py, StyleNode::output_spec().types)?.unbind())
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names(py: Python<'_>) -> PyResult<Py<PyTuple>> {
        Ok(PyTuple::new(py, StyleNode::output_spec().names)?.unbind())
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list() -> (bool, bool) {
        (false, false)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_STYLES;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Apply a prompt style template to the positive and negative prompt."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[classmethod]
    #[pyo3(name = "INPUT_TYPES")]
    fn input_types<'py>(cls: &Bound<'py, PyType>) -> PyResult<Bound<'py, PyAny>> {
        let node = bound_node(cls)?;
        Ok(pythonize(cls.py(), &node.input_spec())?)
    }

    #[pyo3(name = "execute")]
    fn execute(
        slf: &Bound<'_, Self>,
        positive_prompt: &str,
        negative_prompt: &str,
        style: &str,
        apply_negative_style: bool,
        log_prompt: bool,
    ) -> PyResult<(String, String)> {
        let node = bound_node(&slf.get_type())?;
        Ok(node.execute(
            positive_prompt,
            negative_prompt,
            style,
            apply_negative_style,
            log_prompt,
        ))
    }

    fn __str__(slf: &Bound<'_, Self>) -> PyResult<String> {
        let node = bound_node(&slf.get_type())?;
        Ok(node.to_string())
    }
}

/// 读取 class 上绑定的风格节点
fn bound_node(cls: &Bound<'_, PyType>) -> PyResult<StyleNode> {
    let Ok(attr) = cls.getattr(STYLE_NODE_ATTR) else {
        let id: String = cls.getattr(NODE_ID_ATTR)?.extract()?;
        return Err(PyErr::new::<PyKeyError, _>(
            Error::NodeNotFound(id).to_string(),
        ));
    };
    let node = attr.downcast_into::<PyStyleNode>()?;
    Ok(node.get().node.clone())
}

/// 注册 NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS
///
/// 每个节点创建一个 ApplyStyle 子类, class 名称即节点标识
pub fn register_nodes<'py>(
    py: Python<'py>,
    registry: &NodeRegistry,
    node_mapping: &Bound<'py, PyDict>,
    name_mapping: &Bound<'py, PyDict>,
) -> PyResult<()> {
    let base = py.get_type::<ApplyStyle>();
    let type_factory = PyModule::import(py, "builtins")?.getattr("type")?;

    for register in registry.iter() {
        let node = register.node();
        let attrs = PyDict::new(py);
        attrs.set_item("__module__", MODULE_NAME)?;
        attrs.set_item(NODE_ID_ATTR, register.id())?;
        attrs.set_item(FILE_ATTR, node.file())?;
        attrs.set_item(
            STYLE_NODE_ATTR,
            Bound::new(py, PyStyleNode { node: node.clone() })?,
        )?;

        let class = type_factory.call1((register.id(), (base.clone(),), attrs))?;
        node_mapping.set_item(register.id(), class)?;
        name_mapping.set_item(register.id(), register.display_name())?;
    }
    Ok(())
}

/// 加载风格文件并填充宿主的节点映射
///
/// styles_dir 为包内的 styles 目录, 设置 SDXL_STYLES_DIR 时以环境变量为准
#[pyfunction]
#[pyo3(signature = (node_mapping, name_mapping, styles_dir=None))]
pub fn setup_nodes<'py>(
    py: Python<'py>,
    node_mapping: &Bound<'py, PyDict>,
    name_mapping: &Bound<'py, PyDict>,
    styles_dir: Option<PathBuf>,
) -> PyResult<()> {
    let config = match styles_dir {
        Some(dir) => StylesConfig::from_env_or(dir),
        None => StylesConfig::from_env(),
    };
    let registry = REGISTRY.get_or_init(|| {
        info!("load styles from {}", config.styles_dir().display());
        NodeRegistry::init(&config)
    });
    register_nodes(py, registry, node_mapping, name_mapping)
}

/// 打印已加载的节点
#[pyfunction]
pub fn print_loaded_nodes() {
    let Some(registry) = REGISTRY.get() else {
        warn!("no nodes loaded, call setup_nodes first");
        return;
    };
    for line in registry.summary() {
        println!("{line}");
    }
}
