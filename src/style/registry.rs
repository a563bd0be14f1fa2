//! 节点注册

use std::{path::Path, sync::Arc};

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::config::StylesConfig;

use super::{loader::load_style_set, node::StyleNode};

/// 节点定义: (风格文件名, 节点显示名称)
pub const NODE_DEFINITIONS: &[(&str, &str)] = &[
    ("sdxl_styles_sai.json", "Apply SDXL Style SAI"),
    ("sdxl_styles_twri.json", "Apply SDXL Style TWRI"),
    ("sdxl_styles_mre.json", "Apply SDXL Style MRE"),
    ("clipdrop_styles.json", "Apply ClipDrop Style"),
    ("fooocus.json", "Apply Fooocus Style"),
    ("art_styles_expansion.json", "Apply Art Style Expansion"),
];

lazy_static! {
    static ref CLASS_NAME: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// 节点注册
/// (节点class名称, 节点对象, 节点显示名称)
#[derive(Debug, Clone)]
pub struct NodeRegister(pub String, pub StyleNode, pub String);

impl NodeRegister {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn node(&self) -> &StyleNode {
        &self.1
    }

    pub fn display_name(&self) -> &str {
        &self.2
    }
}

/// 节点类型标识: 显示名称去除空格
pub fn node_id(display_name: &str) -> String {
    display_name.replace(' ', "")
}

/// 标识是否可以作为宿主的 class 名称
pub fn is_valid_class_name(id: &str) -> bool {
    CLASS_NAME.is_match(id)
}

/// 节点注册表
///
/// 进程内构建一次, 之后只读
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<NodeRegister>,
}

impl NodeRegistry {
    /// 按内置节点定义加载所有风格文件
    pub fn init(config: &StylesConfig) -> Self {
        Self::from_definitions(config.styles_dir(), NODE_DEFINITIONS)
    }

    /// 按给定定义加载, 单个文件失败不影响注册
    pub fn from_definitions(styles_dir: &Path, definitions: &[(&str, &str)]) -> Self {
        let mut nodes: Vec<NodeRegister> = Vec::with_capacity(definitions.len());
        for (file_name, display_name) in definitions {
            let id = node_id(display_name);
            if !is_valid_class_name(&id) {
                warn!("node id is not a valid class name, {id}");
            }
            let styles = Arc::new(load_style_set(&styles_dir.join(file_name)));
            let node = StyleNode::new(id.clone(), *file_name, styles);
            info!("register node {node}");

            match nodes.iter().position(|n| n.id() == id) {
                Some(index) => {
                    warn!("duplicate node id, {id}");
                    nodes[index] = NodeRegister(id, node, display_name.to_string());
                }
                None => nodes.push(NodeRegister(id, node, display_name.to_string())),
            }
        }
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeRegister> {
        self.nodes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&StyleNode> {
        self.nodes.iter().find(|n| n.id() == id).map(|n| n.node())
    }

    /// NODE_CLASS_MAPPINGS
    pub fn class_mappings(&self) -> IndexMap<&str, &StyleNode> {
        self.nodes.iter().map(|n| (n.id(), n.node())).collect()
    }

    /// NODE_DISPLAY_NAME_MAPPINGS
    pub fn display_name_mappings(&self) -> IndexMap<&str, &str> {
        self.nodes
            .iter()
            .map(|n| (n.id(), n.display_name()))
            .collect()
    }

    /// 已加载节点的概要, 每个节点一行
    pub fn summary(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|n| format!("{}: {}", n.id(), n.node()))
            .collect()
    }
}
