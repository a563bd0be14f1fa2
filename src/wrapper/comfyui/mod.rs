//! ComfyUI 节点绑定

mod apply_style;
pub use apply_style::{print_loaded_nodes, register_nodes, setup_nodes, ApplyStyle, PyStyleNode};
