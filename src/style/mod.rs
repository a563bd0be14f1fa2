//! 提示词风格

pub mod loader;
pub mod node;
pub mod registry;
pub mod set;
pub mod template;

pub use loader::{load_json_data, load_style_set};
pub use node::StyleNode;
pub use registry::{NodeRegister, NodeRegistry, NODE_DEFINITIONS};
pub use set::StyleSet;
pub use template::{Template, BYPASS, PLACEHOLDER};
