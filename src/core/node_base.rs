//! ComfyUI 节点输入输出构建器
//!
//! 生成 ComfyUI 节点的 INPUT_TYPES 结构, 序列化后由宿主绑定转换为 Python 对象
//!
//! # 使用示例
//!
//! ```rust
//! use comfyui_sdxl_styles::core::node_base::{InputSpec, InputType};
//!
//! let spec = InputSpec::new()
//!     .with_required("text", InputType::string().default("hello").multiline(true))
//!     .with_required("mode", InputType::list(vec!["A".to_string(), "B".to_string()]).default("A"));
//! assert_eq!(spec.required().len(), 2);
//! ```

use indexmap::IndexMap;
use serde::{
    ser::{SerializeMap, SerializeTuple},
    Serialize, Serializer,
};

use crate::core::types::{NODE_BOOLEAN, NODE_STRING};

/// 输入规范构建器
///
/// 用于构建 ComfyUI 节点的 INPUT_TYPES 字典结构
#[derive(Debug, Clone, Default)]
pub struct InputSpec {
    required: Vec<(String, InputType)>,
}

impl InputSpec {
    /// 创建一个新的输入规范构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加必需输入
    pub fn with_required(mut self, name: impl Into<String>, input: InputType) -> Self {
        self.required.push((name.into(), input));
        self
    }

    pub fn required(&self) -> &[(String, InputType)] {
        &self.required
    }

    /// 按名称查找输入
    pub fn get(&self, name: &str) -> Option<&InputType> {
        self.required
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, input)| input)
    }
}

/// 序列化为 {"required": {...}}
impl Serialize for InputSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let required: IndexMap<&str, &InputType> = self
            .required
            .iter()
            .map(|(n, t)| (n.as_str(), t))
            .collect();
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("required", &required)?;
        map.end()
    }
}

/// 输入类型（包含类型和参数）
#[derive(Debug, Clone)]
pub struct InputType {
    kind: InputKind,
    params: IndexMap<String, ParamValue>,
}

/// 输入类型枚举
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    String,
    Bool,
    /// 下拉选项
    List(Vec<String>),
}

/// 参数值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Bool(bool),
}

impl InputType {
    fn new(kind: InputKind) -> Self {
        Self {
            kind,
            params: IndexMap::new(),
        }
    }

    /// String 类型
    pub fn string() -> Self {
        Self::new(InputKind::String)
    }

    /// Bool 类型
    pub fn bool() -> Self {
        Self::new(InputKind::Bool)
    }

    /// 动态选项列表
    pub fn list(options: Vec<String>) -> Self {
        Self::new(InputKind::List(options))
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// 下拉选项, 非列表类型返回空
    pub fn options(&self) -> &[String] {
        match &self.kind {
            InputKind::List(options) => options,
            _ => &[],
        }
    }

    /// 设置默认值
    pub fn default<V: Into<ParamValue>>(mut self, value: V) -> Self {
        self.params.insert("default".to_string(), value.into());
        self
    }

    /// 设置多行文本
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.params
            .insert("multiline".to_string(), ParamValue::Bool(multiline));
        self
    }

    /// 设置开标签
    pub fn label_on(mut self, label: impl Into<String>) -> Self {
        self.params
            .insert("label_on".to_string(), ParamValue::String(label.into()));
        self
    }

    /// 设置关标签
    pub fn label_off(mut self, label: impl Into<String>) -> Self {
        self.params
            .insert("label_off".to_string(), ParamValue::String(label.into()));
        self
    }
}

/// 列表类型：(options_list, params_dict)
/// 其他类型：(type_name, params_dict)
impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        match &self.kind {
            InputKind::String => tuple.serialize_element(NODE_STRING)?,
            InputKind::Bool => tuple.serialize_element(NODE_BOOLEAN)?,
            InputKind::List(options) => tuple.serialize_element(options)?,
        }
        tuple.serialize_element(&self.params)?;
        tuple.end()
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// 输出规范
#[derive(Debug, Clone, Default)]
pub struct OutputSpec {
    pub types: Vec<&'static str>,
    pub names: Vec<&'static str>,
}

impl OutputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, type_name: &'static str, name: &'static str) -> Self {
        self.types.push(type_name);
        self.names.push(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_input_spec_builder() {
        let spec = InputSpec::new()
            .with_required("text", InputType::string().default("hello"))
            .with_required("enabled", InputType::bool().default(false));

        assert_eq!(spec.required().len(), 2);
        assert_eq!(spec.required()[0].0, "text");
        assert!(spec.get("enabled").is_some());
        assert!(spec.get("missing").is_none());
    }

    /// 序列化结构与 ComfyUI INPUT_TYPES 一致
    #[test]
    fn test_serialize_input_types() -> anyhow::Result<()> {
        let spec = InputSpec::new()
            .with_required("prompt", InputType::string().multiline(true))
            .with_required(
                "mode",
                InputType::list(vec!["A".to_string(), "B".to_string()]),
            )
            .with_required(
                "flag",
                InputType::bool().default(true).label_on("yes").label_off("no"),
            );

        let value = serde_json::to_value(&spec)?;
        assert_eq!(
            value,
            json!({
                "required": {
                    "prompt": ["STRING", {"multiline": true}],
                    "mode": [["A", "B"], {}],
                    "flag": ["BOOLEAN", {"default": true, "label_on": "yes", "label_off": "no"}],
                }
            })
        );
        Ok(())
    }

    #[test]
    fn test_required_order_is_kept() -> anyhow::Result<()> {
        let spec = InputSpec::new()
            .with_required("b", InputType::string())
            .with_required("a", InputType::string());

        let text = serde_json::to_string(&spec)?;
        assert!(text.find("\"b\"") < text.find("\"a\""));
        Ok(())
    }

    #[test]
    fn test_output_spec() {
        let output = OutputSpec::new()
            .with_output(NODE_STRING, "positive_prompt")
            .with_output(NODE_STRING, "negative_prompt");
        assert_eq!(output.types, vec!["STRING", "STRING"]);
        assert_eq!(output.names, vec!["positive_prompt", "negative_prompt"]);
    }
}
