//! 风格文件加载

use std::{fs, path::Path};

use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

use super::{
    set::StyleSet,
    template::{Template, PLACEHOLDER},
};

/// 风格文件中的单条记录
#[derive(Debug, Deserialize)]
struct TemplateRecord {
    #[serde(default)]
    name: String,
    #[serde(default = "default_prompt")]
    prompt: String,
    #[serde(default)]
    negative_prompt: String,
}

fn default_prompt() -> String {
    PLACEHOLDER.to_string()
}

impl From<TemplateRecord> for Template {
    fn from(record: TemplateRecord) -> Self {
        Template::new(record.name, record.prompt, record.negative_prompt)
    }
}

/// 读取风格文件中的 JSON 数组
pub fn load_json_data(path: &Path) -> Result<Vec<Value>, Error> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(records) => Ok(records),
        _ => Err(Error::InvalidStyleFile(format!(
            "not a json array, {}",
            path.display()
        ))),
    }
}

/// 解析记录, 非对象元素跳过
pub fn parse_templates(records: Vec<Value>) -> Vec<Template> {
    let mut templates = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_object() {
            continue;
        }
        match serde_json::from_value::<TemplateRecord>(record) {
            Ok(record) => templates.push(record.into()),
            Err(e) => warn!("{}", Error::InvalidStyleRecord(e.to_string())),
        }
    }
    templates
}

/// 加载风格文件
///
/// 读取或解析失败时记录错误并返回仅包含旁路风格的集合
pub fn load_style_set(path: &Path) -> StyleSet {
    let records = match load_json_data(path) {
        Ok(v) => v,
        Err(e) => {
            error!("load style file failed, {}: {e}", path.display());
            Vec::new()
        }
    };

    let styles = StyleSet::from_templates(parse_templates(records));
    debug!("loaded {} styles from {}", styles.len(), path.display());
    styles
}
