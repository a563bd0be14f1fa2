//! 风格集合

use indexmap::IndexMap;
use lazy_static::lazy_static;

use super::template::{Template, BYPASS};

lazy_static! {
    static ref BYPASS_TEMPLATE: Template = Template::bypass();
}

/// 风格集合, 风格名称 -> 模板
///
/// 保持文件中的插入顺序, 始终包含旁路风格
#[derive(Debug, Clone)]
pub struct StyleSet {
    templates: IndexMap<String, Template>,
}

impl StyleSet {
    /// 仅包含旁路风格的集合
    pub fn new() -> Self {
        Self::from_templates(Vec::new())
    }

    /// 按顺序插入, 同名后者覆盖前者, 最后插入旁路风格
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut map = IndexMap::new();
        for template in templates {
            map.insert(template.name().to_string(), template);
        }
        map.insert(BYPASS.to_string(), Template::bypass());
        Self { templates: map }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// 查找风格, 未知风格回退到旁路风格
    pub fn get_or_bypass(&self, name: &str) -> &Template {
        self.templates.get(name).unwrap_or(&BYPASS_TEMPLATE)
    }

    /// 按文件顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// 下拉列表的风格名称: 排序后旁路风格置顶
    pub fn names(&self) -> Vec<String> {
        let mut names = self
            .templates
            .keys()
            .filter(|name| name.as_str() != BYPASS)
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names.insert(0, BYPASS.to_string());
        names
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::new()
    }
}
