//! 风格模板

/// 占位符, 调用方提供的提示词插入位置
pub const PLACEHOLDER: &str = "{prompt}";

/// 保留的旁路风格名称
pub const BYPASS: &str = "bypass";

/// 风格模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    positive_prompt: String,
    negative_prompt: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        positive_prompt: impl Into<String>,
        negative_prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positive_prompt: positive_prompt.into(),
            negative_prompt: negative_prompt.into(),
        }
    }

    /// 旁路模板, 原样输出提示词
    pub fn bypass() -> Self {
        Self::new(BYPASS, PLACEHOLDER, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positive_prompt(&self) -> &str {
        &self.positive_prompt
    }

    pub fn negative_prompt(&self) -> &str {
        &self.negative_prompt
    }

    /// 应用模板
    ///
    /// 正向提示词替换模板中所有的占位符;
    /// `apply_negative` 为 true 时, 负向提示词后追加 " " + 模板负向后缀
    pub fn apply(&self, positive: &str, negative: &str, apply_negative: bool) -> (String, String) {
        let negative = if apply_negative {
            format!("{negative} {}", self.negative_prompt)
        } else {
            negative.to_string()
        };
        (self.positive_prompt.replace(PLACEHOLDER, positive), negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_with_negative() {
        let template = Template::new("t", "a {prompt} b", "neg");
        assert_eq!(
            template.apply("X", "Y", true),
            ("a X b".to_string(), "Y neg".to_string())
        );
    }

    #[test]
    fn test_apply_without_negative() {
        let template = Template::new("t", "a {prompt} b", "neg");
        assert_eq!(
            template.apply("X", "Y", false),
            ("a X b".to_string(), "Y".to_string())
        );
    }

    #[test]
    fn test_bypass() {
        let bypass = Template::bypass();
        assert_eq!(bypass.name(), BYPASS);
        assert_eq!(
            bypass.apply("cat", "dog", false),
            ("cat".to_string(), "dog".to_string())
        );
        // 负向后缀为空, 仅追加一个空格
        assert_eq!(
            bypass.apply("cat", "dog", true),
            ("cat".to_string(), "dog ".to_string())
        );
    }

    #[test]
    fn test_placeholder_count() {
        let none = Template::new("none", "fixed text", "");
        assert_eq!(none.apply("X", "", false).0, "fixed text");

        let twice = Template::new("twice", "{prompt}, {prompt}", "");
        assert_eq!(twice.apply("X", "", false).0, "X, X");
    }

    #[test]
    fn test_input_is_inserted_literally() {
        let template = Template::new("t", "<{prompt}>", "");
        assert_eq!(template.apply("{prompt}", "", false).0, "<{prompt}>");
    }
}
