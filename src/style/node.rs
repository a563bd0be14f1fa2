//! 提示词风格节点

use std::{fmt, sync::Arc};

use log::info;

use crate::core::{
    node_base::{InputSpec, InputType, OutputSpec},
    types::NODE_STRING,
};

use super::{set::StyleSet, template::BYPASS};

/// 调试输出的分隔线
const LOG_SEPARATOR_WIDTH: usize = 79;

/// 风格节点
///
/// 无状态, 绑定一个只读的风格集合
#[derive(Debug, Clone)]
pub struct StyleNode {
    id: String,
    file: String,
    styles: Arc<StyleSet>,
}

impl StyleNode {
    pub fn new(id: impl Into<String>, file: impl Into<String>, styles: Arc<StyleSet>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            styles,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 来源风格文件名
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// 节点输入
    pub fn input_spec(&self) -> InputSpec {
        InputSpec::new()
            .with_required("positive_prompt", InputType::string().multiline(true))
            .with_required("negative_prompt", InputType::string().multiline(true))
            .with_required("style", InputType::list(self.styles.names()))
            .with_required(
                "apply_negative_style",
                InputType::bool()
                    .default(true)
                    .label_on("yes")
                    .label_off("no"),
            )
            .with_required(
                "log_prompt",
                InputType::bool()
                    .default(false)
                    .label_on("yes")
                    .label_off("no"),
            )
    }

    /// 节点输出
    pub fn output_spec() -> OutputSpec {
        OutputSpec::new()
            .with_output(NODE_STRING, "positive_prompt")
            .with_output(NODE_STRING, "negative_prompt")
    }

    /// 应用选中的风格, 未知风格按旁路处理
    pub fn execute(
        &self,
        positive_prompt: &str,
        negative_prompt: &str,
        style: &str,
        apply_negative_style: bool,
        log_prompt: bool,
    ) -> (String, String) {
        let template = self.styles.get_or_bypass(style);
        let (output_positive, output_negative) =
            template.apply(positive_prompt, negative_prompt, apply_negative_style);

        if log_prompt {
            let lines = self.prompt_trace(
                style,
                positive_prompt,
                negative_prompt,
                &output_positive,
                &output_negative,
            );
            for line in lines {
                info!("{line}");
            }
        }

        (output_positive, output_negative)
    }

    /// 提示词变换的调试信息
    fn prompt_trace(
        &self,
        style: &str,
        input_positive: &str,
        input_negative: &str,
        output_positive: &str,
        output_negative: &str,
    ) -> Vec<String> {
        let separator = "-".repeat(LOG_SEPARATOR_WIDTH);
        vec![
            separator.clone(),
            format!("Style: {style} from '{}' file", self.file),
            format!("Input Positive: {input_positive}"),
            format!("Input Negative: {input_negative}"),
            format!("Output Positive: {output_positive}"),
            format!("Output Negative: {output_negative}"),
            separator,
        ]
    }
}

impl fmt::Display for StyleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, filename={}, #styles={}",
            self.id,
            self.file,
            self.styles.len()
        )
    }
}

/// 默认选中的风格
pub fn default_style() -> &'static str {
    BYPASS
}
