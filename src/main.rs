use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use comfyui_sdxl_styles::{
    config::StylesConfig,
    error::Error,
    style::{node::default_style, NodeRegistry},
};

/// 查看已加载的提示词风格节点, 或在命令行中应用风格
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 风格文件目录, 默认读取 SDXL_STYLES_DIR 或随包的 styles 目录
    #[arg(long, global = true)]
    styles_dir: Option<PathBuf>,

    /// Verbose mode
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 列出节点
    List {
        /// 同时列出每个节点的风格名称
        #[arg(long)]
        styles: bool,
    },
    /// 使用指定节点的风格转换提示词
    Apply {
        /// 节点标识, 例如 ApplySDXLStyleSAI
        node: String,
        /// 风格名称
        #[arg(long, default_value = default_style())]
        style: String,
        /// 正向提示词
        #[arg(long, default_value = "")]
        positive: String,
        /// 负向提示词
        #[arg(long, default_value = "")]
        negative: String,
        /// 不追加风格的负向提示词
        #[arg(long)]
        no_negative_style: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    let config = match cli.styles_dir {
        Some(dir) => StylesConfig::new(dir),
        None => StylesConfig::from_env(),
    };
    let registry = NodeRegistry::init(&config);

    match cli.command.unwrap_or(Command::List { styles: false }) {
        Command::List { styles } => {
            for register in registry.iter() {
                println!("{}: {}", register.id(), register.node());
                if styles {
                    for name in register.node().styles().names() {
                        println!("    {name}");
                    }
                }
            }
        }
        Command::Apply {
            node,
            style,
            positive,
            negative,
            no_negative_style,
        } => {
            let node = registry
                .get(&node)
                .ok_or_else(|| Error::NodeNotFound(node.clone()))?;
            let (positive, negative) =
                node.execute(&positive, &negative, &style, !no_negative_style, true);
            println!("{positive}");
            println!("{negative}");
        }
    }
    Ok(())
}
