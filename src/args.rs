use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "窗口化下拉选择演示")]
pub struct Args {
    /// 配置文件路径（JSON），默认：$VSELECT_CONFIG 或 ~/.config/vselect/config.json
    #[arg(long)]
    pub config: Option<String>,

    /// 选项文件（JSON 数组），覆盖配置中的 options
    #[arg(long)]
    pub options: Option<String>,

    /// 使用异步加载的选择控件
    #[arg(long = "async", default_value_t = false)]
    pub is_async: bool,

    /// 异步加载的模拟延迟（毫秒）
    #[arg(long, default_value_t = 300)]
    pub latency_ms: u64,

    /// 日志输出文件；日志级别由 VSELECT_LOG 控制
    #[arg(long)]
    pub log_file: Option<String>,

    /// 没有任何选项时生成的示例数量
    #[arg(long, default_value_t = 10_000)]
    pub sample: usize,
}
