//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::Serialize;

/// 配置选项 (支持详细/安静模式切换)
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,      // 是否详细输出
    pub docker_bin: String, // 外部拉取工具的名称或路径
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            docker_bin: "docker".to_string(),
        }
    }
}

/// 输出格式类型
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// 一个包声明对应的镜像描述
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageImage {
    pub package: String,
    pub registry: String,
    pub repository: String,
    pub tag: String,
}

impl PackageImage {
    /// 拼装完整镜像引用 registry/repository:tag
    pub fn reference(&self) -> String {
        format!("{}/{}:{}", self.registry, self.repository, self.tag)
    }
}
