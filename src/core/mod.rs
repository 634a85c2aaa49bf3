//! 核心逻辑：包发现、镜像引用拼装、顺序拉取

pub mod discovery;
pub mod image;
pub mod pull;
