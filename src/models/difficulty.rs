//! 难度分配
//!
//! 维护"第几套 → 难度"的映射，支持两种模式：
//! - `Broadcast`：所有套使用同一个难度
//! - `PerSet`：每套单独选择
//!
//! 分段序列始终跟随套数调整长度（增长补 `easy`，缩短截断尾部），
//! 切换到统一模式时分段序列保留在后台，切回后恢复原有选择。

use serde::{Deserialize, Serialize};

use crate::error::DifficultyError;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 难度模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyMode {
    #[serde(rename = "broadcast")]
    Broadcast,
    #[default]
    #[serde(rename = "per-set")]
    PerSet,
}

/// 难度分配状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyPlan {
    mode: DifficultyMode,
    num_sets: usize,
    broadcast: Difficulty,
    per_set: Vec<Difficulty>,
}

impl DifficultyPlan {
    /// 创建分段模式的分配，所有套默认 `easy`
    pub fn new(num_sets: usize) -> Self {
        Self {
            mode: DifficultyMode::PerSet,
            num_sets,
            broadcast: Difficulty::Easy,
            per_set: vec![Difficulty::Easy; num_sets],
        }
    }

    /// 以给定的分段选择创建，套数等于序列长度
    pub fn per_set(levels: Vec<Difficulty>) -> Self {
        Self {
            mode: DifficultyMode::PerSet,
            num_sets: levels.len(),
            broadcast: Difficulty::Easy,
            per_set: levels,
        }
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    pub fn broadcast_level(&self) -> Difficulty {
        self.broadcast
    }

    /// 调整套数：增长补 `easy`，缩短截断尾部，与当前模式无关
    pub fn set_num_sets(&mut self, num_sets: usize) {
        self.num_sets = num_sets;
        self.per_set.resize(num_sets, Difficulty::Easy);
    }

    pub fn set_mode(&mut self, mode: DifficultyMode) {
        self.mode = mode;
    }

    pub fn set_broadcast_level(&mut self, level: Difficulty) {
        self.broadcast = level;
    }

    /// 修改第 `index` 套（从 0 开始）的难度，仅在分段模式下允许
    pub fn set_level(&mut self, index: usize, level: Difficulty) -> Result<(), DifficultyError> {
        if self.mode == DifficultyMode::Broadcast {
            return Err(DifficultyError::BroadcastActive);
        }
        let num_sets = self.num_sets;
        let slot = self
            .per_set
            .get_mut(index)
            .ok_or(DifficultyError::IndexOutOfRange { index, num_sets })?;
        *slot = level;
        Ok(())
    }

    /// 实际生效的分配，长度恒等于套数
    pub fn effective_assignment(&self) -> Vec<Difficulty> {
        match self.mode {
            DifficultyMode::Broadcast => vec![self.broadcast; self.num_sets],
            DifficultyMode::PerSet => self.per_set.clone(),
        }
    }
}

impl Default for DifficultyPlan {
    /// 页面默认：3 套，分别为 easy / medium / hard
    fn default() -> Self {
        Self::per_set(Difficulty::ALL.to_vec())
    }
}
