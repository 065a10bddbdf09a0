use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Short,
    Diagram,
}

/// 表单中的题型数量输入，可能为 0 或负数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionMixInput {
    pub mcq: i64,
    pub short: i64,
    pub diagram: i64,
}

impl Default for QuestionMixInput {
    fn default() -> Self {
        Self {
            mcq: 3,
            short: 2,
            diagram: 1,
        }
    }
}

impl QuestionMixInput {
    /// 转换为规范形式
    pub fn normalize(&self) -> QuestionMix {
        QuestionMix::from_counts([
            (QuestionType::Mcq, self.mcq),
            (QuestionType::Short, self.short),
            (QuestionType::Diagram, self.diagram),
        ])
    }
}

/// 题型分布的规范形式：只保留数量为正的题型
///
/// 全部为 0 时为空映射，由服务端决定默认分布
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionMix(BTreeMap<QuestionType, u64>);

impl QuestionMix {
    /// 负数按 0 处理，0 不进入结果
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (QuestionType, i64)>,
    {
        let map = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(ty, count)| (ty, count as u64))
            .collect();
        Self(map)
    }

    pub fn get(&self, ty: QuestionType) -> Option<u64> {
        self.0.get(&ty).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionType, u64)> + '_ {
        self.0.iter().map(|(ty, count)| (*ty, *count))
    }

    /// 各题型数量之和
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_entries_dropped() {
        let mix = QuestionMixInput { mcq: 3, short: 2, diagram: 0 }.normalize();
        assert_eq!(mix.get(QuestionType::Mcq), Some(3));
        assert_eq!(mix.get(QuestionType::Short), Some(2));
        assert_eq!(mix.get(QuestionType::Diagram), None);
        assert_eq!(
            serde_json::to_value(&mix).unwrap(),
            serde_json::json!({"mcq": 3, "short": 2})
        );
    }

    #[test]
    fn test_all_zero_is_empty() {
        let mix = QuestionMixInput { mcq: 0, short: 0, diagram: 0 }.normalize();
        assert!(mix.is_empty());
        assert_eq!(serde_json::to_string(&mix).unwrap(), "{}");
    }

    #[test]
    fn test_negative_clamped() {
        let mix = QuestionMixInput { mcq: -4, short: 1, diagram: -1 }.normalize();
        assert_eq!(mix.len(), 1);
        assert_eq!(mix.total(), 1);
    }

    #[test]
    fn test_large_counts_kept_exact() {
        let mix = QuestionMixInput { mcq: 5_000_000_000, short: 0, diagram: 0 }.normalize();
        assert_eq!(mix.get(QuestionType::Mcq), Some(5_000_000_000));
        assert_eq!(
            serde_json::to_value(&mix).unwrap(),
            serde_json::json!({"mcq": 5_000_000_000u64})
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = QuestionMixInput { mcq: 5, short: 0, diagram: 2 }.normalize();
        let twice = QuestionMix::from_counts(once.iter().map(|(ty, c)| (ty, c as i64)));
        assert_eq!(once, twice);
    }
}
