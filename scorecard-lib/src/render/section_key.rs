use strum::{Display, EnumIter, IntoStaticStr};

/// The fixed set of named report sections a template can reference as `{{sections.<key>}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum SectionKey {
    OverallTier,
    Strengths,
    Weaknesses,
    StrategicPlan,
    Resources,
    Benchmarks,
    LearningPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_key_names() {
        let names: Vec<&'static str> = SectionKey::iter().map(Into::into).collect();
        assert_eq!(
            names,
            ["overallTier", "strengths", "weaknesses", "strategicPlan", "resources", "benchmarks", "learningPath"]
        );
    }

    #[test]
    fn test_display_matches_key_name() {
        assert_eq!(SectionKey::StrategicPlan.to_string(), "strategicPlan");
    }
}
