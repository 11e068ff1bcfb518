use deal_core::ids::VentureId;
use serde::de::DeserializeOwned;

/// Parse a kebab-case enum value using serde-deserialization.
///
/// Accepts `snake_case` and mixed-case spellings (`Due_Diligence`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum argument.
pub fn parse_opt_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}

pub fn parse_id(raw: &str) -> anyhow::Result<VentureId> {
    raw.trim().parse().map_err(anyhow::Error::from)
}

#[cfg(test)]
mod tests {
    use deal_core::enums::{AuditAction, DealType, Stage};
    use deal_core::ids::VentureId;

    use super::{parse_enum, parse_id, parse_opt_enum};

    #[test]
    fn parses_kebab_case_enum() {
        let stage: Stage = parse_enum("due-diligence", "stage").expect("stage should parse");
        assert_eq!(stage, Stage::DueDiligence);
    }

    #[test]
    fn parses_snake_and_mixed_case_aliases() {
        let stage: Stage = parse_enum("Deal_Terms", "stage").expect("stage should parse");
        assert_eq!(stage, Stage::DealTerms);
        let action: AuditAction =
            parse_enum("stage_changed", "action").expect("action should parse");
        assert_eq!(action, AuditAction::StageChanged);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Stage>("archived", "stage").expect_err("should fail");
        assert!(err.to_string().contains("invalid stage 'archived'"));
    }

    #[test]
    fn optional_enum_passes_none_through() {
        assert_eq!(parse_opt_enum::<DealType>(None, "deal type").unwrap(), None);
        assert_eq!(
            parse_opt_enum::<DealType>(Some("secondary"), "deal type").unwrap(),
            Some(DealType::Secondary)
        );
    }

    #[test]
    fn parses_venture_ids() {
        assert_eq!(parse_id(" 4 ").unwrap(), VentureId(4));
        assert!(parse_id("four").is_err());
    }
}
