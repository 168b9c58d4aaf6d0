use crate::reader::{LocalizedString, Reader, ReaderError};

/// Maps an objective type code to its templated description.
///
/// The `{guests}`, `{year}`, and `{currency}` placeholders are left for
/// downstream consumers to substitute. Unrecognized codes map to `None`
/// rather than failing the decode.
pub const fn objective_description(kind: u32) -> Option<&'static str> {
    match kind {
        1 => Some("To have at least {guests} guests in your park at the end of {year}, with a park rating of at least 600"),
        2 => Some("To achieve a park value of at least {currency} at the end of {year}"),
        3 => Some("Have Fun!"),
        4 => Some("Build the best {guests} you can!"),
        5 => Some("To have 10 different types of roller coasters operating in your park, each with an excitement value of at least 6.00"),
        6 => Some("To have at least {guests} guests in your park. You must not let the park rating drop below 700 at any time!"),
        7 => Some("To achieve a monthly income from ride tickets of at least {currency}"),
        8 => Some("To have 10 different types of roller coasters operating in your park, each with a minimum length of {guests}, and an excitement rating of at least 7.00"),
        9 => Some("To finish building all 5 of the partially built roller coasters in this park, designing them to achieve excitement ratings of at least {currency} each"),
        10 => Some("To repay your loan and achieve a park value of at least {currency}"),
        11 => Some("To achieve a monthly profit from food, drink and merchandise sales of at least {currency}"),
        _ => None,
    }
}

/// The scenario's win condition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Objective {
    /// Objective type code, 1 through 11 in current saves
    pub kind: u32,

    /// Templated text for the type code, `None` when the code is unknown
    pub description: Option<&'static str>,
    pub year: u32,

    /// Shared field: guest count (type 1/6), ride id (type 4), or minimum
    /// length (type 8)
    pub guests: u64,

    /// Shared field: currency amount, or minimum excitement for type 9
    pub currency: u64,
    pub rating_warning_days: u16,

    /// money, stored unsigned
    pub completed_company_value: u64,
    pub allow_early_completion: bool,
}

/// Scenario metadata, localized text, and the objective
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioChunk {
    pub category: u32,
    pub name: LocalizedString,
    pub park_name: LocalizedString,
    pub details: LocalizedString,
    pub objective: Objective,
    pub scenario_file_name: String,
}

impl ScenarioChunk {
    pub(crate) fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let category = reader.read_u32()?;
        let name = reader.read_string_table()?;
        let park_name = reader.read_string_table()?;
        let details = reader.read_string_table()?;

        let kind = reader.read_u32()?;
        let year = reader.read_u32()?;
        let objective = Objective {
            kind,
            description: objective_description(kind),
            year,
            guests: reader.read_u64()?,
            currency: reader.read_u64()?,
            rating_warning_days: reader.read_u16()?,
            completed_company_value: reader.read_money(8)?,
            allow_early_completion: reader.read_bool()?,
        };

        Ok(ScenarioChunk {
            category,
            name,
            park_name,
            details,
            objective,
            scenario_file_name: reader.read_string()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn string_table(lang: &str, value: &str) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(lang.as_bytes());
        data.push(0);
        data.extend_from_slice(value.as_bytes());
        data.push(0);
        data
    }

    fn scenario_bytes(objective_kind: u32) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes()); // category
        data.extend_from_slice(&string_table("en-GB", "Crazy Castle"));
        data.extend_from_slice(&string_table("en-GB", "Crazy Castle"));
        data.extend_from_slice(&string_table("en-GB", "Build it up"));
        data.extend_from_slice(&objective_kind.to_le_bytes());
        data.extend_from_slice(&3u32.to_le_bytes()); // year
        data.extend_from_slice(&1500u64.to_le_bytes()); // guests
        data.extend_from_slice(&100_000u64.to_le_bytes()); // currency
        data.extend_from_slice(&14u16.to_le_bytes());
        data.extend_from_slice(&250_000u64.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes()); // allow early completion
        data.extend_from_slice(b"crazy_castle.park\0");
        data
    }

    #[test]
    fn test_scenario_chunk() {
        let data = scenario_bytes(1);
        let mut reader = Reader::new(&data);
        let chunk = ScenarioChunk::read(&mut reader).unwrap();

        assert_eq!(chunk.category, 2);
        assert_eq!(chunk.name.value, "Crazy Castle");
        assert_eq!(chunk.objective.kind, 1);
        assert_eq!(chunk.objective.year, 3);
        assert_eq!(chunk.objective.guests, 1500);
        assert_eq!(chunk.objective.currency, 100_000);
        assert_eq!(chunk.objective.rating_warning_days, 14);
        assert_eq!(chunk.objective.completed_company_value, 250_000);
        assert!(chunk.objective.allow_early_completion);
        assert_eq!(chunk.scenario_file_name, "crazy_castle.park");
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_have_fun_objective() {
        let data = scenario_bytes(3);
        let mut reader = Reader::new(&data);
        let chunk = ScenarioChunk::read(&mut reader).unwrap();
        assert_eq!(chunk.objective.description, Some("Have Fun!"));
    }

    #[test]
    fn test_unknown_objective_has_no_description() {
        let data = scenario_bytes(99);
        let mut reader = Reader::new(&data);
        let chunk = ScenarioChunk::read(&mut reader).unwrap();
        assert_eq!(chunk.objective.kind, 99);
        assert_eq!(chunk.objective.description, None);
    }

    #[rstest]
    #[case(1, "{guests}")]
    #[case(2, "{currency}")]
    #[case(7, "{currency}")]
    #[case(8, "{guests}")]
    fn test_objective_placeholders(#[case] kind: u32, #[case] placeholder: &str) {
        let description = objective_description(kind).unwrap();
        assert!(description.contains(placeholder));
    }

    #[test]
    fn test_all_known_objectives_have_descriptions() {
        for kind in 1..=11 {
            assert!(objective_description(kind).is_some());
        }
        assert_eq!(objective_description(0), None);
        assert_eq!(objective_description(12), None);
    }
}
