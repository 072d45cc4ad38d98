// Decoding of the survey headers and answers.

use snafu::prelude::*;

use crate::config::*;

/// The category of a header: the text before the first `[`, kept verbatim.
///
/// ```
/// # use skill_profile::parse_category;
/// assert_eq!(parse_category("Visual Design [Typography]").unwrap(), "Visual Design ");
/// ```
pub fn parse_category(header: &str) -> Result<&str, TaxonomyError> {
    let open = header.find('[').context(MalformedHeaderSnafu { header })?;
    Ok(&header[..open])
}

/// The sub-category of a header: the text inside the first `[...]` group,
/// without its leading whitespace.
///
/// ```
/// # use skill_profile::parse_sub_category;
/// assert_eq!(parse_sub_category("Visual Design [Typography]").unwrap(), "Typography");
/// ```
pub fn parse_sub_category(header: &str) -> Result<&str, TaxonomyError> {
    let open = header.find('[').context(MalformedHeaderSnafu { header })?;
    let rest = &header[open + 1..];
    let close = rest.find(']').context(MalformedHeaderSnafu { header })?;
    Ok(rest[..close].trim_start())
}

/// Both parts of a header at once.
pub fn parse_header(header: &str) -> Result<(&str, &str), TaxonomyError> {
    Ok((parse_category(header)?, parse_sub_category(header)?))
}

/// Maps an answer to its score. The match is exact and case-sensitive.
pub fn score_from_answer(answer: &str) -> Result<Score, TaxonomyError> {
    match answer {
        "High" => Ok(Score::HIGH),
        "Medium" => Ok(Score::MEDIUM),
        "Low" => Ok(Score::LOW),
        "None" => Ok(Score::NONE),
        _ => UnknownAnswerSnafu { answer }.fail(),
    }
}

impl Score {
    pub fn from_answer(answer: &str) -> Result<Score, TaxonomyError> {
        score_from_answer(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keeps_trailing_space() {
        assert_eq!(
            parse_category("Visual Design [Typography]"),
            Ok("Visual Design ")
        );
        assert_eq!(parse_category("Code[Rust]"), Ok("Code"));
        assert_eq!(parse_category("  Code  [Rust]"), Ok("  Code  "));
    }

    #[test]
    fn category_stops_at_first_bracket() {
        assert_eq!(parse_category("A [B] [C]"), Ok("A "));
        assert_eq!(parse_category("[Only]"), Ok(""));
    }

    #[test]
    fn sub_category_trims_leading_whitespace_only() {
        assert_eq!(
            parse_sub_category("Visual Design [Typography]"),
            Ok("Typography")
        );
        assert_eq!(parse_sub_category("Visual Design [ Color ]"), Ok("Color "));
        assert_eq!(parse_sub_category("A [B] [C]"), Ok("B"));
        assert_eq!(parse_sub_category("A []"), Ok(""));
    }

    #[test]
    fn malformed_headers() {
        let err = TaxonomyError::MalformedHeader {
            header: "Timestamp".to_string(),
        };
        assert_eq!(parse_category("Timestamp"), Err(err.clone()));
        assert_eq!(parse_sub_category("Timestamp"), Err(err));
        assert_eq!(
            parse_sub_category("Visual Design [Typography"),
            Err(TaxonomyError::MalformedHeader {
                header: "Visual Design [Typography".to_string()
            })
        );
        // The closing bracket must come after the opening one.
        assert!(parse_header("Visual ] Design [Typography").is_err());
    }

    #[test]
    fn header_pair() {
        assert_eq!(
            parse_header("Front End [CSS Grid]"),
            Ok(("Front End ", "CSS Grid"))
        );
    }

    #[test]
    fn scores() {
        assert_eq!(score_from_answer("High"), Ok(Score::HIGH));
        assert_eq!(score_from_answer("Medium"), Ok(Score::MEDIUM));
        assert_eq!(score_from_answer("Low"), Ok(Score::LOW));
        assert_eq!(score_from_answer("None"), Ok(Score::NONE));
        assert_eq!(Score::from_answer("High").map(|s| s.value()), Ok(3));
        assert_eq!(Score::from_answer("None").map(|s| s.value()), Ok(0));
    }

    #[test]
    fn unknown_answers() {
        for answer in ["high", "HIGH", " High", "High ", "", "3", "Very High"] {
            assert_eq!(
                score_from_answer(answer),
                Err(TaxonomyError::UnknownAnswer {
                    answer: answer.to_string()
                })
            );
        }
    }

    #[test]
    fn labels_round_trip() {
        for s in [Score::NONE, Score::LOW, Score::MEDIUM, Score::HIGH] {
            assert_eq!(score_from_answer(s.label()), Ok(s));
        }
    }
}
