pub use crate::config::*;

/// A builder for collecting survey rows.
///
/// ```
/// pub use skill_profile::builder::Builder;
/// pub use skill_profile::SurveyRules;
/// # use skill_profile::ProfileError;
///
/// let mut builder = Builder::new(&SurveyRules::default());
///
/// builder.add_answers("alice", &[("Visual Design [Typography]", "High")]);
/// builder.add_answers("bob", &[("Visual Design [Typography]", "Low")]);
///
/// let profiles = builder.build()?;
/// assert_eq!(profiles.len(), 3);
///
/// # Ok::<(), ProfileError>(())
/// ```
pub struct Builder {
    pub(crate) _rules: SurveyRules,
    pub(crate) _rows: Vec<Row>,
}

impl Builder {
    pub fn new(rules: &SurveyRules) -> Builder {
        Builder {
            _rules: rules.clone(),
            _rows: Vec::new(),
        }
    }

    /// Adds the answers of one person. The identifier field is filled in
    /// from the rules.
    pub fn add_answers(&mut self, identifier: &str, answers: &[(&str, &str)]) {
        let mut fields: Vec<(String, String)> =
            vec![(self._rules.identifier_field.clone(), identifier.to_string())];
        fields.extend(
            answers
                .iter()
                .map(|(h, a)| (h.to_string(), a.to_string())),
        );
        self.add_row(Row { fields });
    }

    /// Adds a raw row, as read from an export.
    pub fn add_row(&mut self, row: Row) {
        self._rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self._rows.len()
    }

    /// Runs the aggregation over all the rows added so far.
    pub fn build(&self) -> Result<ProfileSet, ProfileError> {
        crate::aggregate(&self._rows, &self._rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_identifier_field_of_the_rules() {
        let mut builder = Builder::new(&SurveyRules::new("Email", "Timestamp"));
        builder.add_answers("a@x.org", &[("Code [Rust]", "High")]);
        assert_eq!(builder.num_rows(), 1);
        assert_eq!(builder._rows[0].get("Email"), Some("a@x.org"));
        let ps = builder.build().unwrap();
        assert_eq!(
            ps.get("a@x.org").unwrap().score("Code ", "Rust"),
            Some(Score::HIGH)
        );
    }

    #[test]
    fn build_can_be_repeated() {
        let mut builder = Builder::new(&SurveyRules::default());
        builder.add_answers("a", &[("Code [Rust]", "Low")]);
        let first = builder.build().unwrap();
        builder.add_answers("b", &[("Code [Rust]", "High")]);
        let second = builder.build().unwrap();
        assert_eq!(first.people().len(), 1);
        assert_eq!(second.people().len(), 2);
        assert_eq!(second.team().score("Code ", "Rust"), Some(Score::MEDIUM));
    }
}
