// ********* Input data structures ***********

use snafu::Snafu;

/// The reserved identifier under which the team average is stored.
///
/// It always comes last in a [`ProfileSet`].
pub const TEAM_STACK_AVERAGE: &str = "Team Stack Average";

/// The answers of one respondent, in the order of the columns of the export.
///
/// Every field maps a header such as `Visual Design [Typography]` to the
/// answer text (`High`, `Medium`, `Low` or `None`). Two reserved fields are
/// expected as well: the identifier of the respondent and a timestamp.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Row {
    pub fields: Vec<(String, String)>,
}

impl Row {
    pub fn new(fields: &[(&str, &str)]) -> Row {
        Row {
            fields: fields
                .iter()
                .map(|(h, a)| (h.to_string(), a.to_string()))
                .collect(),
        }
    }

    /// The answer stored under the given header, if any.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, a)| a.as_str())
    }
}

/// An ordinal rating between 0 (`None`) and 3 (`High`).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct Score(u8);

impl Score {
    pub const NONE: Score = Score(0);
    pub const LOW: Score = Score(1);
    pub const MEDIUM: Score = Score(2);
    pub const HIGH: Score = Score(3);

    pub fn value(self) -> u8 {
        self.0
    }

    /// The answer text that produces this score.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "None",
            1 => "Low",
            2 => "Medium",
            _ => "High",
        }
    }

    /// Rounds a mean of scores to the nearest score, halves going up.
    ///
    /// The input is expected to be in `[0, 3]`. Values outside are clamped.
    pub(crate) fn from_mean(mean: f64) -> Score {
        // f64::round rounds halves away from zero, which is round-half-up on
        // non-negative numbers.
        let r = mean.round();
        if r <= 0.0 {
            Score::NONE
        } else if r >= 3.0 {
            Score::HIGH
        } else {
            Score(r as u8)
        }
    }
}

/// The rules for reading the reserved fields of a row.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyRules {
    /// The header of the field that identifies a respondent.
    pub identifier_field: String,
    /// The header of the timestamp field. It is always discarded.
    pub timestamp_field: String,
}

impl SurveyRules {
    pub const DEFAULT_IDENTIFIER_FIELD: &'static str = "Username";
    pub const DEFAULT_TIMESTAMP_FIELD: &'static str = "Timestamp";

    pub fn new(identifier_field: &str, timestamp_field: &str) -> SurveyRules {
        SurveyRules {
            identifier_field: identifier_field.to_string(),
            timestamp_field: timestamp_field.to_string(),
        }
    }
}

impl Default for SurveyRules {
    fn default() -> Self {
        SurveyRules::new(
            SurveyRules::DEFAULT_IDENTIFIER_FIELD,
            SurveyRules::DEFAULT_TIMESTAMP_FIELD,
        )
    }
}

// ******** Output data structures *********

/// The scores of one category, sub-categories in order of first appearance.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CategoryScores {
    pub name: String,
    pub sub_categories: Vec<(String, Score)>,
}

impl CategoryScores {
    fn new(name: &str) -> CategoryScores {
        CategoryScores {
            name: name.to_string(),
            sub_categories: Vec::new(),
        }
    }

    pub fn get(&self, sub_category: &str) -> Option<Score> {
        self.sub_categories
            .iter()
            .find(|(s, _)| s == sub_category)
            .map(|(_, sc)| *sc)
    }

    /// The arithmetic mean of the scores, not rounded.
    pub fn average(&self) -> f64 {
        if self.sub_categories.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .sub_categories
            .iter()
            .map(|(_, sc)| sc.value() as u32)
            .sum();
        total as f64 / self.sub_categories.len() as f64
    }

    // Overwrites the score of an existing sub-category in place.
    fn set(&mut self, sub_category: &str, score: Score) {
        match self
            .sub_categories
            .iter_mut()
            .find(|(s, _)| s == sub_category)
        {
            Some(elt) => elt.1 = score,
            None => self.sub_categories.push((sub_category.to_string(), score)),
        }
    }
}

/// The skill profile of a person, or of the team.
///
/// Invariant: every category in `categories` has an entry in
/// `category_averages` that equals the mean of its scores.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Profile {
    categories: Vec<CategoryScores>,
    category_averages: Vec<(String, f64)>,
}

impl Profile {
    pub fn new() -> Profile {
        Profile::default()
    }

    /// Stores a score, creating the category on first use. The average of the
    /// category is updated immediately.
    pub fn insert(&mut self, category: &str, sub_category: &str, score: Score) {
        let idx = match self.categories.iter().position(|c| c.name == category) {
            Some(idx) => idx,
            None => {
                self.categories.push(CategoryScores::new(category));
                self.category_averages.push((category.to_string(), 0.0));
                self.categories.len() - 1
            }
        };
        self.categories[idx].set(sub_category, score);
        self.category_averages[idx].1 = self.categories[idx].average();
    }

    pub fn categories(&self) -> &[CategoryScores] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryScores> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn score(&self, category: &str, sub_category: &str) -> Option<Score> {
        self.category(category).and_then(|c| c.get(sub_category))
    }

    pub fn category_averages(&self) -> &[(String, f64)] {
        &self.category_averages
    }

    pub fn category_average(&self, name: &str) -> Option<f64> {
        self.category_averages
            .iter()
            .find(|(c, _)| c == name)
            .map(|(_, avg)| *avg)
    }

    /// All the (category, sub-category) pairs of this profile.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str, Score)> {
        self.categories.iter().flat_map(|c| {
            c.sub_categories
                .iter()
                .map(move |(s, sc)| (c.name.as_str(), s.as_str(), *sc))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// All the profiles of a survey, in order of first appearance of each person,
/// followed by the team average under [`TEAM_STACK_AVERAGE`].
#[derive(PartialEq, Debug, Clone)]
pub struct ProfileSet {
    pub(crate) people: Vec<(String, Profile)>,
    pub(crate) team: Profile,
}

impl ProfileSet {
    /// All the identifiers, the team entry last.
    pub fn identifiers(&self) -> Vec<&str> {
        self.people
            .iter()
            .map(|(id, _)| id.as_str())
            .chain(std::iter::once(TEAM_STACK_AVERAGE))
            .collect()
    }

    pub fn get(&self, identifier: &str) -> Option<&Profile> {
        if identifier == TEAM_STACK_AVERAGE {
            return Some(&self.team);
        }
        self.people
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, p)| p)
    }

    /// The real respondents only.
    pub fn people(&self) -> &[(String, Profile)] {
        &self.people
    }

    pub fn team(&self) -> &Profile {
        &self.team
    }

    /// All the entries, the team entry last.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.people
            .iter()
            .map(|(id, p)| (id.as_str(), p))
            .chain(std::iter::once((TEAM_STACK_AVERAGE, &self.team)))
    }

    /// The number of entries, the team entry included.
    ///
    /// The team entry is always present, so this is at least 1. Use
    /// `people().is_empty()` to know whether anybody answered.
    pub fn len(&self) -> usize {
        self.people.len() + 1
    }
}

// ******** Errors *********

/// Failures when decoding a header or an answer.
#[derive(Eq, PartialEq, Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TaxonomyError {
    #[snafu(display("header {header:?} is not of the form 'Category [Sub-category]'"))]
    MalformedHeader { header: String },
    #[snafu(display("answer {answer:?} is not one of High, Medium, Low, None"))]
    UnknownAnswer { answer: String },
}

/// Errors that abort the construction of a profile set.
///
/// Rows are numbered from 1, not counting the header row.
#[derive(Eq, PartialEq, Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ProfileError {
    #[snafu(display("row {row}, field {header:?}: {source}"))]
    Taxonomy {
        row: usize,
        header: String,
        source: TaxonomyError,
    },
    #[snafu(display("row {row}: missing or empty identifier field {field:?}"))]
    MissingIdentifier { row: usize, field: String },
    #[snafu(display("row {row}: identifier {identifier:?} is reserved for the team average"))]
    ReservedIdentifier { row: usize, identifier: String },
}

impl ProfileError {
    /// The row that caused the failure.
    pub fn row(&self) -> usize {
        match self {
            ProfileError::Taxonomy { row, .. } => *row,
            ProfileError::MissingIdentifier { row, .. } => *row,
            ProfileError::ReservedIdentifier { row, .. } => *row,
        }
    }
}
