/*!
Skill profiles from a skill survey.

A survey export has one row per respondent and one column per skill. The
headers encode a two-level taxonomy, `Category [Sub-category]`, and each
answer is one of `High`, `Medium`, `Low` or `None`. This crate turns such
rows into a [`ProfileSet`]: one [`Profile`] per respondent plus a synthetic
team profile stored under [`TEAM_STACK_AVERAGE`].

```
use skill_profile::*;

let rows = vec![
    Row::new(&[
        ("Username", "alice"),
        ("Visual Design [Typography]", "High"),
        ("Visual Design [Color]", "Low"),
    ]),
    Row::new(&[
        ("Username", "bob"),
        ("Visual Design [Typography]", "Medium"),
        ("Visual Design [Color]", "Medium"),
    ]),
];
let profiles = aggregate(&rows, &SurveyRules::default())?;
assert_eq!(profiles.identifiers(), vec!["alice", "bob", TEAM_STACK_AVERAGE]);
assert_eq!(profiles.team().score("Visual Design ", "Typography"), Some(Score::HIGH));
# Ok::<(), ProfileError>(())
```

See the [manual] for the details of the computation.
*/

mod config;
mod taxonomy;

pub mod builder;
pub mod manual;
pub mod quick_start;

use log::{debug, info};
use snafu::prelude::*;

pub use crate::config::*;
pub use crate::taxonomy::*;

/// Builds the profiles of all the respondents and of the team.
///
/// Arguments:
/// * `rows` the answers, one row per respondent, in the order of the export
/// * `rules` the names of the reserved identifier and timestamp fields
///
/// The first error aborts the whole computation. When an identifier appears
/// several times, the last row wins but the person keeps the position of its
/// first appearance.
pub fn aggregate(rows: &[Row], rules: &SurveyRules) -> Result<ProfileSet, ProfileError> {
    info!("aggregate: processing {} rows", rows.len());

    let mut people: Vec<(String, Profile)> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let lineno = idx + 1;
        let (id, profile) = build_person(row, lineno, rules)?;
        debug!(
            "aggregate: row {}: {:?} with {} categories",
            lineno,
            id,
            profile.categories().len()
        );
        match people.iter_mut().find(|(pid, _)| *pid == id) {
            Some(elt) => {
                debug!("aggregate: row {}: replacing earlier answers of {:?}", lineno, id);
                elt.1 = profile;
            }
            None => people.push((id, profile)),
        }
    }

    let team = team_profile(&people);
    info!(
        "aggregate: {} people, team profile over {} categories",
        people.len(),
        team.categories().len()
    );
    Ok(ProfileSet { people, team })
}

// Reads one row into the identifier and the profile of this person.
fn build_person(
    row: &Row,
    lineno: usize,
    rules: &SurveyRules,
) -> Result<(String, Profile), ProfileError> {
    let id = match row.get(&rules.identifier_field) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return MissingIdentifierSnafu {
                row: lineno,
                field: rules.identifier_field.clone(),
            }
            .fail();
        }
    };
    ensure!(
        id != TEAM_STACK_AVERAGE,
        ReservedIdentifierSnafu {
            row: lineno,
            identifier: id
        }
    );

    let mut profile = Profile::new();
    for (header, answer) in row.fields.iter() {
        // The reserved fields are never part of the taxonomy.
        if *header == rules.identifier_field || *header == rules.timestamp_field {
            continue;
        }
        let (category, sub_category) = parse_header(header).context(TaxonomySnafu {
            row: lineno,
            header: header.clone(),
        })?;
        let score = score_from_answer(answer).context(TaxonomySnafu {
            row: lineno,
            header: header.clone(),
        })?;
        profile.insert(category, sub_category, score);
    }
    Ok((id, profile))
}

/// Averages the scores of all the people, sub-category by sub-category.
///
/// The sum for a sub-category only includes the people who answered it, but
/// it is always divided by the total number of people. The mean is then
/// rounded to the nearest score, halves going up.
fn team_profile(people: &[(String, Profile)]) -> Profile {
    let num_people = people.len();
    let mut team = Profile::new();
    if num_people == 0 {
        return team;
    }

    // Totals in order of first appearance across all the people.
    let mut totals: Vec<(&str, &str, u32)> = Vec::new();
    for (_, profile) in people.iter() {
        for (category, sub_category, score) in profile.slots() {
            match totals
                .iter_mut()
                .find(|(c, s, _)| *c == category && *s == sub_category)
            {
                Some(elt) => elt.2 += score.value() as u32,
                None => totals.push((category, sub_category, score.value() as u32)),
            }
        }
    }

    for (category, sub_category, total) in totals {
        let mean = total as f64 / num_people as f64;
        let score = Score::from_mean(mean);
        debug!(
            "team_profile: {:?} / {:?}: mean {} -> {:?}",
            category, sub_category, mean, score
        );
        team.insert(category, sub_category, score);
    }
    team
}
