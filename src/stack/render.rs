// Presentation of the profiles: the summary file, the radar chart, the
// category breakdown and the text report.

use log::info;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;

use skill_profile::*;

use crate::stack::config_reader::*;
use crate::stack::StackResult;

/// The css class of a bar in the category breakdown. The largest score has
/// the full size.
pub fn size_class(score: Score) -> &'static str {
    match score.value() {
        0 => "porcentage-tiny",
        1 => "porcentage-small",
        2 => "porcentage-mid",
        _ => "",
    }
}

/// The raw scores and averages of a profile.
pub fn profile_to_json(profile: &Profile) -> JSValue {
    let mut categories: JSMap<String, JSValue> = JSMap::new();
    for c in profile.categories() {
        let mut subs: JSMap<String, JSValue> = JSMap::new();
        for (name, score) in c.sub_categories.iter() {
            subs.insert(name.clone(), json!(score.value()));
        }
        categories.insert(c.name.clone(), JSValue::Object(subs));
    }
    let mut averages: JSMap<String, JSValue> = JSMap::new();
    for (name, avg) in profile.category_averages() {
        averages.insert(name.clone(), json!(avg));
    }
    json!({"categories": categories, "categoryAverages": averages})
}

/// One row of bars per category, one bar per sub-category, in the order of
/// the survey.
pub fn category_breakdown(profile: &Profile) -> JSValue {
    let rows: Vec<JSValue> = profile
        .categories()
        .iter()
        .map(|c| {
            let bars: Vec<JSValue> = c
                .sub_categories
                .iter()
                .map(|(name, score)| {
                    json!({
                        "subCategory": name,
                        "score": score.value(),
                        "sizeClass": size_class(*score),
                    })
                })
                .collect();
            json!({"category": c.name, "bars": bars})
        })
        .collect();
    JSValue::Array(rows)
}

/// The configuration of a polar (spider web) chart of the category averages.
pub fn radar_chart(series_name: &str, profile: &Profile) -> JSValue {
    let (names, values): (Vec<&str>, Vec<f64>) = profile
        .category_averages()
        .iter()
        .map(|(name, avg)| (name.as_str(), *avg))
        .unzip();
    json!({
        "chart": {
            "polar": true,
            "type": "area",
            "backgroundColor": "rgba(255, 255, 255, 0.0)"
        },
        "pane": {"size": "80%"},
        "xAxis": {
            "categories": names,
            "tickmarkPlacement": "on",
            "lineWidth": 0
        },
        "yAxis": {
            "gridLineInterpolation": "polygon",
            "lineWidth": 0,
            "min": 0,
            "max": 3,
            "labels": {"enabled": false}
        },
        "legend": {"enabled": false},
        "series": [{
            "name": series_name,
            "data": values,
            "pointPlacement": "on"
        }]
    })
}

pub fn build_summary_js(config: &StackConfig, profiles: &ProfileSet) -> StackResult<JSValue> {
    let rules = config.rules()?;
    let c = OutputConfig {
        stack: config.output_settings.stack_name.clone(),
        identifier_column: rules.identifier_field,
        people: profiles.people().len(),
    };

    let mut profiles_js: JSMap<String, JSValue> = JSMap::new();
    let mut views_js: JSMap<String, JSValue> = JSMap::new();
    for (id, profile) in profiles.iter() {
        profiles_js.insert(id.to_string(), profile_to_json(profile));
        views_js.insert(
            id.to_string(),
            json!({
                "breakdown": category_breakdown(profile),
                "radar": radar_chart(id, profile),
            }),
        );
    }
    Ok(json!({
        "config": c,
        "people": profiles.identifiers(),
        "profiles": profiles_js,
        "views": views_js,
    }))
}

/// Prints the stack of one person.
pub fn log_profile(id: &str, profile: &Profile) {
    info!("{}", id);
    for c in profile.categories() {
        info!("  {} ({:.2})", c.name, c.average());
        for (name, score) in c.sub_categories.iter() {
            info!("      {} {}", score.value(), name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> ProfileSet {
        let rows = vec![
            Row::new(&[
                ("Username", "alice"),
                ("Visual Design [Typography]", "High"),
                ("Visual Design [Color]", "Low"),
                ("Front End [CSS]", "None"),
            ]),
            Row::new(&[
                ("Username", "bob"),
                ("Visual Design [Typography]", "Medium"),
                ("Visual Design [Color]", "Medium"),
                ("Front End [CSS]", "High"),
            ]),
        ];
        aggregate(&rows, &SurveyRules::default()).unwrap()
    }

    fn config() -> StackConfig {
        StackConfig {
            output_settings: OutputSettings {
                stack_name: "Design".to_string(),
                output_directory: None,
            },
            survey_sources: vec![SurveySource {
                provider: "csv".to_string(),
                file_path: "poll.csv".to_string(),
                identifier_column: None,
                timestamp_column: None,
                excel_worksheet_name: None,
            }],
        }
    }

    #[test]
    fn size_classes() {
        assert_eq!(size_class(Score::HIGH), "");
        assert_eq!(size_class(Score::MEDIUM), "porcentage-mid");
        assert_eq!(size_class(Score::LOW), "porcentage-small");
        assert_eq!(size_class(Score::NONE), "porcentage-tiny");
    }

    #[test]
    fn breakdown_keeps_survey_order() {
        let ps = profiles();
        let js = category_breakdown(ps.get("alice").unwrap());
        assert_eq!(
            js,
            json!([
                {"category": "Visual Design ", "bars": [
                    {"subCategory": "Typography", "score": 3, "sizeClass": ""},
                    {"subCategory": "Color", "score": 1, "sizeClass": "porcentage-small"},
                ]},
                {"category": "Front End ", "bars": [
                    {"subCategory": "CSS", "score": 0, "sizeClass": "porcentage-tiny"},
                ]},
            ])
        );
    }

    #[test]
    fn radar_uses_category_averages() {
        let ps = profiles();
        let js = radar_chart(TEAM_STACK_AVERAGE, ps.team());
        assert_eq!(js["xAxis"]["categories"], json!(["Visual Design ", "Front End "]));
        // Typography 2.5 -> 3, Color 1.5 -> 2, CSS 1.5 -> 2
        assert_eq!(js["series"][0]["data"], json!([2.5, 2.0]));
        assert_eq!(js["series"][0]["name"], json!(TEAM_STACK_AVERAGE));
    }

    #[test]
    fn summary_objects_follow_first_appearance() {
        let rows = vec![
            Row::new(&[
                ("Username", "zed"),
                ("Visual Design [Typography]", "High"),
                ("Front End [CSS]", "Low"),
            ]),
            Row::new(&[
                ("Username", "amy"),
                ("Visual Design [Typography]", "Low"),
                ("Front End [CSS]", "High"),
            ]),
        ];
        let ps = aggregate(&rows, &SurveyRules::default()).unwrap();

        let zed = profile_to_json(ps.get("zed").unwrap()).to_string();
        assert_eq!(
            zed,
            r#"{"categories":{"Visual Design ":{"Typography":3},"Front End ":{"CSS":1}},"categoryAverages":{"Visual Design ":3.0,"Front End ":1.0}}"#
        );

        let js = build_summary_js(&config(), &ps).unwrap();
        let keys: Vec<&str> = js["profiles"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zed", "amy", TEAM_STACK_AVERAGE]);
        let keys: Vec<&str> = js["views"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zed", "amy", TEAM_STACK_AVERAGE]);
    }

    #[test]
    fn summary_lists_people_with_team_last() {
        let js = build_summary_js(&config(), &profiles()).unwrap();
        assert_eq!(js["people"], json!(["alice", "bob", TEAM_STACK_AVERAGE]));
        assert_eq!(js["config"]["people"], json!(2));
        assert_eq!(js["config"]["identifierColumn"], json!("Username"));
        assert_eq!(
            js["profiles"]["bob"],
            json!({
                "categories": {
                    "Visual Design ": {"Typography": 2, "Color": 2},
                    "Front End ": {"CSS": 3}
                },
                "categoryAverages": {"Visual Design ": 2.0, "Front End ": 3.0}
            })
        );
        assert!(js["views"][TEAM_STACK_AVERAGE]["radar"].is_object());
    }
}
