// Integration tests over the bundled state and county files in data/.

use std::path::PathBuf;

use popstats::{Dataset, NumberFormat, QuizAnswers, QuizOptions, Report, Summary, WindowPhase, WindowStop};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn bundled() -> Dataset {
    Dataset::load(&data_path("us_states.csv"), &data_path("ca_counties.csv")).unwrap()
}

#[test]
fn loads_all_records() {
    let dataset = bundled();
    assert_eq!(dataset.states().len(), 56);
    assert_eq!(dataset.counties().len(), 58);
    assert_eq!(dataset.voting_states().count(), 51);
}

#[test]
fn summary_matches_known_totals() {
    let summary = Summary::compute(&bundled(), 3).unwrap();

    assert_eq!(summary.states_by_area.largest, "Alaska");
    assert_eq!(summary.states_by_area.smallest, "District of Columbia");
    assert_eq!(summary.counties_by_area.largest, "San Bernardino");
    assert_eq!(summary.counties_by_area.smallest, "San Francisco");

    assert_eq!(summary.total_population, 335_073_176);
    assert_eq!(summary.states_only_population, 331_449_281);
    assert_eq!(summary.territory_population, 3_623_895);
    assert_eq!(summary.total_ec_votes, 538);
    assert_eq!(summary.ca_population, 39_538_223);

    assert_eq!(summary.top_counties.names, ["Los Angeles", "San Diego", "Orange"]);
    assert_eq!(summary.top_counties.population, 16_499_632);
}

#[test]
fn quiz_answers_excluding_dc() {
    let answers = QuizAnswers::compute(&bundled(), &QuizOptions::default()).unwrap();

    assert_eq!(answers.population_count.counties, ["Orange", "Riverside", "San Bernardino"]);
    assert_eq!(answers.population_count.threshold, 7_786_828);
    assert_eq!(answers.population_count.count, 38);

    assert_eq!(answers.area_count.county, "San Bernardino");
    assert_eq!(answers.area_count.count, 9);

    let window = &answers.electoral_window;
    assert_eq!(window.members.len(), 22);
    assert_eq!(window.population, 40_780_865);
    assert_eq!(window.ec_sum, 99);
    assert_eq!(window.anchor, "California");
    assert_eq!(window.anchor_ec_votes, 54);
    assert_eq!(window.difference, 45);
}

#[test]
fn quiz_answers_including_dc() {
    let options = QuizOptions { include_dc: true, ..QuizOptions::default() };
    let answers = QuizAnswers::compute(&bundled(), &options).unwrap();

    assert_eq!(answers.population_count.count, 39);
    assert_eq!(answers.area_count.count, 10);

    // With DC in the walk the running sum skips over the bounds.
    let window = &answers.electoral_window;
    assert!(window.members.is_empty());
    assert_eq!(window.phase, WindowPhase::AccumulatingToLowerBound);
    assert_eq!(window.stop, WindowStop::UpperBound);
    assert_eq!(window.difference, -54);
}

#[test]
fn text_report_formats_numbers() {
    let report = Report::compute(&bundled(), 3, &QuizOptions::default()).unwrap();
    let text = report.to_text(&NumberFormat::en_us()).unwrap();

    assert!(text.contains("The total US population is 335,073,176."));
    assert!(text.contains("California is 11.80% of the US total population."));
    assert!(text.contains("(Los Angeles, San Diego, Orange) in CA is 16,499,632 which is 41.73% of CA total population or 4.92% of the US population."));
    assert!(text.contains("3. ec_sum = 99, California ec votes: 54, ec_sum - California ec votes = 45"));
}
