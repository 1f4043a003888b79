use crate::animals::{run_animals, run_inheritance};
use crate::capabilities::run_capabilities;
use crate::collections::{run_collections, CollectionsReport};
use crate::failures::{run_failures, FailureOutcome};
use crate::files::run_file_round_trip;
use crate::functional::run_functional;
use crate::generic_box::GenericBox;
use crate::settings::TourSettings;
use crate::utils::{print_array, sum_numbers};
use crate::vehicles::run_vehicles;
use colored::Colorize;
use tracing::debug;

fn section(title: &str) {
    debug!(section = title, "starting section");
    println!("{}", format!("--- {} ---", title).bold().cyan());
}

/// What the sections with observable results produced.
#[derive(Debug)]
pub struct TourSummary {
    pub collections: CollectionsReport,
    pub file_lines: Option<Vec<String>>,
    pub failure: FailureOutcome<i32>,
    pub sum: f64,
}

/// Runs every section in order. Failures are reported inside their section.
pub fn run_tour(settings: &TourSettings) -> TourSummary {
    section("Structs and objects");
    run_animals();

    section("Inheritance");
    run_inheritance();

    section("Abstraction and traits");
    run_vehicles();
    run_capabilities();

    section("Collections");
    let collections = run_collections();

    section("Files");
    let file_lines = run_file_round_trip(&settings.output_file, &settings.file_content);

    section("Errors");
    let failure = run_failures(settings.out_of_bounds_index);

    section("Functional programming");
    run_functional(&settings.numbers);

    section("Generics");
    let mut text_box = GenericBox::new();
    text_box.set("Test".to_string());
    text_box.print_type();

    print_array(&[1, 2, 3]);

    let sum = sum_numbers(10, 20);
    println!("Sum of numbers: {:.1}", sum);

    TourSummary {
        collections,
        file_lines,
        failure,
        sum,
    }
}
