use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};

/// What the collections walkthrough observed.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionsReport {
    pub names: Vec<String>,
    pub unique_numbers: HashSet<i32>,
    pub grades: HashMap<String, u8>,
    pub dequeued: Option<String>,
    pub popped: Option<i32>,
}

pub fn build_names() -> Vec<String> {
    let mut names = Vec::new();
    names.push("Anna".to_string());
    names.push("Bartek".to_string());
    names.push("Celina".to_string());
    names
}

pub fn unique_numbers(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}

pub fn build_grades() -> HashMap<String, u8> {
    let mut grades = HashMap::new();
    grades.insert("Mathematics".to_string(), 5);
    grades.insert("Physics".to_string(), 4);
    grades.insert("Polish".to_string(), 3);
    grades
}

/// Offers every item at the back, then polls one from the front.
pub fn first_in_first_out<T>(items: impl IntoIterator<Item = T>) -> Option<T> {
    let mut queue: VecDeque<T> = VecDeque::new();
    for item in items {
        queue.push_back(item);
    }
    queue.pop_front()
}

/// Pushes every item, then pops the most recent one.
pub fn last_in_first_out<T>(items: impl IntoIterator<Item = T>) -> Option<T> {
    let mut stack: Vec<T> = Vec::new();
    for item in items {
        stack.push(item);
    }
    stack.pop()
}

pub fn collect_report() -> CollectionsReport {
    CollectionsReport {
        names: build_names(),
        unique_numbers: unique_numbers(&[1, 2, 2, 3]),
        grades: build_grades(),
        dequeued: first_in_first_out(["First".to_string(), "Second".to_string()]),
        popped: last_in_first_out([10, 20]),
    }
}

pub fn run_collections() -> CollectionsReport {
    let report = collect_report();

    for name in &report.names {
        println!("Name: {}", name);
    }

    // HashSet / HashMap iteration order is arbitrary, sort for stable output.
    println!(
        "Set: [{}]",
        report.unique_numbers.iter().sorted().join(", ")
    );

    for (subject, grade) in report.grades.iter().sorted() {
        println!("{}: {}", subject, grade);
    }

    if let Some(first) = &report.dequeued {
        println!("From queue: {}", first);
    }
    if let Some(top) = report.popped {
        println!("From stack: {}", top);
    }

    report
}
