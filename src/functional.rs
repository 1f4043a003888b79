use itertools::Itertools;

pub fn squares(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|n| n * n).collect()
}

pub fn evens(numbers: &[i32]) -> Vec<i32> {
    let is_even = |n: &&i32| **n % 2 == 0;
    numbers.iter().filter(is_even).copied().collect()
}

/// Callbacks held as values and invoked directly.
pub struct Callbacks<C, F, B>
where
    C: Fn(&str) -> String,
    F: Fn(&str) -> usize,
    B: Fn(i32, i32) -> i32,
{
    pub consumer: C,
    pub length: F,
    pub sum: B,
}

pub fn default_callbacks() -> Callbacks<
    impl Fn(&str) -> String,
    impl Fn(&str) -> usize,
    impl Fn(i32, i32) -> i32,
> {
    Callbacks {
        consumer: |s: &str| format!("Value: {}", s),
        length: |s: &str| s.chars().count(),
        sum: |a: i32, b: i32| a + b,
    }
}

pub fn run_functional(numbers: &[i32]) {
    println!("Squares: [{}]", squares(numbers).iter().join(", "));
    println!("Evens: [{}]", evens(numbers).iter().join(", "));

    let callbacks = default_callbacks();
    println!("{}", (callbacks.consumer)("Hello functional!"));
    println!("Word length: {}", (callbacks.length)("Rust"));
    println!("Sum: {}", (callbacks.sum)(2, 3));
}
