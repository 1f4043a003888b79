use std::fmt::Display;

/// Numeric capability: anything that can be widened to `f64`.
pub trait Number: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

pub fn format_array<T: Display>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn print_array<T: Display>(items: &[T]) {
    for line in format_array(items) {
        println!("{}", line);
    }
}

pub fn sum_numbers<T: Number>(a: T, b: T) -> f64 {
    a.to_f64() + b.to_f64()
}
