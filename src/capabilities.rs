// =============================================================================
// Independent traits implemented by one type
// =============================================================================

pub trait Flyable {
    fn fly(&self) -> String;
}

pub trait Swimmable {
    fn swim(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Duck;

impl Flyable for Duck {
    fn fly(&self) -> String {
        "The duck is flying!".to_string()
    }
}

impl Swimmable for Duck {
    fn swim(&self) -> String {
        "The duck is swimming!".to_string()
    }
}

/// Needs both capabilities, no common base type involved.
pub fn visit_pond<T: Flyable + Swimmable>(animal: &T) -> Vec<String> {
    vec![animal.fly(), animal.swim()]
}

pub fn run_capabilities() {
    for line in visit_pond(&Duck) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fish;

    impl Swimmable for Fish {
        fn swim(&self) -> String {
            "The fish is swimming!".to_string()
        }
    }

    fn swimmers() -> Vec<Box<dyn Swimmable>> {
        vec![Box::new(Duck), Box::new(Fish)]
    }

    #[test]
    fn test_duck_satisfies_both_bounds() {
        assert_eq!(
            visit_pond(&Duck),
            vec!["The duck is flying!", "The duck is swimming!"]
        );
    }

    #[test]
    fn test_capabilities_are_independent() {
        let lines: Vec<String> = swimmers().iter().map(|s| s.swim()).collect();
        assert_eq!(lines, vec!["The duck is swimming!", "The fish is swimming!"]);
    }
}
