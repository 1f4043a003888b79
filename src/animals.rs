// =============================================================================
// Structs, encapsulation and "inheritance" through composition
// =============================================================================

/// Anything that can introduce itself.
pub trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: u32,
}

impl Default for Animal {
    fn default() -> Self {
        Animal {
            name: "No name".to_string(),
            age: 0,
        }
    }
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Animal {
            name: name.into(),
            age,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Associated function, no `self` involved.
    pub fn info() -> &'static str {
        "Animal is the base type"
    }
}

impl Speaker for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("I am an animal: {}", self.name)
    }
}

/// A dog is an animal plus a breed. The `Speaker` impl replaces the animal's.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    animal: Animal,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Dog {
            animal: Animal::new(name, age),
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn as_animal(&self) -> &Animal {
        &self.animal
    }

    pub fn bark(&self) -> String {
        format!("{} barks!", self.animal.name())
    }
}

impl Speaker for Dog {
    fn name(&self) -> &str {
        self.animal.name()
    }

    fn speak(&self) -> String {
        format!("I am a dog: {}, breed: {}", self.name(), self.breed)
    }
}

pub fn run_animals() {
    let animal = Animal::new("Tiger", 5);
    println!("{}", animal.speak());
    println!("{}", Animal::info());
}

pub fn run_inheritance() {
    let dog = Dog::new("Rex", 3, "Shepherd");
    let speakers: [&dyn Speaker; 2] = [dog.as_animal(), &dog];
    for speaker in speakers {
        println!("{}", speaker.speak());
    }
    println!("{}", dog.bark());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_animal() {
        let animal = Animal::default();
        assert_eq!(animal.name(), "No name");
        assert_eq!(animal.age(), 0);
    }

    #[test]
    fn test_setters() {
        let mut animal = Animal::new("Tiger", 5);
        animal.set_name("Lion");
        animal.set_age(7);
        assert_eq!(animal.name(), "Lion");
        assert_eq!(animal.age(), 7);
        assert_eq!(animal.speak(), "I am an animal: Lion");
    }

    #[test]
    fn test_dog_overrides_speak() {
        let dog = Dog::new("Rex", 3, "Shepherd");
        assert_eq!(dog.speak(), "I am a dog: Rex, breed: Shepherd");
        assert_eq!(dog.as_animal().speak(), "I am an animal: Rex");
        assert_eq!(dog.bark(), "Rex barks!");
        assert_eq!(dog.as_animal().age(), 3);
    }

    #[test]
    fn test_dynamic_dispatch_picks_override() {
        let dog = Dog::new("Rex", 3, "Shepherd");
        let speaker: &dyn Speaker = &dog;
        assert!(speaker.speak().starts_with("I am a dog"));
    }
}
