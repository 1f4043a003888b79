// =============================================================================
// Abstract behavior: required methods plus a provided default
// =============================================================================

pub trait Vehicle {
    fn brand(&self) -> &str;

    fn drive(&self) -> String;

    fn honk(&self) -> String {
        "Beep beep!".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Car {
            brand: brand.into(),
        }
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn drive(&self) -> String {
        format!("The {} car is driving!", self.brand)
    }
}

pub fn run_vehicles() {
    let car = Car::new("Toyota");
    println!("{}", car.drive());
    println!("{}", car.honk());
}
