//! A container for at most one value of a caller-chosen type.
//!
//! The box starts empty and becomes occupied on the first [`GenericBox::set`];
//! nothing moves it back to empty except consuming it with
//! [`GenericBox::into_inner`].

use crate::error::{TourError, TourResult};
use std::any::type_name;

#[derive(Debug, Clone, PartialEq)]
pub struct GenericBox<T> {
    value: Option<T>,
}

impl<T> Default for GenericBox<T> {
    fn default() -> Self {
        GenericBox { value: None }
    }
}

impl<T> GenericBox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, dropping whatever was there before.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// `None` until something has been stored.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Name of the stored type. An empty box has nothing to describe.
    pub fn describe_type(&self) -> TourResult<&'static str> {
        match self.value {
            Some(_) => Ok(type_name::<T>()),
            None => Err(TourError::EmptyBox),
        }
    }

    pub fn print_type(&self) {
        match self.describe_type() {
            Ok(name) => println!("Stored type: {}", name),
            Err(err) => println!("{}", err),
        }
    }
}
