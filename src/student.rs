//! The student record: identity, enrollments, and tuition arithmetic.

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

use crate::catalog;
use crate::error::RegistrarError;

/// A course signup. `paid` reflects payment sufficiency at enrollment time
/// and is never revisited by later payments.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub course: String,
    pub paid: bool,
}

#[derive(Debug)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub enrollments: Vec<Enrollment>,
    balance_adjustment: f64,
}

impl Student {
    /// Create a student with a fresh random ID, no enrollments, and a zero
    /// balance adjustment. Any name is accepted, including the empty string.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: generate_id(),
            enrollments: Vec::new(),
            balance_adjustment: 0.0,
        }
    }

    /// Record a signup for `course`. Enrollments are append-only; duplicate
    /// signups for the same course are allowed and accumulate.
    pub fn enroll(&mut self, course: &str, paid: bool) {
        self.enrollments.push(Enrollment {
            course: course.to_string(),
            paid,
        });
    }

    /// Apply a tuition payment against a course price. A payment below the
    /// price is rejected without touching the balance; otherwise the
    /// overpayment `amount - price` is credited and the new adjustment
    /// returned.
    pub fn pay_tuition(&mut self, amount: f64, price: f64) -> Result<f64, RegistrarError> {
        if amount < price {
            return Err(RegistrarError::InsufficientPayment {
                paid: amount,
                required: price,
            });
        }
        self.balance_adjustment += amount - price;
        Ok(self.balance_adjustment)
    }

    /// Net credit accumulated from overpayments. This is the raw figure
    /// shown by "View balance", distinct from [`Student::total_owed`].
    pub fn balance_adjustment(&self) -> f64 {
        self.balance_adjustment
    }

    /// Nominal tuition for every enrollment (duplicates counted), minus the
    /// accumulated overpayment credit. Negative means the student is in
    /// credit.
    pub fn total_owed(&self) -> f64 {
        let tuition: f64 = self
            .enrollments
            .iter()
            .map(|e| catalog::price_of(&e.course))
            .sum();
        tuition - self.balance_adjustment
    }
}

/// 5-character uppercase alphanumeric ID. Not checked for uniqueness across
/// the roster; two students may collide.
fn generate_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(5)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}
